//! Compile entry points.
//!
//! A [`Compiler`] turns one parse tree into one [`Subsystem`]. Trees may come
//! from the text front end or be built directly; either way the reduction is
//! the same. Each call owns its own reduction state, so one compiler can
//! serve many inputs, in parallel if needed.

use rayon::prelude::*;
use tracing::debug;

use crate::config::CompileOptions;
use crate::diagnostics::Warning;
use crate::error::{CompileError, StructuralError};
use crate::model::Subsystem;
use crate::parser::{self, SyntaxElement};
use crate::reduce::{Reduced, Reducer};
use crate::tree::{ParseTree, RulePath};

/// A compiled subsystem with the warnings raised on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub subsystem: Subsystem,
    pub warnings: Vec<Warning>,
}

/// Compiles parse trees into subsystems
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    options: CompileOptions,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile a parse tree whose root is the subsystem rule
    pub fn compile_tree<T: ParseTree>(&self, tree: &T) -> Result<Compilation, CompileError> {
        let mut reducer = Reducer::new(&self.options);
        let subsystem = match reducer.reduce(tree)? {
            Reduced::Subsystem(subsystem) => subsystem,
            _ => {
                let rule = tree.rule();
                return Err(CompileError::Structural {
                    path: RulePath(vec![rule]),
                    error: StructuralError::UnexpectedRoot { rule },
                });
            }
        };

        debug!(
            "compiled subsystem `{}`: {} classes, {} relationships, {} metadata items",
            subsystem.name,
            subsystem.classes.len(),
            subsystem.relationships.len(),
            subsystem.metadata.len()
        );

        Ok(Compilation {
            subsystem,
            warnings: reducer.finish(),
        })
    }

    /// Parse and compile model text
    pub fn compile_text(&self, text: &str) -> Result<Compilation, CompileError> {
        let parse = parser::parse(text);
        if !parse.ok() {
            debug!("rejecting input with {} syntax errors", parse.errors.len());
            return Err(CompileError::Syntax(parse.errors));
        }
        self.compile_tree(&SyntaxElement::Node(parse.syntax()))
    }

    /// Compile several texts in parallel; results keep the input order
    pub fn compile_many<S>(&self, texts: &[S]) -> Vec<Result<Compilation, CompileError>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.compile_text(text.as_ref()))
            .collect()
    }
}

/// Compile a parse tree with default options, dropping warnings
pub fn compile<T: ParseTree>(tree: &T) -> Result<Subsystem, CompileError> {
    Compiler::default()
        .compile_tree(tree)
        .map(|compilation| compilation.subsystem)
}

/// Parse and compile model text with default options, dropping warnings
pub fn compile_str(text: &str) -> Result<Subsystem, CompileError> {
    Compiler::default()
        .compile_text(text)
        .map(|compilation| compilation.subsystem)
}
