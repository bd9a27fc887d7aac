//! Error types for compilation.

use thiserror::Error;

use crate::parser::SyntaxError;
use crate::tree::{Rule, RulePath};

/// Violations of the parse tree contract.
///
/// A well-formed tree never produces these; each one points at a grammar or
/// front-end defect rather than a transient condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A navigation must name exactly one of phrase, class or attribute.
    #[error("navigation must name exactly one target, found {targets}")]
    MalformedNavigation { targets: usize },

    /// Attribute without a name, or without both a type and a reference.
    #[error("attribute is missing required {field}")]
    MissingRequiredField { field: &'static str },

    /// Generalization without any subclass.
    #[error("generalization of `{superclass}` has no subclasses")]
    EmptySubclassList { superclass: String },

    /// A required child rule is absent.
    #[error("`{rule}` is missing its `{expected}` child")]
    MissingChild { rule: Rule, expected: Rule },

    /// A child whose value the rule cannot fold.
    #[error("`{rule}` cannot take a {found} child")]
    UnexpectedChild { rule: Rule, found: &'static str },

    /// A leaf whose literal text is outside the rule's vocabulary.
    #[error("`{rule}` cannot be `{text}`")]
    InvalidLiteral { rule: Rule, text: String },

    /// The root of the tree did not reduce to a subsystem.
    #[error("root rule `{rule}` does not produce a subsystem")]
    UnexpectedRoot { rule: Rule },

    /// The tree still contains input the front end gave up on.
    #[error("tree contains unparsed input `{text}`")]
    ErrorNode { text: String },
}

/// Errors returned by the compile entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The parse tree broke its contract at `path`.
    #[error("{path}: {error}")]
    Structural {
        path: RulePath,
        #[source]
        error: StructuralError,
    },

    /// The text front end rejected the input.
    #[error("{}", render_syntax_errors(.0))]
    Syntax(Vec<SyntaxError>),
}

impl CompileError {
    /// The structural error, if this is one
    pub fn structural(&self) -> Option<&StructuralError> {
        match self {
            Self::Structural { error, .. } => Some(error),
            Self::Syntax(_) => None,
        }
    }
}

fn render_syntax_errors(errors: &[SyntaxError]) -> String {
    let mut lines = Vec::with_capacity(errors.len());
    for error in errors {
        lines.push(error.to_string());
    }
    format!("{} syntax error(s):\n  {}", errors.len(), lines.join("\n  "))
}
