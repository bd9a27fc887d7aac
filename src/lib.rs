//! # xuml-model
//!
//! Compiler from the textual information-model notation into an in-memory
//! model of subsystems, classes, attributes and relationships.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! compiler  → Entry points: text or tree in, Subsystem out
//!   ↓
//! reduce    → Post-order reducers folding a parse tree into the model
//!   ↓
//! tree      → ParseTree abstraction over the CST or synthetic trees
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan CST
//!   ↓
//! model     → Subsystem, Class, Attribute, Relationship values
//!   ↓
//! base      → Primitives (LineIndex, LineCol, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → parser → tree → reduce → compiler)
// ============================================================================

/// Foundation types: line/column mapping, text ranges
pub mod base;

/// The compiled model
pub mod model;

/// Parser: Logos lexer, recursive-descent parser, rowan CST
pub mod parser;

/// Parse tree abstraction consumed by the reducers
pub mod tree;

/// Reducers: the bottom-up fold from tree to model
pub mod reduce;

/// Compile entry points
pub mod compiler;

/// Compile options and resource table
pub mod config;

/// Lint warnings
pub mod diagnostics;

/// Error types
pub mod error;

/// JSON and YAML forms of a compiled subsystem
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export the entry points
pub use compiler::{Compilation, Compiler, compile, compile_str};
pub use config::{CompileOptions, ResourceTable};
pub use diagnostics::Warning;
pub use error::{CompileError, StructuralError};

// Re-export the model
pub use model::{
    AssocClass, Attribute, Class, MetadataValue, Multiplicity, NavTarget, NavigationRef,
    Relationship, Side, Subsystem,
};

// Re-export foundation types
pub use base::{LineCol, LineIndex, Span, TextRange, TextSize};
pub use tree::{ParseTree, Rule, RulePath, TreeNode};
