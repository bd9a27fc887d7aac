//! Foundation types shared by the front end and the compiler.
//!
//! - [`LineCol`], [`LineIndex`] - byte offset to line/column conversion
//! - [`Span`] - line/column range used in diagnostics
//!
//! This module has NO dependencies on other crate modules.

mod position;

pub use position::{LineCol, LineIndex, Span};

// Re-export rowan's text types so callers don't need a direct dependency
pub use rowan::{TextRange, TextSize};
