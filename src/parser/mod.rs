//! Rowan-based parser for the model notation
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! Reducers (via ParseTree) → Subsystem model
//! ```
//!
//! ## Notation
//!
//! ```text
//! metadata
//! Title : Elevator Transport
//! Copyright notice > MIT
//!
//! domain Elevator Management
//! subsystem Transport, TRANS
//! class Cabin, CAB
//! attributes
//! Shaft {I, R4 > Shaft}
//! Travel direction : Direction
//! --
//! relationships
//! R4
//! rides in, 1 Shaft
//! is ridden by, 1 Cabin
//! ```

#[allow(clippy::module_inception)]
mod parser;

mod lexer;
mod syntax_kind;

pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse};
pub use syntax_kind::{ModelLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
