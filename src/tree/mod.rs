//! Parse tree abstraction consumed by the reducers.
//!
//! The reducers never walk syntax themselves. They see a tree through
//! [`ParseTree`]: a rule identity, the matched text, and ordered children.
//! Two implementations ship with the crate:
//!
//! - [`SyntaxElement`](crate::parser::SyntaxElement) - the rowan CST built by
//!   the text front end
//! - [`TreeNode`] - a plain owned tree for building synthetic inputs

mod cst;
mod rule;
mod synthetic;

pub use rule::{Rule, RulePath};
pub use synthetic::TreeNode;

/// A node of a labeled parse tree
pub trait ParseTree: Sized {
    /// The grammar rule that produced this node
    fn rule(&self) -> Rule;

    /// The full matched text of this node
    fn text(&self) -> String;

    /// Child nodes in source order, tokens included
    fn children(&self) -> Vec<Self>;
}

#[cfg(test)]
mod tests;
