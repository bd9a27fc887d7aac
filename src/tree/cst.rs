//! [`ParseTree`] over the rowan CST.

use super::{ParseTree, Rule};
use crate::parser::SyntaxElement;

impl ParseTree for SyntaxElement {
    fn rule(&self) -> Rule {
        self.kind().into()
    }

    fn text(&self) -> String {
        match self {
            SyntaxElement::Node(node) => node.text().to_string(),
            SyntaxElement::Token(token) => token.text().to_string(),
        }
    }

    fn children(&self) -> Vec<Self> {
        match self {
            SyntaxElement::Node(node) => node.children_with_tokens().collect(),
            SyntaxElement::Token(_) => Vec::new(),
        }
    }
}
