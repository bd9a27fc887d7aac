//! Owned parse trees for driving the reducers without the front end.

use super::{ParseTree, Rule};

/// A plain parse tree node.
///
/// Leaves carry their matched text; composite nodes derive theirs from the
/// children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    rule: Rule,
    text: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(rule: Rule, text: impl Into<String>) -> Self {
        Self {
            rule,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn node(rule: Rule, children: impl IntoIterator<Item = TreeNode>) -> Self {
        Self {
            rule,
            text: String::new(),
            children: children.into_iter().collect(),
        }
    }

    /// A name-like node: words split on single spaces, with the spaces kept
    /// as delimiter fragments.
    pub fn name(rule: Rule, text: &str) -> Self {
        let mut children = Vec::new();
        for (i, word) in text.split(' ').enumerate() {
            if i > 0 {
                children.push(Self::leaf(Rule::Delimiter, " "));
            }
            children.push(Self::leaf(Rule::Word, word));
        }
        Self::node(rule, children)
    }

    /// A node wrapping a single leaf of the given rule
    pub fn wrap(rule: Rule, leaf_rule: Rule, text: &str) -> Self {
        Self::node(rule, [Self::leaf(leaf_rule, text)])
    }

    /// Append a child, builder style
    pub fn with(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }
}

impl ParseTree for TreeNode {
    fn rule(&self) -> Rule {
        self.rule
    }

    fn text(&self) -> String {
        if self.children.is_empty() {
            self.text.clone()
        } else {
            self.children.iter().map(ParseTree::text).collect()
        }
    }

    fn children(&self) -> Vec<Self> {
        self.children.clone()
    }
}
