//! Typed facts: the intermediate currency of attribute assembly.

use crate::model::NavigationRef;

/// Field a fact contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKey {
    Name,
    Type,
    Id,
    ConstrainedId,
    Rnum,
    UnionRnum,
    Reference,
    Ignore,
}

impl FactKey {
    /// List keys accumulate into an ordered-unique set instead of overwriting
    pub fn is_list(self) -> bool {
        matches!(self, Self::Id | Self::ConstrainedId | Self::Rnum | Self::UnionRnum)
    }
}

/// One fact about an attribute, produced by a low-level reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    Name(String),
    Type(String),
    /// Membership in an identifier group
    Id(String),
    /// Membership in an identifier group that only holds under a constraint
    ConstrainedId(String),
    /// A relationship the attribute refers to
    Rnum(String),
    /// A relationship reached through a union of subclasses
    UnionRnum(String),
    Reference(NavigationRef),
    /// Route the attribute to the ignored category
    Ignore,
}

impl Fact {
    pub fn key(&self) -> FactKey {
        match self {
            Self::Name(_) => FactKey::Name,
            Self::Type(_) => FactKey::Type,
            Self::Id(_) => FactKey::Id,
            Self::ConstrainedId(_) => FactKey::ConstrainedId,
            Self::Rnum(_) => FactKey::Rnum,
            Self::UnionRnum(_) => FactKey::UnionRnum,
            Self::Reference(_) => FactKey::Reference,
            Self::Ignore => FactKey::Ignore,
        }
    }

    pub fn is_list(&self) -> bool {
        self.key().is_list()
    }
}
