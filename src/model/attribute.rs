//! Attributes and relationship navigation.

use indexmap::IndexSet;

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

/// One declared field of a class
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct Attribute {
    pub name: String,
    /// Declared type. Absent only when the value comes from a relationship.
    pub type_name: Option<String>,
    /// Identifier groups ("I", "I2", ...) in first-seen order
    pub identifiers: IndexSet<String>,
    /// Subset of `identifiers` that only participate under a constraint
    pub constrained_identifiers: IndexSet<String>,
    /// Relationship numbers this attribute refers to, navigation included
    pub formalizes: IndexSet<String>,
    /// Subset of `formalizes` reached through a union of subclasses
    pub union_formalizes: IndexSet<String>,
    pub reference: Option<NavigationRef>,
    pub is_ignored: bool,
}

impl Attribute {
    /// A plain typed attribute with no identifiers or references
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: Some(type_name.into()),
            identifiers: IndexSet::new(),
            constrained_identifiers: IndexSet::new(),
            formalizes: IndexSet::new(),
            union_formalizes: IndexSet::new(),
            reference: None,
            is_ignored: false,
        }
    }

    /// Check whether the attribute belongs to the given identifier group
    pub fn in_identifier(&self, id: &str) -> bool {
        self.identifiers.contains(id)
    }

    /// Referential attributes take their value across a relationship
    pub fn is_referential(&self) -> bool {
        self.reference.is_some() || !self.formalizes.is_empty()
    }
}

/// How a referential attribute reaches its value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct NavigationRef {
    pub rnum: String,
    pub is_union: bool,
    pub is_constrained: bool,
    pub target: NavTarget,
}

/// The single navigation target named in the source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub enum NavTarget {
    /// Traverse by relationship phrase
    Phrase(String),
    /// Traverse to an explicitly named class
    Class(String),
    /// Name the remote attribute directly
    Attribute(String),
}

impl NavTarget {
    pub fn text(&self) -> &str {
        match self {
            Self::Phrase(s) | Self::Class(s) | Self::Attribute(s) => s,
        }
    }
}
