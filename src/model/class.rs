//! Classes.

use indexmap::IndexMap;

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

use super::Attribute;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct Class {
    pub name: String,
    pub keyletter: Option<String>,
    /// Subsystem this class is imported from, if it is not defined locally
    pub import: Option<String>,
    pub attributes: IndexMap<String, Attribute>,
    /// Attributes marked to be left out, kept for diagnostics
    pub ignored_attributes: IndexMap<String, Attribute>,
    /// Unparsed method lines
    pub methods: Option<Vec<String>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyletter: None,
            import: None,
            attributes: IndexMap::new(),
            ignored_attributes: IndexMap::new(),
            methods: None,
        }
    }

    pub fn is_imported(&self) -> bool {
        self.import.is_some()
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Attributes making up one identifier group, in declaration order
    pub fn identifier<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Attribute> + 'a {
        self.attributes.values().filter(move |a| a.in_identifier(id))
    }

    /// All identifier group names used by this class, in first-seen order
    pub fn identifier_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for id in self.attributes.values().flat_map(|a| a.identifiers.iter()) {
            if !groups.contains(&id.as_str()) {
                groups.push(id);
            }
        }
        groups
    }
}
