//! Subsystems and their metadata.

use indexmap::IndexMap;

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

use super::{Class, Relationship};

/// A metadata value, tagged by how the source wrote it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub enum MetadataValue {
    Text(String),
    /// A citation of a named resource (logo, boilerplate, ...)
    Resource(String),
}

impl MetadataValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Resource(s) => s,
        }
    }

    pub fn is_resource(&self) -> bool {
        matches!(self, Self::Resource(_))
    }
}

/// The top-level compiled unit, one per input text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct Subsystem {
    pub name: String,
    pub abbreviation: Option<String>,
    pub domain: String,
    pub classes: Vec<Class>,
    pub relationships: Vec<Relationship>,
    pub metadata: IndexMap<String, MetadataValue>,
}

impl Subsystem {
    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn class_by_keyletter(&self, keyletter: &str) -> Option<&Class> {
        self.classes
            .iter()
            .find(|c| c.keyletter.as_deref() == Some(keyletter))
    }

    pub fn relationship(&self, rnum: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.rnum() == rnum)
    }

    /// Relationships a class takes part in, in declaration order
    pub fn relationships_of<'a>(
        &'a self,
        class_name: &'a str,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships
            .iter()
            .filter(move |r| r.involves(class_name))
    }

    pub fn metadata(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }
}
