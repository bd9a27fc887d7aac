//! Non-fatal findings raised while compiling.
//!
//! Warnings never change the compiled model. They flag source that compiles
//! under a "last definition wins" policy but is probably a mistake.

use std::fmt;

/// A lint warning
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Warning {
    /// A metadata key was defined again; the later value was kept.
    DuplicateMetadataKey { key: String },
    /// A class declared the same attribute twice; the later one was kept.
    DuplicateAttribute { class: String, attribute: String },
    /// A resource citation names nothing in the resource table.
    UnknownResource { key: String, resource: String },
}

impl Warning {
    /// Stable code for filtering
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateMetadataKey { .. } => "W0101",
            Self::DuplicateAttribute { .. } => "W0201",
            Self::UnknownResource { .. } => "W0102",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMetadataKey { key } => {
                write!(f, "[{}] metadata key `{key}` redefined; keeping last value", self.code())
            }
            Self::DuplicateAttribute { class, attribute } => write!(
                f,
                "[{}] class `{class}` declares `{attribute}` more than once; keeping last",
                self.code()
            ),
            Self::UnknownResource { key, resource } => write!(
                f,
                "[{}] metadata `{key}` cites unknown resource `{resource}`",
                self.code()
            ),
        }
    }
}
