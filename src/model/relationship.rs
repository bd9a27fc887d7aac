//! Relationships between classes.

use std::fmt;

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

/// Multiplicity of one side of an association.
///
/// Always written and rendered as its literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub enum Multiplicity {
    #[cfg_attr(feature = "interchange", serde(rename = "1"))]
    One,
    #[cfg_attr(feature = "interchange", serde(rename = "M"))]
    Many,
}

impl Multiplicity {
    pub fn from_literal(text: &str) -> Option<Self> {
        match text {
            "1" => Some(Self::One),
            "M" => Some(Self::Many),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Many => "M",
        }
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a binary association
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct Side {
    pub phrase: String,
    pub multiplicity: Multiplicity,
    pub class_name: String,
}

impl Side {
    pub fn new(
        phrase: impl Into<String>,
        multiplicity: Multiplicity,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            phrase: phrase.into(),
            multiplicity,
            class_name: class_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub struct AssocClass {
    pub class_name: String,
    pub multiplicity: Multiplicity,
}

/// A numbered relationship in normalized form.
///
/// Plain associations and associations with an association class share the
/// `Binary` shape; the association class is simply optional.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize))]
pub enum Relationship {
    Binary {
        rnum: String,
        t_side: Side,
        p_side: Side,
        association_class: Option<AssocClass>,
    },
    Generalization {
        rnum: String,
        superclass: String,
        subclasses: Vec<String>,
    },
}

impl Relationship {
    pub fn rnum(&self) -> &str {
        match self {
            Self::Binary { rnum, .. } | Self::Generalization { rnum, .. } => rnum,
        }
    }

    /// Names of every class taking part, association class included
    pub fn classes(&self) -> Vec<&str> {
        match self {
            Self::Binary {
                t_side,
                p_side,
                association_class,
                ..
            } => {
                let mut names = vec![t_side.class_name.as_str(), p_side.class_name.as_str()];
                if let Some(assoc) = association_class {
                    names.push(assoc.class_name.as_str());
                }
                names
            }
            Self::Generalization {
                superclass,
                subclasses,
                ..
            } => std::iter::once(superclass.as_str())
                .chain(subclasses.iter().map(String::as_str))
                .collect(),
        }
    }

    pub fn involves(&self, class_name: &str) -> bool {
        self.classes().contains(&class_name)
    }

    pub fn is_generalization(&self) -> bool {
        matches!(self, Self::Generalization { .. })
    }
}
