//! Attribute assembly.

use indexmap::IndexSet;

use super::{Children, Fact, Reduced, unexpected};
use crate::error::StructuralError;
use crate::model::Attribute;
use crate::tree::Rule;

/// Attributes of one class, by destination category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBlock {
    pub normal: Vec<Attribute>,
    pub ignored: Vec<Attribute>,
}

impl AttributeBlock {
    /// Route an attribute to its category
    pub fn push(&mut self, attribute: Attribute) {
        if attribute.is_ignored {
            self.ignored.push(attribute);
        } else {
            self.normal.push(attribute);
        }
    }

    pub fn len(&self) -> usize {
        self.normal.len() + self.ignored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fold the facts of one attribute line into an [`Attribute`].
///
/// Scalar facts overwrite, so a repeated one keeps the last value. List facts
/// append unless already present, keeping first-seen order. A constrained
/// identifier is always an identifier too.
pub fn assemble_attribute(
    facts: impl IntoIterator<Item = Fact>,
) -> Result<Attribute, StructuralError> {
    let mut name = None;
    let mut type_name = None;
    let mut identifiers = IndexSet::new();
    let mut constrained_identifiers = IndexSet::new();
    let mut formalizes = IndexSet::new();
    let mut union_formalizes = IndexSet::new();
    let mut reference = None;
    let mut is_ignored = false;

    for fact in facts {
        match fact {
            Fact::Name(value) => name = Some(value),
            Fact::Type(value) => type_name = Some(value),
            Fact::Id(value) => {
                identifiers.insert(value);
            }
            Fact::ConstrainedId(value) => {
                identifiers.insert(value.clone());
                constrained_identifiers.insert(value);
            }
            Fact::Rnum(value) => {
                formalizes.insert(value);
            }
            Fact::UnionRnum(value) => {
                union_formalizes.insert(value);
            }
            Fact::Reference(nav) => reference = Some(nav),
            Fact::Ignore => is_ignored = true,
        }
    }

    let name = name.ok_or(StructuralError::MissingRequiredField { field: "name" })?;
    // Ignored attributes are only held for diagnostics and may be bare names
    if !is_ignored && type_name.is_none() && reference.is_none() && formalizes.is_empty() {
        return Err(StructuralError::MissingRequiredField {
            field: "type or reference",
        });
    }

    Ok(Attribute {
        name,
        type_name,
        identifiers,
        constrained_identifiers,
        formalizes,
        union_formalizes,
        reference,
        is_ignored,
    })
}

pub(super) fn attr(children: Children) -> Result<Attribute, StructuralError> {
    let mut facts = Vec::new();
    for (_, value) in children {
        match value {
            Reduced::Facts(mut more) => facts.append(&mut more),
            other => return Err(unexpected(Rule::Attr, &other)),
        }
    }
    assemble_attribute(facts)
}

pub(super) fn attr_block(children: Children) -> Result<AttributeBlock, StructuralError> {
    let mut block = AttributeBlock::default();
    for (_, value) in children {
        match value {
            Reduced::Attribute(attribute) => block.push(attribute),
            other => return Err(unexpected(Rule::AttrBlock, &other)),
        }
    }
    Ok(block)
}
