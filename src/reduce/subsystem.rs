//! Subsystem assembly (the root reduction).

use indexmap::IndexMap;

use super::{Children, Reduced, unexpected};
use crate::error::StructuralError;
use crate::model::Subsystem;
use crate::tree::Rule;

/// Facts from the domain/subsystem header lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsystemHeader {
    pub name: String,
    pub abbreviation: Option<String>,
    pub domain: String,
}

pub(super) fn subsystem_header(mut children: Children) -> Result<SubsystemHeader, StructuralError> {
    let owner = Rule::SubsystemHeader;
    Ok(SubsystemHeader {
        name: children.required_text(owner, Rule::SubsystemName)?,
        abbreviation: children.optional_text(owner, Rule::Abbreviation)?,
        domain: children.required_text(owner, Rule::DomainName)?,
    })
}

/// Every section but the header is optional; an empty subsystem is legal
pub(super) fn subsystem(mut children: Children) -> Result<Subsystem, StructuralError> {
    let owner = Rule::Subsystem;
    let header = match children.take(Rule::SubsystemHeader) {
        Some(Reduced::SubsystemHeader(header)) => header,
        Some(other) => return Err(unexpected(owner, &other)),
        None => {
            return Err(StructuralError::MissingChild {
                rule: owner,
                expected: Rule::SubsystemHeader,
            });
        }
    };
    let classes = match children.take(Rule::ClassSet) {
        Some(Reduced::Classes(classes)) => classes,
        Some(other) => return Err(unexpected(owner, &other)),
        None => Vec::new(),
    };
    let relationships = match children.take(Rule::RelSection) {
        Some(Reduced::Relationships(rels)) => rels,
        Some(other) => return Err(unexpected(owner, &other)),
        None => Vec::new(),
    };
    let metadata = match children.take(Rule::Metadata) {
        Some(Reduced::Metadata(items)) => items,
        Some(other) => return Err(unexpected(owner, &other)),
        None => IndexMap::new(),
    };

    Ok(Subsystem {
        name: header.name,
        abbreviation: header.abbreviation,
        domain: header.domain,
        classes,
        relationships,
        metadata,
    })
}
