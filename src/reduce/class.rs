//! Class assembly.

use super::{AttributeBlock, Children, Lints, Reduced, unexpected};
use crate::diagnostics::Warning;
use crate::error::StructuralError;
use crate::model::Class;
use crate::tree::Rule;

/// Facts from a class header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassHeader {
    pub name: String,
    pub keyletter: Option<String>,
    pub import: Option<String>,
}

pub(super) fn class_header(mut children: Children) -> Result<ClassHeader, StructuralError> {
    let owner = Rule::ClassHeader;
    Ok(ClassHeader {
        name: children.required_text(owner, Rule::ClassName)?,
        keyletter: children.optional_text(owner, Rule::Keyletter)?,
        import: children.optional_text(owner, Rule::Import)?,
    })
}

pub(super) fn method_block(children: Children) -> Result<Vec<String>, StructuralError> {
    children
        .into_iter()
        .map(|(_, value)| value.into_text(Rule::MethodBlock))
        .collect()
}

/// Fold header, attribute block and optional method block into a [`Class`]
pub(super) fn class_block(
    lints: &mut Lints<'_>,
    mut children: Children,
) -> Result<Class, StructuralError> {
    let owner = Rule::ClassBlock;
    let header = match children.take(Rule::ClassHeader) {
        Some(Reduced::ClassHeader(header)) => header,
        Some(other) => return Err(unexpected(owner, &other)),
        None => {
            return Err(StructuralError::MissingChild {
                rule: owner,
                expected: Rule::ClassHeader,
            });
        }
    };
    let block = match children.take(Rule::AttrBlock) {
        Some(Reduced::AttributeBlock(block)) => block,
        Some(other) => return Err(unexpected(owner, &other)),
        None => AttributeBlock::default(),
    };
    let methods = match children.take(Rule::MethodBlock) {
        Some(Reduced::Methods(lines)) => Some(lines),
        Some(other) => return Err(unexpected(owner, &other)),
        None => None,
    };

    let mut class = Class::new(header.name);
    class.keyletter = header.keyletter;
    class.import = header.import;
    class.methods = methods;

    let warn_duplicates = lints.options.warn_duplicate_attributes;
    for attribute in block.normal {
        let name = attribute.name.clone();
        if class.attributes.insert(name.clone(), attribute).is_some() && warn_duplicates {
            lints.warn(Warning::DuplicateAttribute {
                class: class.name.clone(),
                attribute: name,
            });
        }
    }
    for attribute in block.ignored {
        let name = attribute.name.clone();
        if class.ignored_attributes.insert(name.clone(), attribute).is_some() && warn_duplicates {
            lints.warn(Warning::DuplicateAttribute {
                class: class.name.clone(),
                attribute: name,
            });
        }
    }
    Ok(class)
}

pub(super) fn class_set(children: Children) -> Result<Vec<Class>, StructuralError> {
    children
        .into_iter()
        .map(|(_, value)| match value {
            Reduced::Class(class) => Ok(class),
            other => Err(unexpected(Rule::ClassSet, &other)),
        })
        .collect()
}
