//! Metadata folding.

use indexmap::IndexMap;

use super::{Children, Lints, Reduced, unexpected};
use crate::diagnostics::Warning;
use crate::error::StructuralError;
use crate::model::MetadataValue;
use crate::tree::Rule;

pub(super) fn data_item(
    mut children: Children,
) -> Result<(String, MetadataValue), StructuralError> {
    let owner = Rule::DataItem;
    let key = children.required_text(owner, Rule::ItemName)?;
    let value = children
        .take(Rule::TextItem)
        .or_else(|| children.take(Rule::ResourceItem));
    match value {
        Some(Reduced::MetadataValue(value)) => Ok((key, value)),
        Some(other) => Err(unexpected(owner, &other)),
        None => Err(StructuralError::MissingChild {
            rule: owner,
            expected: Rule::TextItem,
        }),
    }
}

/// Fold metadata lines in source order; a repeated key keeps its last value
pub(super) fn metadata(
    lints: &mut Lints<'_>,
    children: Children,
) -> Result<IndexMap<String, MetadataValue>, StructuralError> {
    let options = lints.options;
    let mut items = IndexMap::new();
    for (_, item) in children {
        let (key, value) = match item {
            Reduced::MetadataItem(key, value) => (key, value),
            other => return Err(unexpected(Rule::Metadata, &other)),
        };

        if let (MetadataValue::Resource(resource), Some(table)) = (&value, &options.resources) {
            if !table.contains(resource) {
                let warning = Warning::UnknownResource {
                    key: key.clone(),
                    resource: resource.clone(),
                };
                lints.warn(warning);
            }
        }

        if items.insert(key.clone(), value).is_some() && options.warn_duplicate_metadata {
            lints.warn(Warning::DuplicateMetadataKey { key });
        }
    }
    Ok(items)
}
