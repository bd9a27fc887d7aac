//! Reducers for leaf and near-leaf rules.

use super::{Children, Fact, Reduced, unexpected};
use crate::error::StructuralError;
use crate::model::Multiplicity;
use crate::tree::Rule;

/// Reduce a leaf from its matched text
pub(super) fn leaf(rule: Rule, text: String) -> Result<Reduced, StructuralError> {
    match rule {
        Rule::Mult => match Multiplicity::from_literal(&text) {
            Some(mult) => Ok(Reduced::Mult(mult)),
            None => Err(StructuralError::InvalidLiteral { rule, text }),
        },
        Rule::UnionMark | Rule::ConstrainedMark => Ok(Reduced::Marker),
        Rule::IgnoreMark => Ok(Reduced::Facts(vec![Fact::Ignore])),
        _ => Ok(Reduced::Text(text)),
    }
}

/// Concatenate text fragments in encounter order, no separator
pub(super) fn join(owner: Rule, children: Children) -> Result<String, StructuralError> {
    let mut joined = String::new();
    for (_, value) in children {
        match value {
            Reduced::Text(fragment) => joined.push_str(&fragment),
            other => return Err(unexpected(owner, &other)),
        }
    }
    Ok(joined)
}

/// `I2c` → membership in I2, constrained
pub(super) fn id_tag(mut children: Children) -> Result<Vec<Fact>, StructuralError> {
    let id = children.required_text(Rule::IdTag, Rule::Id)?;
    if children.has(Rule::ConstrainedMark) {
        Ok(vec![Fact::Id(id.clone()), Fact::ConstrainedId(id)])
    } else {
        Ok(vec![Fact::Id(id)])
    }
}
