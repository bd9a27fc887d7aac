//! Relationship references on attributes.

use super::{Children, Fact};
use crate::error::StructuralError;
use crate::model::{NavTarget, NavigationRef};
use crate::tree::Rule;

/// Bare reference: the attribute formalizes a relationship
pub(super) fn relrnum(mut children: Children) -> Result<Vec<Fact>, StructuralError> {
    let rnum = children.required_text(Rule::RelRnum, Rule::Rnum)?;
    if children.has(Rule::UnionMark) {
        Ok(vec![Fact::Rnum(rnum.clone()), Fact::UnionRnum(rnum)])
    } else {
        Ok(vec![Fact::Rnum(rnum)])
    }
}

/// Build exactly one [`NavigationRef`].
///
/// The target kind is decided by which target rule is present, never by
/// position. Zero or several targets is a malformed navigation.
pub(super) fn navigation(mut children: Children) -> Result<Vec<Fact>, StructuralError> {
    let owner = Rule::Navigation;
    let rnum = children.required_text(owner, Rule::Rnum)?;
    let is_union = children.has(Rule::UnionMark);
    let is_constrained = children.has(Rule::ConstrainedMark);

    let forms: [(Rule, fn(String) -> NavTarget); 3] = [
        (Rule::Phrase, NavTarget::Phrase),
        (Rule::ClassName, NavTarget::Class),
        (Rule::AttrRefName, NavTarget::Attribute),
    ];
    let mut targets = Vec::new();
    for (rule, make) in forms {
        for value in children.take_all(rule) {
            targets.push(make(value.into_text(owner)?));
        }
    }

    if targets.len() != 1 {
        return Err(StructuralError::MalformedNavigation {
            targets: targets.len(),
        });
    }
    let Some(target) = targets.pop() else {
        return Err(StructuralError::MalformedNavigation { targets: 0 });
    };

    Ok(vec![
        Fact::Rnum(rnum.clone()),
        Fact::Reference(NavigationRef {
            rnum,
            is_union,
            is_constrained,
            target,
        }),
    ])
}
