//! Relationship normalization.

use super::{Children, Reduced, unexpected};
use crate::error::StructuralError;
use crate::model::{AssocClass, Multiplicity, Relationship, Side};
use crate::tree::Rule;

/// A relationship before its number is attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelShape {
    Binary {
        t_side: Side,
        p_side: Side,
        association_class: Option<AssocClass>,
    },
    Generalization {
        superclass: String,
        subclasses: Vec<String>,
    },
}

impl RelShape {
    pub fn numbered(self, rnum: String) -> Relationship {
        match self {
            Self::Binary {
                t_side,
                p_side,
                association_class,
            } => Relationship::Binary {
                rnum,
                t_side,
                p_side,
                association_class,
            },
            Self::Generalization {
                superclass,
                subclasses,
            } => Relationship::Generalization {
                rnum,
                superclass,
                subclasses,
            },
        }
    }
}

fn required_mult(owner: Rule, children: &mut Children) -> Result<Multiplicity, StructuralError> {
    match children.take(Rule::Mult) {
        Some(Reduced::Mult(mult)) => Ok(mult),
        Some(other) => Err(unexpected(owner, &other)),
        None => Err(StructuralError::MissingChild {
            rule: owner,
            expected: Rule::Mult,
        }),
    }
}

/// One side of a binary association; `owner` is `TSide` or `PSide`
pub(super) fn side(owner: Rule, mut children: Children) -> Result<Side, StructuralError> {
    let phrase = children.required_text(owner, Rule::Phrase)?;
    let multiplicity = required_mult(owner, &mut children)?;
    let class_name = children.required_text(owner, Rule::ClassName)?;
    Ok(Side {
        phrase,
        multiplicity,
        class_name,
    })
}

pub(super) fn assoc_class(mut children: Children) -> Result<AssocClass, StructuralError> {
    let owner = Rule::AssocClass;
    let multiplicity = required_mult(owner, &mut children)?;
    let class_name = children.required_text(owner, Rule::ClassName)?;
    Ok(AssocClass {
        class_name,
        multiplicity,
    })
}

fn required_side(owner: Rule, rule: Rule, children: &mut Children) -> Result<Side, StructuralError> {
    match children.take(rule) {
        Some(Reduced::Side(side)) => Ok(side),
        Some(other) => Err(unexpected(owner, &other)),
        None => Err(StructuralError::MissingChild {
            rule: owner,
            expected: rule,
        }),
    }
}

/// Sides are assigned by the rule that produced them, not by their order
pub(super) fn binary_rel(mut children: Children) -> Result<RelShape, StructuralError> {
    let owner = Rule::BinaryRel;
    let t_side = required_side(owner, Rule::TSide, &mut children)?;
    let p_side = required_side(owner, Rule::PSide, &mut children)?;
    let association_class = match children.take(Rule::AssocClass) {
        Some(Reduced::AssocClass(assoc)) => Some(assoc),
        Some(other) => return Err(unexpected(owner, &other)),
        None => None,
    };
    Ok(RelShape::Binary {
        t_side,
        p_side,
        association_class,
    })
}

pub(super) fn gen_rel(mut children: Children) -> Result<RelShape, StructuralError> {
    let owner = Rule::GenRel;
    let superclass = children.required_text(owner, Rule::Superclass)?;
    let subclasses = children
        .take_all(Rule::Subclass)
        .into_iter()
        .map(|value| value.into_text(owner))
        .collect::<Result<Vec<_>, _>>()?;
    if subclasses.is_empty() {
        return Err(StructuralError::EmptySubclassList { superclass });
    }
    Ok(RelShape::Generalization {
        superclass,
        subclasses,
    })
}

/// Attach the relationship number to whichever shape was reduced
pub(super) fn rel(mut children: Children) -> Result<Relationship, StructuralError> {
    let owner = Rule::Rel;
    let rnum = children.required_text(owner, Rule::Rname)?;
    let shape = children
        .take(Rule::BinaryRel)
        .or_else(|| children.take(Rule::GenRel));
    match shape {
        Some(Reduced::Shape(shape)) => Ok(shape.numbered(rnum)),
        Some(other) => Err(unexpected(owner, &other)),
        None => Err(StructuralError::MissingChild {
            rule: owner,
            expected: Rule::BinaryRel,
        }),
    }
}

pub(super) fn rel_section(children: Children) -> Result<Vec<Relationship>, StructuralError> {
    children
        .into_iter()
        .map(|(_, value)| match value {
            Reduced::Relationship(rel) => Ok(rel),
            other => Err(unexpected(Rule::RelSection, &other)),
        })
        .collect()
}
