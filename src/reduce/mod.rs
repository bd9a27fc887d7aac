//! Bottom-up reduction of a parse tree into the model.
//!
//! [`Reducer`] walks a [`ParseTree`] in post-order. Every node is reduced
//! from its already-reduced children by the fold function registered for its
//! rule; "no value" results (whitespace, keywords, punctuation) are dropped
//! before the parent sees them. Each reduction owns its own context, so
//! separate inputs never share state.
//!
//! ```text
//! leaf text ──▶ elements ──▶ facts ──▶ attribute ──▶ class ──┐
//!                              navigation ──┘                ├──▶ subsystem
//!               sides/shapes ──▶ relationship ───────────────┤
//!               data items ──▶ metadata ─────────────────────┘
//! ```

mod attribute;
mod class;
mod elements;
mod facts;
mod metadata;
mod navigation;
mod relationship;
mod subsystem;

pub use attribute::{AttributeBlock, assemble_attribute};
pub use class::ClassHeader;
pub use facts::{Fact, FactKey};
pub use relationship::RelShape;
pub use subsystem::SubsystemHeader;

use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::config::CompileOptions;
use crate::diagnostics::Warning;
use crate::error::{CompileError, StructuralError};
use crate::model::{
    AssocClass, Attribute, Class, MetadataValue, Multiplicity, Relationship, Side, Subsystem,
};
use crate::tree::{ParseTree, Rule, RulePath};

/// The value a rule reduces to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduced {
    /// Sentinel for rules that carry nothing
    None,
    Text(String),
    Mult(Multiplicity),
    /// Presence-only marker (union, constrained)
    Marker,
    Facts(Vec<Fact>),
    Attribute(Attribute),
    AttributeBlock(AttributeBlock),
    Methods(Vec<String>),
    ClassHeader(ClassHeader),
    Class(Class),
    Classes(Vec<Class>),
    Side(Side),
    AssocClass(AssocClass),
    Shape(RelShape),
    Relationship(Relationship),
    Relationships(Vec<Relationship>),
    MetadataValue(MetadataValue),
    MetadataItem(String, MetadataValue),
    Metadata(IndexMap<String, MetadataValue>),
    SubsystemHeader(SubsystemHeader),
    Subsystem(Subsystem),
}

impl Reduced {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Short name of the variant, for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::None => "empty",
            Self::Text(_) => "text",
            Self::Mult(_) => "multiplicity",
            Self::Marker => "marker",
            Self::Facts(_) => "facts",
            Self::Attribute(_) => "attribute",
            Self::AttributeBlock(_) => "attribute block",
            Self::Methods(_) => "method block",
            Self::ClassHeader(_) => "class header",
            Self::Class(_) => "class",
            Self::Classes(_) => "class set",
            Self::Side(_) => "side",
            Self::AssocClass(_) => "association class",
            Self::Shape(_) => "relationship shape",
            Self::Relationship(_) => "relationship",
            Self::Relationships(_) => "relationship section",
            Self::MetadataValue(_) => "metadata value",
            Self::MetadataItem(..) => "metadata item",
            Self::Metadata(_) => "metadata",
            Self::SubsystemHeader(_) => "subsystem header",
            Self::Subsystem(_) => "subsystem",
        }
    }

    /// Unwrap text, reporting anything else as an unexpected child of `owner`
    pub fn into_text(self, owner: Rule) -> Result<String, StructuralError> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(unexpected(owner, &other)),
        }
    }
}

pub(crate) fn unexpected(owner: Rule, found: &Reduced) -> StructuralError {
    StructuralError::UnexpectedChild {
        rule: owner,
        found: found.kind_name(),
    }
}

/// Reduced children of one node, in source order.
///
/// Supports positional iteration and lookup by the rule that produced a
/// child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Children {
    items: Vec<(Rule, Reduced)>,
}

impl Children {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule, value: Reduced) {
        self.items.push((rule, value));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Rule, Reduced)> {
        self.items.iter()
    }

    /// First child produced by `rule`
    pub fn first(&self, rule: Rule) -> Option<&Reduced> {
        self.items.iter().find(|(r, _)| *r == rule).map(|(_, v)| v)
    }

    /// Every child produced by `rule`
    pub fn all(&self, rule: Rule) -> impl Iterator<Item = &Reduced> {
        self.items
            .iter()
            .filter(move |(r, _)| *r == rule)
            .map(|(_, v)| v)
    }

    pub fn has(&self, rule: Rule) -> bool {
        self.items.iter().any(|(r, _)| *r == rule)
    }

    /// Remove and return the first child produced by `rule`
    pub fn take(&mut self, rule: Rule) -> Option<Reduced> {
        let index = self.items.iter().position(|(r, _)| *r == rule)?;
        Some(self.items.remove(index).1)
    }

    /// Remove and return every child produced by `rule`, in order
    pub fn take_all(&mut self, rule: Rule) -> Vec<Reduced> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|(r, _)| *r == rule);
        self.items = kept;
        taken.into_iter().map(|(_, v)| v).collect()
    }

    /// Text of the first `rule` child, which must be present
    pub fn required_text(&mut self, owner: Rule, rule: Rule) -> Result<String, StructuralError> {
        self.take(rule)
            .ok_or(StructuralError::MissingChild {
                rule: owner,
                expected: rule,
            })?
            .into_text(owner)
    }

    /// Text of the first `rule` child, if any
    pub fn optional_text(
        &mut self,
        owner: Rule,
        rule: Rule,
    ) -> Result<Option<String>, StructuralError> {
        self.take(rule).map(|v| v.into_text(owner)).transpose()
    }
}

impl IntoIterator for Children {
    type Item = (Rule, Reduced);
    type IntoIter = std::vec::IntoIter<(Rule, Reduced)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Lint state carried through one reduction
#[derive(Debug)]
pub(crate) struct Lints<'a> {
    pub(crate) options: &'a CompileOptions,
    warnings: Vec<Warning>,
}

impl<'a> Lints<'a> {
    fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn warn(&mut self, warning: Warning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }
}

/// Post-order reduction of one parse tree
#[derive(Debug)]
pub struct Reducer<'a> {
    lints: Lints<'a>,
    path: Vec<Rule>,
}

impl<'a> Reducer<'a> {
    pub fn new(options: &'a CompileOptions) -> Self {
        Self {
            lints: Lints::new(options),
            path: Vec::new(),
        }
    }

    /// Reduce `node` and everything below it.
    ///
    /// The first structural error aborts the walk and carries the rule path
    /// of the node that raised it.
    pub fn reduce<T: ParseTree>(&mut self, node: &T) -> Result<Reduced, CompileError> {
        let rule = node.rule();
        if rule.is_silent() {
            return Ok(Reduced::None);
        }

        self.path.push(rule);
        let mut children = Children::new();
        for child in node.children() {
            let value = self.reduce(&child)?;
            if !value.is_none() {
                children.push(child.rule(), value);
            }
        }

        let child_count = children.len();
        let reduced = self
            .apply(rule, node, children)
            .map_err(|error| CompileError::Structural {
                path: RulePath(self.path.clone()),
                error,
            })?;
        trace!("reduced {} from {} children to {}", rule, child_count, reduced.kind_name());
        self.path.pop();
        Ok(reduced)
    }

    pub fn finish(self) -> Vec<Warning> {
        self.lints.warnings
    }

    fn apply<T: ParseTree>(
        &mut self,
        rule: Rule,
        node: &T,
        mut children: Children,
    ) -> Result<Reduced, StructuralError> {
        use Rule as R;

        let reduced = match rule {
            R::Nl | R::Sp | R::Comment | R::Keyword | R::Punct => Reduced::None,

            // Leaves
            R::Word
            | R::Delimiter
            | R::Text
            | R::Acword
            | R::Mult
            | R::Rnum
            | R::Id
            | R::ConstrainedMark
            | R::UnionMark
            | R::IgnoreMark => elements::leaf(rule, node.text())?,

            // Names and free text
            R::ClassName
            | R::Phrase
            | R::AttrRefName
            | R::ItemName
            | R::SubsystemName
            | R::DomainName
            | R::BodyLine => Reduced::Text(elements::join(rule, children)?),
            R::AttrName => Reduced::Facts(vec![Fact::Name(elements::join(rule, children)?)]),
            R::TypeName => Reduced::Facts(vec![Fact::Type(elements::join(rule, children)?)]),

            // Single-child wrappers
            R::Keyletter | R::Import | R::Abbreviation => {
                Reduced::Text(children.required_text(rule, R::Acword)?)
            }
            R::Rname => Reduced::Text(children.required_text(rule, R::Rnum)?),
            R::Superclass | R::Subclass => {
                Reduced::Text(children.required_text(rule, R::ClassName)?)
            }

            // Attributes
            R::IdTag => Reduced::Facts(elements::id_tag(children)?),
            R::RelRnum => Reduced::Facts(navigation::relrnum(children)?),
            R::Navigation => Reduced::Facts(navigation::navigation(children)?),
            R::Attr => Reduced::Attribute(attribute::attr(children)?),
            R::AttrBlock => Reduced::AttributeBlock(attribute::attr_block(children)?),

            // Classes
            R::MethodBlock => Reduced::Methods(class::method_block(children)?),
            R::ClassHeader => Reduced::ClassHeader(class::class_header(children)?),
            R::ClassBlock => Reduced::Class(class::class_block(&mut self.lints, children)?),
            R::ClassSet => Reduced::Classes(class::class_set(children)?),

            // Relationships
            R::TSide | R::PSide => Reduced::Side(relationship::side(rule, children)?),
            R::AssocClass => Reduced::AssocClass(relationship::assoc_class(children)?),
            R::BinaryRel => Reduced::Shape(relationship::binary_rel(children)?),
            R::GenRel => Reduced::Shape(relationship::gen_rel(children)?),
            R::Rel => Reduced::Relationship(relationship::rel(children)?),
            R::RelSection => Reduced::Relationships(relationship::rel_section(children)?),

            // Metadata
            R::TextItem => {
                Reduced::MetadataValue(MetadataValue::Text(elements::join(rule, children)?))
            }
            R::ResourceItem => {
                Reduced::MetadataValue(MetadataValue::Resource(elements::join(rule, children)?))
            }
            R::DataItem => {
                let (key, value) = metadata::data_item(children)?;
                Reduced::MetadataItem(key, value)
            }
            R::Metadata => Reduced::Metadata(metadata::metadata(&mut self.lints, children)?),

            // Root
            R::SubsystemHeader => {
                Reduced::SubsystemHeader(subsystem::subsystem_header(children)?)
            }
            R::Subsystem => Reduced::Subsystem(subsystem::subsystem(children)?),

            R::Error => return Err(StructuralError::ErrorNode { text: node.text() }),
        };
        Ok(reduced)
    }
}
