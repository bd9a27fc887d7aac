//! Grammar rule identities.

use std::fmt;

use crate::parser::SyntaxKind;

/// Identity of a grammar rule, for both leaves and composite nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // Leaves that carry no value
    Nl,
    Sp,
    Comment,
    Keyword,
    Punct,

    // Leaves that carry text
    Word,
    Delimiter,
    Text,
    Acword,
    Mult,
    Rnum,
    Id,
    ConstrainedMark,
    UnionMark,
    IgnoreMark,

    // Composite rules
    Subsystem,
    Metadata,
    DataItem,
    ItemName,
    TextItem,
    ResourceItem,
    SubsystemHeader,
    SubsystemName,
    Abbreviation,
    DomainName,
    ClassSet,
    ClassBlock,
    ClassHeader,
    ClassName,
    Keyletter,
    Import,
    AttrBlock,
    Attr,
    AttrName,
    TypeName,
    IdTag,
    RelRnum,
    Navigation,
    AttrRefName,
    MethodBlock,
    BodyLine,
    RelSection,
    Rel,
    Rname,
    BinaryRel,
    TSide,
    PSide,
    Phrase,
    AssocClass,
    GenRel,
    Superclass,
    Subclass,

    /// Input the front end could not parse
    Error,
}

impl Rule {
    /// Rules whose reduction is the "no value" sentinel
    pub fn is_silent(self) -> bool {
        matches!(
            self,
            Self::Nl | Self::Sp | Self::Comment | Self::Keyword | Self::Punct
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nl => "nl",
            Self::Sp => "sp",
            Self::Comment => "comment",
            Self::Keyword => "keyword",
            Self::Punct => "punct",
            Self::Word => "word",
            Self::Delimiter => "delimiter",
            Self::Text => "text",
            Self::Acword => "acword",
            Self::Mult => "mult",
            Self::Rnum => "rnum",
            Self::Id => "id",
            Self::ConstrainedMark => "constrained",
            Self::UnionMark => "union",
            Self::IgnoreMark => "ignore",
            Self::Subsystem => "subsystem",
            Self::Metadata => "metadata",
            Self::DataItem => "data_item",
            Self::ItemName => "item_name",
            Self::TextItem => "text_item",
            Self::ResourceItem => "resource_item",
            Self::SubsystemHeader => "subsystem_header",
            Self::SubsystemName => "subsystem_name",
            Self::Abbreviation => "abbreviation",
            Self::DomainName => "domain_name",
            Self::ClassSet => "class_set",
            Self::ClassBlock => "class_block",
            Self::ClassHeader => "class_header",
            Self::ClassName => "class_name",
            Self::Keyletter => "keyletter",
            Self::Import => "import",
            Self::AttrBlock => "attr_block",
            Self::Attr => "attr",
            Self::AttrName => "attr_name",
            Self::TypeName => "type_name",
            Self::IdTag => "id_tag",
            Self::RelRnum => "relrnum",
            Self::Navigation => "navigation",
            Self::AttrRefName => "attr_ref_name",
            Self::MethodBlock => "method_block",
            Self::BodyLine => "body_line",
            Self::RelSection => "rel_section",
            Self::Rel => "rel",
            Self::Rname => "rname",
            Self::BinaryRel => "binary_rel",
            Self::TSide => "t_side",
            Self::PSide => "p_side",
            Self::Phrase => "phrase",
            Self::AssocClass => "assoc_class",
            Self::GenRel => "gen_rel",
            Self::Superclass => "superclass",
            Self::Subclass => "subclass",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SyntaxKind> for Rule {
    fn from(kind: SyntaxKind) -> Self {
        use SyntaxKind as K;
        match kind {
            K::NEWLINE => Self::Nl,
            K::WHITESPACE => Self::Sp,
            K::LINE_COMMENT => Self::Comment,
            k if k.is_keyword() => Self::Keyword,
            k if k.is_punct() => Self::Punct,
            K::WORD | K::NUMBER => Self::Word,
            K::DELIMITER => Self::Delimiter,
            K::TEXT => Self::Text,
            K::ACWORD => Self::Acword,
            K::MULT => Self::Mult,
            K::RNUM => Self::Rnum,
            K::ID => Self::Id,
            K::CONSTRAINED_MARK => Self::ConstrainedMark,
            K::UNION_MARK => Self::UnionMark,
            K::IGNORE_MARK => Self::IgnoreMark,
            K::SUBSYSTEM => Self::Subsystem,
            K::METADATA => Self::Metadata,
            K::DATA_ITEM => Self::DataItem,
            K::ITEM_NAME => Self::ItemName,
            K::TEXT_ITEM => Self::TextItem,
            K::RESOURCE_ITEM => Self::ResourceItem,
            K::SUBSYSTEM_HEADER => Self::SubsystemHeader,
            K::SUBSYSTEM_NAME => Self::SubsystemName,
            K::ABBREVIATION => Self::Abbreviation,
            K::DOMAIN_NAME => Self::DomainName,
            K::CLASS_SET => Self::ClassSet,
            K::CLASS_BLOCK => Self::ClassBlock,
            K::CLASS_HEADER => Self::ClassHeader,
            K::CLASS_NAME => Self::ClassName,
            K::KEYLETTER => Self::Keyletter,
            K::IMPORT => Self::Import,
            K::ATTR_BLOCK => Self::AttrBlock,
            K::ATTR => Self::Attr,
            K::ATTR_NAME => Self::AttrName,
            K::TYPE_NAME => Self::TypeName,
            K::ID_TAG => Self::IdTag,
            K::REL_RNUM => Self::RelRnum,
            K::NAVIGATION => Self::Navigation,
            K::ATTR_REF_NAME => Self::AttrRefName,
            K::METHOD_BLOCK => Self::MethodBlock,
            K::BODY_LINE => Self::BodyLine,
            K::REL_SECTION => Self::RelSection,
            K::REL => Self::Rel,
            K::RNAME => Self::Rname,
            K::BINARY_REL => Self::BinaryRel,
            K::T_SIDE => Self::TSide,
            K::P_SIDE => Self::PSide,
            K::PHRASE => Self::Phrase,
            K::ASSOC_CLASS => Self::AssocClass,
            K::GEN_REL => Self::GenRel,
            K::SUPERCLASS => Self::Superclass,
            K::SUBCLASS => Self::Subclass,
            _ => Self::Error,
        }
    }
}

/// Path of rules from the root to a node, used to locate structural errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulePath(pub Vec<Rule>);

impl RulePath {
    pub fn rules(&self) -> &[Rule] {
        &self.0
    }

    /// The innermost rule on the path
    pub fn last(&self) -> Option<Rule> {
        self.0.last().copied()
    }
}

impl fmt::Display for RulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(rule.as_str())?;
        }
        Ok(())
    }
}
