//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all token and node kinds of the model notation. Node
//! kinds correspond one-to-one with grammar rules; the reducers see them
//! through [`crate::tree::Rule`].

/// All syntax kinds (tokens and nodes) of the model notation
///
/// Tokens are leaves (words, punctuation, markers).
/// Nodes are composite (sections, classes, relationships).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    NEWLINE,
    LINE_COMMENT,

    // =========================================================================
    // LEXER TOKENS
    // =========================================================================
    WORD,      // Bank, is, R12
    NUMBER,    // 1, 2021
    COLON,     // :
    COMMA,     // ,
    GT,        // >
    L_BRACE,   // {
    R_BRACE,   // }
    BANG,      // !
    PLUS,      // +
    SLASH,     // /
    DOT,       // .
    SEPARATOR, // --
    TEXT,      // any other character, or a token inside free text

    // =========================================================================
    // PARSER-ASSIGNED TOKENS (a lexer token re-kinded, or split, by context)
    // =========================================================================
    DELIMITER,        // spacing inside a multi-word name
    ACWORD,           // all-caps word (keyletter, abbreviation)
    MULT,             // 1 | M
    RNUM,             // R12
    ID,               // I, I2
    CONSTRAINED_MARK, // trailing c on an identifier or navigation
    UNION_MARK,       // leading U on a navigation
    IGNORE_MARK,      // leading ! on an attribute

    // Keywords (ordinary words recognized by position)
    METADATA_KW,
    DOMAIN_KW,
    SUBSYSTEM_KW,
    CLASS_KW,
    ATTRIBUTES_KW,
    METHODS_KW,
    RELATIONSHIPS_KW,
    IMPORT_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SUBSYSTEM,

    // Metadata
    METADATA,
    DATA_ITEM,
    ITEM_NAME,
    TEXT_ITEM,
    RESOURCE_ITEM,

    // Header
    SUBSYSTEM_HEADER,
    SUBSYSTEM_NAME,
    ABBREVIATION,
    DOMAIN_NAME,

    // Classes
    CLASS_SET,
    CLASS_BLOCK,
    CLASS_HEADER,
    CLASS_NAME,
    KEYLETTER,
    IMPORT,

    // Attributes
    ATTR_BLOCK,
    ATTR,
    ATTR_NAME,
    TYPE_NAME,
    ID_TAG,
    REL_RNUM,
    NAVIGATION,
    ATTR_REF_NAME,

    // Methods
    METHOD_BLOCK,
    BODY_LINE,

    // Relationships
    REL_SECTION,
    REL,
    RNAME,
    BINARY_REL,
    T_SIDE,
    P_SIDE,
    PHRASE,
    ASSOC_CLASS,
    GEN_REL,
    SUPERCLASS,
    SUBCLASS,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment, not newlines)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT)
    }

    /// Check if this is a positional keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::METADATA_KW as u16) && (self as u16) <= (Self::IMPORT_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::COLON as u16) && (self as u16) <= (Self::SEPARATOR as u16)
    }

    /// Check if this is a node kind rather than a token kind
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::SUBSYSTEM as u16) && self != Self::__LAST
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelLanguage {}

impl rowan::Language for ModelLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ModelLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ModelLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ModelLanguage>;
