//! Recursive descent parser for the model notation
//!
//! Builds a rowan GreenNode tree from tokens. The notation is line oriented:
//! every grammar function consumes whole lines, and error recovery skips to
//! the end of the offending line so one bad line costs one diagnostic.

use std::fmt;

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use crate::base::{LineIndex, Span};
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    pub span: Span,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span.start, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Parse model text into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_subsystem();
    parser.finish(&LineIndex::new(input))
}

/// `I`, `I2`, `Ic`, `I2c` → (identifier, constrained)
fn split_id_tag(text: &str) -> Option<(&str, bool)> {
    let (body, constrained) = match text.strip_suffix('c') {
        Some(body) => (body, true),
        None => (text, false),
    };
    let digits = body.strip_prefix('I')?;
    digits
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then_some((body, constrained))
}

/// `R4`, `UR4`, `R4c`, `UR4c` → (union, rnum, constrained)
fn split_rel_tag(text: &str) -> Option<(bool, &str, bool)> {
    let (rest, union) = match text.strip_prefix('U') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    let (rnum, constrained) = match rest.strip_suffix('c') {
        Some(rnum) => (rnum, true),
        None => (rest, false),
    };
    is_rnum(rnum).then_some((union, rnum, constrained))
}

fn is_rnum(text: &str) -> bool {
    text.strip_prefix('R')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn is_acword(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<(String, TextRange)>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self, line_index: &LineIndex) -> Parse {
        let errors = self
            .errors
            .into_iter()
            .map(|(message, range)| SyntaxError {
                span: line_index.span(range),
                message,
                range,
            })
            .collect();
        Parse {
            green: self.builder.finish(),
            errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_text(&self) -> &'a str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn at_eol(&self) -> bool {
        self.at_eof() || self.at(SyntaxKind::NEWLINE)
    }

    fn at_word(&self, word: &str) -> bool {
        self.at(SyntaxKind::WORD) && self.current_text() == word
    }

    /// A section keyword alone on its line
    fn at_section(&self, word: &str) -> bool {
        self.at_word(word) && matches!(self.nth(1), None | Some(SyntaxKind::NEWLINE))
    }

    /// A `domain` or `subsystem` line, as opposed to a metadata key that
    /// merely starts with one of those words
    fn at_header_line(&self) -> bool {
        (self.at_word("domain") || self.at_word("subsystem"))
            && !self.line_contains(SyntaxKind::COLON)
            && !self.line_contains(SyntaxKind::GT)
    }

    /// Only consulted at a class boundary: before the first class or after `--`
    fn at_class_start(&self) -> bool {
        self.at_word("class") && matches!(self.nth(1), Some(SyntaxKind::WORD | SyntaxKind::NUMBER))
    }

    fn at_rnum_line(&self) -> bool {
        self.at(SyntaxKind::WORD)
            && is_rnum(self.current_text())
            && matches!(self.nth(1), None | Some(SyntaxKind::NEWLINE))
    }

    fn at_mult(&self) -> bool {
        (self.at(SyntaxKind::NUMBER) && self.current_text() == "1")
            || (self.at(SyntaxKind::WORD) && self.current_text() == "M")
    }

    fn at_name_start(&self) -> bool {
        self.at(SyntaxKind::WORD) || self.at(SyntaxKind::NUMBER)
    }

    fn at_assoc_class_line(&self) -> bool {
        self.at_mult()
            && matches!(self.nth(1), Some(SyntaxKind::WORD | SyntaxKind::NUMBER))
            && !self.line_contains(SyntaxKind::COMMA)
            && !self.line_contains(SyntaxKind::PLUS)
    }

    /// Kind of the token `n` places ahead, without skipping anything
    fn raw_kind(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    /// Kind of the `n`th non-trivia token from here; newlines count
    fn nth(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
    }

    /// Whether `kind` occurs before the end of the current line
    fn line_contains(&self, kind: SyntaxKind) -> bool {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .take_while(|t| t.kind != SyntaxKind::NEWLINE)
            .any(|t| t.kind == kind)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume the current token under a context-specific kind
    fn bump_as(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.current() {
            self.builder.token(kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume the current token as several tokens; the pieces must
    /// concatenate back to the original text
    fn split_token(&mut self, pieces: &[(SyntaxKind, &str)]) {
        debug_assert_eq!(
            pieces.iter().map(|(_, text)| *text).collect::<String>(),
            self.current_text()
        );
        for (kind, text) in pieces {
            self.builder.token((*kind).into(), text);
        }
        self.pos += 1;
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {what}"));
            false
        }
    }

    /// Skip spaces and comments on the current line
    fn skip_ws(&mut self) {
        while self.current().is_some_and(|t| t.kind.is_trivia()) {
            self.bump();
        }
    }

    /// Skip spaces, comments and empty lines
    fn skip_blank_lines(&mut self) {
        while self
            .current()
            .is_some_and(|t| t.kind.is_trivia() || t.kind == SyntaxKind::NEWLINE)
        {
            self.bump();
        }
    }

    /// Finish a line: nothing but trivia may remain before the newline
    fn end_line(&mut self) {
        self.skip_ws();
        if self.at_eol() {
            self.eat(SyntaxKind::NEWLINE);
            return;
        }
        self.error(format!("unexpected `{}` at end of line", self.current_text()));
        self.recover_line();
        self.eat(SyntaxKind::NEWLINE);
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = match self.current() {
            Some(t) => TextRange::at(t.offset, TextSize::of(t.text)),
            None => {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            }
        };
        self.errors.push((message.into(), range));
    }

    /// Wrap the rest of the line in an ERROR node
    fn recover_line(&mut self) {
        if self.at_eol() {
            return;
        }
        self.builder.start_node(SyntaxKind::ERROR.into());
        while !self.at_eol() {
            self.bump();
        }
        self.builder.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Name = Word (Delimiter Word)*
    ///
    /// Spacing between words is kept as DELIMITER tokens so the reducers can
    /// rebuild the name by plain concatenation.
    fn parse_name(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if !self.at_name_start() {
            self.error(format!("expected {what}"));
            return false;
        }
        self.start_node(kind);
        self.bump();
        loop {
            if self.at_name_start() {
                self.bump();
            } else if self.at(SyntaxKind::WHITESPACE)
                && matches!(self.raw_kind(1), Some(SyntaxKind::WORD | SyntaxKind::NUMBER))
            {
                self.bump_as(SyntaxKind::DELIMITER);
            } else {
                break;
            }
        }
        self.finish_node();
        true
    }

    fn bump_acword(&mut self, what: &str) -> bool {
        if self.at(SyntaxKind::WORD) && is_acword(self.current_text()) {
            self.bump_as(SyntaxKind::ACWORD);
            true
        } else {
            self.error(format!("expected {what} in capitals"));
            if self.at(SyntaxKind::WORD) {
                self.builder.start_node(SyntaxKind::ERROR.into());
                self.bump();
                self.builder.finish_node();
            }
            false
        }
    }

    fn parse_acword(&mut self, kind: SyntaxKind, what: &str) {
        self.start_node(kind);
        self.bump_acword(what);
        self.finish_node();
    }

    /// Consume the rest of the line as free text
    fn bump_text_run(&mut self) {
        while !self.at_eol() {
            if self.at(SyntaxKind::WHITESPACE) {
                if matches!(self.raw_kind(1), None | Some(SyntaxKind::NEWLINE)) {
                    self.bump();
                } else {
                    self.bump_as(SyntaxKind::DELIMITER);
                }
            } else {
                self.bump_as(SyntaxKind::TEXT);
            }
        }
    }

    fn parse_mult(&mut self) {
        if self.at_mult() {
            self.bump_as(SyntaxKind::MULT);
        } else {
            self.error("expected multiplicity `1` or `M`");
        }
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// Subsystem = Metadata? SubsystemHeader ClassSet? RelSection?
    fn parse_subsystem(&mut self) {
        self.start_node(SyntaxKind::SUBSYSTEM);
        self.skip_blank_lines();

        if self.at_section("metadata") {
            self.parse_metadata();
            self.skip_blank_lines();
        }

        self.parse_subsystem_header();
        self.skip_blank_lines();

        if self.at_class_start() {
            self.parse_class_set();
            self.skip_blank_lines();
        }

        if self.at_section("relationships") {
            self.parse_rel_section();
            self.skip_blank_lines();
        }

        while !self.at_eof() {
            self.error(format!("unexpected `{}`", self.current_text()));
            self.recover_line();
            self.eat(SyntaxKind::NEWLINE);
            self.skip_blank_lines();
        }

        self.finish_node();
    }

    /// Metadata = 'metadata' NL DataItem*
    fn parse_metadata(&mut self) {
        self.start_node(SyntaxKind::METADATA);
        self.bump_as(SyntaxKind::METADATA_KW);
        self.end_line();

        loop {
            self.skip_blank_lines();
            if self.at_eof() || self.at_header_line() {
                break;
            }
            self.parse_data_item();
        }

        self.finish_node();
    }

    /// DataItem = ItemName (':' TextItem | '>' ResourceItem) NL
    fn parse_data_item(&mut self) {
        self.start_node(SyntaxKind::DATA_ITEM);

        if self.parse_name(SyntaxKind::ITEM_NAME, "metadata key") {
            self.skip_ws();
            let value_kind = match self.current_kind() {
                SyntaxKind::COLON if !self.at_eof() => Some(SyntaxKind::TEXT_ITEM),
                SyntaxKind::GT if !self.at_eof() => Some(SyntaxKind::RESOURCE_ITEM),
                _ => None,
            };
            match value_kind {
                Some(kind) => {
                    self.bump();
                    self.skip_ws();
                    self.start_node(kind);
                    self.bump_text_run();
                    self.finish_node();
                }
                None => {
                    self.error("expected `:` or `>` after metadata key");
                    self.recover_line();
                }
            }
        }
        self.end_line();

        self.finish_node();
    }

    /// SubsystemHeader = 'domain' Name NL 'subsystem' Name (',' ACWORD)? NL
    fn parse_subsystem_header(&mut self) {
        self.start_node(SyntaxKind::SUBSYSTEM_HEADER);

        if self.at_word("domain") {
            self.bump_as(SyntaxKind::DOMAIN_KW);
            self.skip_ws();
            self.parse_name(SyntaxKind::DOMAIN_NAME, "domain name");
            self.end_line();
        } else {
            self.error("expected `domain` line");
        }

        self.skip_blank_lines();

        if self.at_word("subsystem") {
            self.bump_as(SyntaxKind::SUBSYSTEM_KW);
            self.skip_ws();
            self.parse_name(SyntaxKind::SUBSYSTEM_NAME, "subsystem name");
            self.skip_ws();
            if self.eat(SyntaxKind::COMMA) {
                self.skip_ws();
                self.parse_acword(SyntaxKind::ABBREVIATION, "subsystem abbreviation");
            }
            self.end_line();
        } else {
            self.error("expected `subsystem` line");
        }

        self.finish_node();
    }

    /// ClassSet = ClassBlock+
    fn parse_class_set(&mut self) {
        self.start_node(SyntaxKind::CLASS_SET);
        while self.at_class_start() {
            self.parse_class_block();
            self.skip_blank_lines();
        }
        self.finish_node();
    }

    /// ClassBlock = ClassHeader AttrBlock MethodBlock? '--' NL
    fn parse_class_block(&mut self) {
        self.start_node(SyntaxKind::CLASS_BLOCK);

        self.parse_class_header();
        self.skip_blank_lines();

        if self.at_section("attributes") {
            self.parse_attr_block();
            self.skip_blank_lines();
        } else {
            self.error("expected `attributes` section");
        }

        if self.at_section("methods") {
            self.parse_method_block();
            self.skip_blank_lines();
        }

        if self.eat(SyntaxKind::SEPARATOR) {
            self.end_line();
        } else {
            self.error("expected `--` to close the class");
        }

        self.finish_node();
    }

    /// ClassHeader = 'class' Name (',' Keyletter)? ('{' 'import' ':' ACWORD '}')? NL
    fn parse_class_header(&mut self) {
        self.start_node(SyntaxKind::CLASS_HEADER);

        self.bump_as(SyntaxKind::CLASS_KW);
        self.skip_ws();
        self.parse_name(SyntaxKind::CLASS_NAME, "class name");
        self.skip_ws();

        if self.eat(SyntaxKind::COMMA) {
            self.skip_ws();
            self.parse_acword(SyntaxKind::KEYLETTER, "keyletter");
            self.skip_ws();
        }

        if self.at(SyntaxKind::L_BRACE) {
            self.start_node(SyntaxKind::IMPORT);
            self.bump();
            self.skip_ws();
            if self.at_word("import") {
                self.bump_as(SyntaxKind::IMPORT_KW);
            } else {
                self.error("expected `import`");
            }
            self.skip_ws();
            self.expect(SyntaxKind::COLON, "`:` after `import`");
            self.skip_ws();
            self.bump_acword("imported subsystem abbreviation");
            self.skip_ws();
            self.expect(SyntaxKind::R_BRACE, "`}` to close the import");
            self.finish_node();
        }

        self.end_line();
        self.finish_node();
    }

    /// AttrBlock = 'attributes' NL Attr*
    fn parse_attr_block(&mut self) {
        self.start_node(SyntaxKind::ATTR_BLOCK);
        self.bump_as(SyntaxKind::ATTRIBUTES_KW);
        self.end_line();

        loop {
            self.skip_blank_lines();
            if self.at_eof()
                || self.at(SyntaxKind::SEPARATOR)
                || self.at_section("methods")
                || self.at_section("relationships")
            {
                break;
            }
            self.parse_attr();
        }

        self.finish_node();
    }

    /// Attr = '!'? AttrName (':' TypeName)? ('{' Tag (',' Tag)* '}')? NL
    fn parse_attr(&mut self) {
        self.start_node(SyntaxKind::ATTR);

        if self.at(SyntaxKind::BANG) {
            self.bump_as(SyntaxKind::IGNORE_MARK);
            self.skip_ws();
        }

        if !self.parse_name(SyntaxKind::ATTR_NAME, "attribute name") {
            self.recover_line();
            self.end_line();
            self.finish_node();
            return;
        }
        self.skip_ws();

        if self.eat(SyntaxKind::COLON) {
            self.skip_ws();
            self.parse_name(SyntaxKind::TYPE_NAME, "type name");
            self.skip_ws();
        }

        if self.eat(SyntaxKind::L_BRACE) {
            loop {
                self.skip_ws();
                self.parse_tag();
                self.skip_ws();
                if !self.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
            self.expect(SyntaxKind::R_BRACE, "`}` to close the tag list");
        }

        self.end_line();
        self.finish_node();
    }

    /// Tag = IdTag | RelRnum | Navigation
    fn parse_tag(&mut self) {
        if !self.at(SyntaxKind::WORD) {
            self.error("expected identifier or relationship tag");
            return;
        }
        let text = self.current_text();

        if let Some((id, constrained)) = split_id_tag(text) {
            self.start_node(SyntaxKind::ID_TAG);
            let mut pieces = vec![(SyntaxKind::ID, id)];
            if constrained {
                pieces.push((SyntaxKind::CONSTRAINED_MARK, "c"));
            }
            self.split_token(&pieces);
            self.finish_node();
        } else if let Some((union, rnum, constrained)) = split_rel_tag(text) {
            let has_target = matches!(
                self.nth(1),
                Some(SyntaxKind::SLASH | SyntaxKind::GT | SyntaxKind::DOT)
            );
            if !has_target && constrained {
                self.error("constrained marker needs a navigation target");
            }

            self.start_node(if has_target {
                SyntaxKind::NAVIGATION
            } else {
                SyntaxKind::REL_RNUM
            });
            let mut pieces = Vec::with_capacity(3);
            if union {
                pieces.push((SyntaxKind::UNION_MARK, "U"));
            }
            pieces.push((SyntaxKind::RNUM, rnum));
            if constrained {
                pieces.push((SyntaxKind::CONSTRAINED_MARK, "c"));
            }
            self.split_token(&pieces);
            if has_target {
                self.skip_ws();
                self.parse_nav_target();
            }
            self.finish_node();
        } else {
            self.error(format!("expected identifier or relationship tag, found `{text}`"));
            self.start_node(SyntaxKind::ERROR);
            self.bump();
            self.finish_node();
        }
    }

    /// NavTarget = '/' Phrase | '>' ClassName | '.' AttrRefName
    fn parse_nav_target(&mut self) {
        let (kind, what) = match self.current_kind() {
            SyntaxKind::SLASH => (SyntaxKind::PHRASE, "relationship phrase"),
            SyntaxKind::GT => (SyntaxKind::CLASS_NAME, "class name"),
            SyntaxKind::DOT => (SyntaxKind::ATTR_REF_NAME, "referenced attribute name"),
            _ => return,
        };
        self.bump();
        self.skip_ws();
        self.parse_name(kind, what);
    }

    /// MethodBlock = 'methods' NL BodyLine*
    fn parse_method_block(&mut self) {
        self.start_node(SyntaxKind::METHOD_BLOCK);
        self.bump_as(SyntaxKind::METHODS_KW);
        self.end_line();

        loop {
            self.skip_blank_lines();
            if self.at_eof() || self.at(SyntaxKind::SEPARATOR) {
                break;
            }
            self.start_node(SyntaxKind::BODY_LINE);
            self.bump_text_run();
            self.finish_node();
            self.end_line();
        }

        self.finish_node();
    }

    /// RelSection = 'relationships' NL Rel* ('--' NL)?
    fn parse_rel_section(&mut self) {
        self.start_node(SyntaxKind::REL_SECTION);
        self.bump_as(SyntaxKind::RELATIONSHIPS_KW);
        self.end_line();

        loop {
            self.skip_blank_lines();
            if self.at_eof() {
                break;
            }
            if self.eat(SyntaxKind::SEPARATOR) {
                self.end_line();
                break;
            }
            if self.at_rnum_line() {
                self.parse_rel();
            } else {
                self.error("expected relationship number such as `R1`");
                self.recover_line();
                self.end_line();
            }
        }

        self.finish_node();
    }

    /// Rel = Rname NL (GenRel | BinaryRel)
    fn parse_rel(&mut self) {
        self.start_node(SyntaxKind::REL);

        self.start_node(SyntaxKind::RNAME);
        self.bump_as(SyntaxKind::RNUM);
        self.finish_node();
        self.end_line();
        self.skip_blank_lines();

        if self.line_contains(SyntaxKind::PLUS) {
            self.parse_gen_rel();
        } else {
            self.parse_binary_rel();
        }

        self.finish_node();
    }

    /// BinaryRel = TSide PSide AssocClass?
    fn parse_binary_rel(&mut self) {
        self.start_node(SyntaxKind::BINARY_REL);

        self.parse_side(SyntaxKind::T_SIDE);
        self.skip_blank_lines();
        self.parse_side(SyntaxKind::P_SIDE);
        self.skip_blank_lines();

        if self.at_assoc_class_line() {
            self.parse_assoc_class();
        }

        self.finish_node();
    }

    /// Side = Phrase ',' Mult ClassName NL
    fn parse_side(&mut self, kind: SyntaxKind) {
        self.start_node(kind);

        self.parse_name(SyntaxKind::PHRASE, "relationship phrase");
        self.skip_ws();
        self.expect(SyntaxKind::COMMA, "`,` after the phrase");
        self.skip_ws();
        self.parse_mult();
        self.skip_ws();
        self.parse_name(SyntaxKind::CLASS_NAME, "class name");
        self.end_line();

        self.finish_node();
    }

    /// AssocClass = Mult ClassName NL
    fn parse_assoc_class(&mut self) {
        self.start_node(SyntaxKind::ASSOC_CLASS);

        self.parse_mult();
        self.skip_ws();
        self.parse_name(SyntaxKind::CLASS_NAME, "association class name");
        self.end_line();

        self.finish_node();
    }

    /// GenRel = Superclass '+' NL Subclass*
    fn parse_gen_rel(&mut self) {
        self.start_node(SyntaxKind::GEN_REL);

        self.start_node(SyntaxKind::SUPERCLASS);
        self.parse_name(SyntaxKind::CLASS_NAME, "superclass name");
        self.finish_node();
        self.skip_ws();
        self.expect(SyntaxKind::PLUS, "`+` after the superclass");
        self.end_line();

        loop {
            self.skip_blank_lines();
            if self.at_eof() || self.at(SyntaxKind::SEPARATOR) || self.at_rnum_line() {
                break;
            }
            self.start_node(SyntaxKind::SUBCLASS);
            let named = self.parse_name(SyntaxKind::CLASS_NAME, "subclass name");
            self.finish_node();
            if !named {
                self.recover_line();
            }
            self.end_line();
        }

        self.finish_node();
    }
}
