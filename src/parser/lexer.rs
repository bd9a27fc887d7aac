//! Logos-based lexer for the model notation
//!
//! The lexer is deliberately context-free: keywords, multiplicities and
//! relationship tags are all plain words here. The parser re-kinds them by
//! position.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"[\p{L}_][\p{L}\p{N}_'\-]*")]
    Word,

    #[regex(r"[0-9]+")]
    Number,

    #[token("--")]
    Separator,

    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(">")]
    Gt,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("/")]
    Slash,
    #[token(".")]
    Dot,

    /// Any single character no other rule claims
    #[regex(r"[^ \t\r\nA-Za-z0-9_:,>{}!+/.]", priority = 1)]
    Text,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => SyntaxKind::WHITESPACE,
            LogosToken::Newline => SyntaxKind::NEWLINE,
            LogosToken::LineComment => SyntaxKind::LINE_COMMENT,
            LogosToken::Word => SyntaxKind::WORD,
            LogosToken::Number => SyntaxKind::NUMBER,
            LogosToken::Separator => SyntaxKind::SEPARATOR,
            LogosToken::Colon => SyntaxKind::COLON,
            LogosToken::Comma => SyntaxKind::COMMA,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::LBrace => SyntaxKind::L_BRACE,
            LogosToken::RBrace => SyntaxKind::R_BRACE,
            LogosToken::Bang => SyntaxKind::BANG,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::Slash => SyntaxKind::SLASH,
            LogosToken::Dot => SyntaxKind::DOT,
            LogosToken::Text => SyntaxKind::TEXT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_attribute_line() {
        assert_eq!(
            kinds("Name : Bank Name {I}"),
            vec![
                SyntaxKind::WORD,
                SyntaxKind::WHITESPACE,
                SyntaxKind::COLON,
                SyntaxKind::WHITESPACE,
                SyntaxKind::WORD,
                SyntaxKind::WHITESPACE,
                SyntaxKind::WORD,
                SyntaxKind::WHITESPACE,
                SyntaxKind::L_BRACE,
                SyntaxKind::WORD,
                SyntaxKind::R_BRACE,
            ]
        );
    }

    #[test]
    fn test_separator_and_comment() {
        assert_eq!(
            kinds("--\n// note\n"),
            vec![
                SyntaxKind::SEPARATOR,
                SyntaxKind::NEWLINE,
                SyntaxKind::LINE_COMMENT,
                SyntaxKind::NEWLINE,
            ]
        );
    }

    #[test]
    fn test_tags_stay_single_words() {
        let tokens = tokenize("UR12c");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, SyntaxKind::WORD);
    }

    #[test]
    fn test_non_ascii_words() {
        let tokens = tokenize("Größe Ünit_2");
        let words: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == SyntaxKind::WORD)
            .map(|t| t.text)
            .collect();
        assert_eq!(words, vec!["Größe", "Ünit_2"]);
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_offsets_are_contiguous() {
        let tokens = tokenize("1 Bank, (x)");
        let mut expected = 0u32;
        for token in &tokens {
            assert_eq!(u32::from(token.offset), expected);
            expected += token.text.len() as u32;
        }
        assert_eq!(tokens[0].kind, SyntaxKind::NUMBER);
        assert!(tokens.iter().any(|t| t.kind == SyntaxKind::TEXT && t.text == "("));
    }
}
