//! Logos-based lexer for abbreviations
//!
//! Produces a flat, lossless token stream: concatenating the token texts
//! gives back the input. Attribute and content groups are lexed as single
//! tokens, so operators and parentheses inside them never become structure.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Offset just past the end of this token
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
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
            // `Text` takes every character the other patterns leave
            Err(()) => SyntaxKind::TEXT,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire expression into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // GROUPS (an unterminated group runs to the end of input)
    // =========================================================================
    #[regex(r"\{[^}]*\}?")]
    Content,

    #[regex(r"\[[^\]]*\]?")]
    Attrs,

    // =========================================================================
    // OPERATORS
    // =========================================================================
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // =========================================================================
    // PLAIN TEXT (stray `}` and `]` included)
    // =========================================================================
    #[regex(r"[^>+()\[{]+")]
    Text,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Content => SyntaxKind::CONTENT,
            LogosToken::Attrs => SyntaxKind::ATTRS,
            LogosToken::Gt => SyntaxKind::GT,
            LogosToken::Plus => SyntaxKind::PLUS,
            LogosToken::LParen => SyntaxKind::L_PAREN,
            LogosToken::RParen => SyntaxKind::R_PAREN,
            LogosToken::Text => SyntaxKind::TEXT,
        }
    }
}
