//! Recursive descent parser for abbreviations
//!
//! Consumes the lexer's token stream once and builds the [`Expr`] tree.
//!
//! ```text
//! expr  := level ('>' level)*
//! level := item ('+' item)*
//! item  := atom*
//! atom  := TEXT | ATTRS | CONTENT | '(' expr ')' | unopened
//! unopened := ')' token* '('    -- the '(' that brings the depth back to zero
//! ```
//!
//! A segment that spans no text is kept when an operator follows it and
//! dropped when it is the last one of its level or expression.
//!
//! Outside any group a `)` takes the parenthesis depth below zero. Until a
//! later `(` pays it back, operators do not split and everything is literal
//! text. Only a depth that is still negative at the end is an error.

use text_size::{TextRange, TextSize};

use super::ast::{Expr, Item, ItemKind, Level};
use super::errors::{Imbalance, ParseError};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;

/// Parse an abbreviation into its level/item structure
pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens, TextSize::of(input));
    parser.parse_expr()
}

/// The parser state
struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    depth: usize,
    eof: TextSize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], eof: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            eof,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> Option<SyntaxKind> {
        self.current().map(|t| t.kind)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Offset of the current token, or end of input
    fn offset(&self) -> TextSize {
        self.current().map(|t| t.offset).unwrap_or(self.eof)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<&'t Token<'a>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// Expr = Level ('>' Level)*
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let mut levels = Vec::new();
        loop {
            levels.push(self.parse_level()?);
            if !self.eat(SyntaxKind::GT) {
                break;
            }
        }
        if levels.last().is_some_and(|level| level.range.is_empty()) {
            levels.pop();
        }
        Ok(Expr { levels })
    }

    /// Level = Item ('+' Item)*
    fn parse_level(&mut self) -> Result<Level, ParseError> {
        let start = self.offset();
        let mut items = Vec::new();
        loop {
            items.push(self.parse_item()?);
            if !self.eat(SyntaxKind::PLUS) {
                break;
            }
        }
        let end = items.last().map(|item| item.range.end()).unwrap_or(start);
        if items.last().is_some_and(Item::is_empty) {
            items.pop();
        }
        Ok(Level {
            items,
            range: TextRange::new(start, end),
        })
    }

    /// Item = Atom*
    fn parse_item(&mut self) -> Result<Item, ParseError> {
        let start = self.offset();
        let mut end = start;
        let mut atoms = 0usize;
        let mut group = None;

        while let Some(token) = self.current() {
            match token.kind {
                kind if kind.is_operator() => break,
                SyntaxKind::R_PAREN if self.depth > 0 => break,
                SyntaxKind::R_PAREN => {
                    group = None;
                    end = self.parse_unopened()?;
                }
                SyntaxKind::L_PAREN => {
                    let (inner, close) = self.parse_group()?;
                    group = Some(inner);
                    end = close;
                }
                _ => {
                    self.bump();
                    group = None;
                    end = token.end();
                }
            }
            atoms += 1;
        }

        let kind = match (atoms, group) {
            (0, _) => ItemKind::Empty,
            (1, Some(inner)) => ItemKind::Group(inner),
            _ => ItemKind::Literal,
        };
        Ok(Item {
            kind,
            range: TextRange::new(start, end),
        })
    }

    /// Group = '(' Expr ')'; returns the inner expression and the end offset
    fn parse_group(&mut self) -> Result<(Expr, TextSize), ParseError> {
        let open = match self.bump() {
            Some(token) => token_range(token),
            None => TextRange::empty(self.eof),
        };
        self.depth += 1;
        let inner = self.parse_expr()?;
        self.depth -= 1;

        match self.bump() {
            Some(close) if close.kind == SyntaxKind::R_PAREN => Ok((inner, close.end())),
            _ => Err(ParseError::unbalanced(Imbalance::ExcessOpening, open)),
        }
    }

    /// Unopened = ')' Token* '(' ; returns the end offset
    ///
    /// Every token up to the balancing `(` belongs to the current literal.
    fn parse_unopened(&mut self) -> Result<TextSize, ParseError> {
        let first = match self.bump() {
            Some(token) => token_range(token),
            None => TextRange::empty(self.eof),
        };
        let mut owed = 1usize;

        while let Some(token) = self.bump() {
            match token.kind {
                SyntaxKind::R_PAREN => owed += 1,
                SyntaxKind::L_PAREN => {
                    owed -= 1;
                    if owed == 0 {
                        return Ok(token.end());
                    }
                }
                _ => {}
            }
        }

        Err(ParseError::unbalanced(Imbalance::ExcessClosing, first))
    }
}

fn token_range(token: &Token<'_>) -> TextRange {
    TextRange::new(token.offset, token.end())
}
