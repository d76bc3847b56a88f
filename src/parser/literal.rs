//! Node literal scanner
//!
//! Turns one node literal, `tag#id.class1.class2[name name="value"]{content}`,
//! into a childless [`Node`]. Components appear in that fixed order; every
//! component except the tag is optional.
//!
//! The scanner is a small state machine driven by a character class table
//! that is built once per process and never mutated afterwards.

use std::sync::LazyLock;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::errors::{LiteralFault, ParseError};
use crate::syntax::{Attributes, Node};

/// Character classes the scanner distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Name,
    Space,
    Hash,
    Dot,
    LBracket,
    RBracket,
    LBrace,
    Quote,
    Eq,
}

impl CharClass {
    /// Characters that end a tag, id or class run
    fn ends_run(self) -> bool {
        matches!(
            self,
            Self::Space | Self::Hash | Self::Dot | Self::LBracket | Self::LBrace
        )
    }

    /// Characters that end an attribute name
    fn ends_attribute_name(self) -> bool {
        matches!(self, Self::Space | Self::Eq | Self::Quote | Self::RBracket)
    }
}

/// ASCII lookup table; everything outside ASCII is `Space` or `Name`
struct CharTable([CharClass; 128]);

impl CharTable {
    fn build() -> Self {
        let mut table = [CharClass::Name; 128];
        for byte in [b' ', b'\t', b'\n', b'\r', 0x0b, 0x0c] {
            table[byte as usize] = CharClass::Space;
        }
        table[b'#' as usize] = CharClass::Hash;
        table[b'.' as usize] = CharClass::Dot;
        table[b'[' as usize] = CharClass::LBracket;
        table[b']' as usize] = CharClass::RBracket;
        table[b'{' as usize] = CharClass::LBrace;
        table[b'"' as usize] = CharClass::Quote;
        table[b'=' as usize] = CharClass::Eq;
        Self(table)
    }

    fn classify(&self, ch: char) -> CharClass {
        if ch.is_ascii() {
            self.0[ch as usize]
        } else if ch.is_whitespace() {
            CharClass::Space
        } else {
            CharClass::Name
        }
    }
}

static CHAR_TABLE: LazyLock<CharTable> = LazyLock::new(CharTable::build);

/// Parse a single node literal into a node without children.
///
/// Error ranges are relative to the start of `literal`.
pub fn parse_literal(literal: &str) -> Result<Node, ParseError> {
    Scanner::new(literal).scan()
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    table: &'static CharTable,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            table: &CHAR_TABLE,
        }
    }

    // =========================================================================
    // Character inspection
    // =========================================================================

    fn current(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn current_class(&self) -> Option<CharClass> {
        self.current().map(|ch| self.table.classify(ch))
    }

    fn at(&self, class: CharClass) -> bool {
        self.current_class() == Some(class)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.current() {
            self.pos += ch.len_utf8();
        }
    }

    fn eat_while(&mut self, keep: impl Fn(CharClass) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(class) = self.current_class() {
            if !keep(class) {
                break;
            }
            self.bump();
        }
        &self.text[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(|class| class == CharClass::Space);
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn range_from(&self, start: usize) -> TextRange {
        TextRange::new(TextSize::new(start as u32), TextSize::new(self.pos as u32))
    }

    /// Range of the character under the cursor (empty at end of input)
    fn current_range(&self) -> TextRange {
        let len = self.current().map(char::len_utf8).unwrap_or(0);
        TextRange::at(TextSize::new(self.pos as u32), TextSize::new(len as u32))
    }

    fn fault(&self, fault: LiteralFault) -> ParseError {
        ParseError::malformed(self.text, fault, self.current_range())
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    /// Literal = Tag Id? Class* Attributes? Content?
    fn scan(mut self) -> Result<Node, ParseError> {
        let tag = self.eat_while(|class| !class.ends_run());
        if tag.is_empty() {
            return Err(self.fault(LiteralFault::EmptyTag));
        }
        let mut node = Node::new(tag);

        if self.at(CharClass::Hash) {
            self.bump();
            node.id = Some(self.scan_run(LiteralFault::EmptyId)?);
        }

        while self.at(CharClass::Dot) {
            self.bump();
            let class = self.scan_run(LiteralFault::EmptyClass)?;
            node.classes.push(class);
        }

        if self.at(CharClass::LBracket) {
            node.attributes = self.scan_attributes()?;
        }

        if self.at(CharClass::LBrace) {
            node.content = Some(self.scan_content()?);
        }

        match self.current() {
            None => Ok(node),
            Some(ch) => {
                let fault = match self.table.classify(ch) {
                    CharClass::Space => LiteralFault::UnexpectedWhitespace,
                    CharClass::Hash | CharClass::Dot | CharClass::LBracket => {
                        LiteralFault::MisplacedMarker(ch)
                    }
                    _ => LiteralFault::TrailingCharacters,
                };
                Err(self.fault(fault))
            }
        }
    }

    /// Run = non-empty sequence of characters up to whitespace or a marker
    fn scan_run(&mut self, empty: LiteralFault) -> Result<SmolStr, ParseError> {
        let run = self.eat_while(|class| !class.ends_run());
        if run.is_empty() {
            return Err(self.fault(empty));
        }
        Ok(SmolStr::new(run))
    }

    /// Attributes = '[' (Name ('="' Value '"')?)* ']'
    fn scan_attributes(&mut self) -> Result<Attributes, ParseError> {
        let open = self.pos;
        self.bump();
        let mut attributes = Attributes::default();

        loop {
            self.skip_whitespace();
            match self.current_class() {
                None => {
                    return Err(ParseError::malformed(
                        self.text,
                        LiteralFault::UnclosedAttributes,
                        self.range_from(open),
                    ));
                }
                Some(CharClass::RBracket) => {
                    self.bump();
                    return Ok(attributes);
                }
                Some(CharClass::Eq | CharClass::Quote) => {
                    return Err(self.fault(LiteralFault::MissingAttributeName));
                }
                Some(_) => {}
            }

            let name_start = self.pos;
            let name = SmolStr::new(self.eat_while(|class| !class.ends_attribute_name()));
            let name_range = self.range_from(name_start);

            let value = if self.at(CharClass::Eq) {
                self.bump();
                Some(self.scan_quoted_value()?)
            } else {
                None
            };

            match self.current_class() {
                Some(CharClass::Space | CharClass::RBracket) | None => {}
                Some(_) => return Err(self.fault(LiteralFault::MissingSeparator)),
            }

            if attributes.contains_key(&name) {
                return Err(ParseError::duplicate_attribute(name, self.text, name_range));
            }
            attributes.insert(name, value);
        }
    }

    /// Value = '"' anything-but-quote '"'; the quotes are dropped
    fn scan_quoted_value(&mut self) -> Result<String, ParseError> {
        if !self.at(CharClass::Quote) {
            return Err(self.fault(LiteralFault::UnquotedValue));
        }
        let open = self.pos;
        self.bump();
        let start = self.pos;
        match self.text[start..].find('"') {
            Some(len) => {
                self.pos = start + len + 1;
                Ok(self.text[start..start + len].to_string())
            }
            None => {
                self.pos = self.text.len();
                Err(ParseError::malformed(
                    self.text,
                    LiteralFault::UnterminatedValue,
                    self.range_from(open),
                ))
            }
        }
    }

    /// Content = '{' verbatim '}' where the closing brace ends the literal
    fn scan_content(&mut self) -> Result<String, ParseError> {
        let open = self.pos;
        self.bump();
        let rest = &self.text[self.pos..];
        match rest.strip_suffix('}') {
            Some(content) => {
                self.pos = self.text.len();
                Ok(content.to_string())
            }
            None => {
                self.pos = self.text.len();
                Err(ParseError::malformed(
                    self.text,
                    LiteralFault::UnclosedContent,
                    self.range_from(open),
                ))
            }
        }
    }
}
