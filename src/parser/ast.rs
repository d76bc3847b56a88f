//! Abbreviation syntax tree
//!
//! The grammar parser's output: an expression split into descendant levels,
//! each level split into sibling items. Items keep their source range so the
//! tree builder can hand the exact literal text to the literal scanner.

use text_size::TextRange;

/// `expr := level ('>' level)*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub levels: Vec<Level>,
}

/// `level := item ('+' item)*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub items: Vec<Item>,
    pub range: TextRange,
}

/// One sibling position within a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Nothing between two operators
    Empty,
    /// A node literal, parentheses included verbatim
    Literal,
    /// Exactly one `( expr )`, nothing around it
    Group(Expr),
}

impl Item {
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, ItemKind::Empty)
    }

    /// Source text of this item
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range]
    }
}
