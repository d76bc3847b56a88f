//! Syntax kinds for the abbreviation token stream
//!
//! An abbreviation only has a handful of structural tokens. Everything that
//! belongs to a single node (tag, id, classes, attribute and content groups)
//! is carried by `TEXT`, `ATTRS` and `CONTENT` and is interpreted later by the
//! literal scanner.

/// All token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // LITERAL PIECES (concatenated into node literals)
    // =========================================================================
    TEXT = 0,       // div#id.cls
    ATTRS,          // [x y="1"]
    CONTENT,        // {hello}

    // =========================================================================
    // OPERATORS
    // =========================================================================
    GT,             // >  (descendant)
    PLUS,           // +  (sibling)
    L_PAREN,        // (
    R_PAREN,        // )
}

impl SyntaxKind {
    /// Check if this token is a tree operator (`>` or `+`)
    pub fn is_operator(self) -> bool {
        matches!(self, Self::GT | Self::PLUS)
    }
}
