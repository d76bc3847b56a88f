//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Grouping errors (parentheses)
//! - E02xx: Node literal shape errors (tag, id, classes)
//! - E03xx: Attribute group errors
//! - E04xx: Content group errors

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Grouping errors
    // =========================================================================
    /// Opening parenthesis without a matching `)`
    E0101,
    /// Closing parenthesis without a matching `(`
    E0102,

    // =========================================================================
    // E02xx: Node literal shape errors
    // =========================================================================
    /// Missing tag name
    E0201,
    /// `#` not followed by an id
    E0202,
    /// `.` not followed by a class name
    E0203,
    /// Marker character in the wrong position
    E0204,
    /// Whitespace outside an attribute or content group
    E0205,
    /// Characters after the last recognized group
    E0206,

    // =========================================================================
    // E03xx: Attribute group errors
    // =========================================================================
    /// Unclosed bracket `[`
    E0301,
    /// `=` without an attribute name
    E0302,
    /// Attribute value not enclosed in double quotes
    E0303,
    /// Quoted attribute value without closing quote
    E0304,
    /// Attributes not separated by whitespace
    E0305,
    /// Attribute name repeated within one node
    E0306,

    // =========================================================================
    // E04xx: Content group errors
    // =========================================================================
    /// Content group that does not end the literal with `}`
    E0401,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0401 => "E0401",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "grouping error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 | Self::E0206 => {
                "node literal error"
            }
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 | Self::E0305 | Self::E0306 => {
                "attribute error"
            }
            Self::E0401 => "content error",
        }
    }

    /// Get the default message for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "excess opening parenthesis",
            Self::E0102 => "excess closing parenthesis",
            Self::E0201 => "missing tag name",
            Self::E0202 => "empty id",
            Self::E0203 => "empty class name",
            Self::E0204 => "misplaced marker",
            Self::E0205 => "unexpected whitespace",
            Self::E0206 => "trailing characters",
            Self::E0301 => "unclosed attribute group",
            Self::E0302 => "missing attribute name",
            Self::E0303 => "unquoted attribute value",
            Self::E0304 => "unterminated attribute value",
            Self::E0305 => "missing separator between attributes",
            Self::E0306 => "duplicate attribute",
            Self::E0401 => "unclosed content group",
        }
    }

    /// Check if this is a grouping (parenthesis) error
    pub fn is_grouping(&self) -> bool {
        matches!(self, Self::E0101 | Self::E0102)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
