//! Parse error types
//!
//! Every failure aborts the whole parse; there is no recovery and no partial
//! tree. Each error carries the byte range in the parsed expression it
//! refers to.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;

/// Direction of a parenthesis imbalance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Imbalance {
    /// More `(` than `)`
    ExcessOpening,
    /// More `)` than `(`
    ExcessClosing,
}

impl Imbalance {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ExcessOpening => ErrorCode::E0101,
            Self::ExcessClosing => ErrorCode::E0102,
        }
    }
}

impl std::fmt::Display for Imbalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code().default_message())
    }
}

/// Why a node literal was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralFault {
    EmptyTag,
    EmptyId,
    EmptyClass,
    MisplacedMarker(char),
    UnexpectedWhitespace,
    TrailingCharacters,
    UnclosedAttributes,
    MissingAttributeName,
    UnquotedValue,
    UnterminatedValue,
    MissingSeparator,
    UnclosedContent,
}

impl LiteralFault {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyTag => ErrorCode::E0201,
            Self::EmptyId => ErrorCode::E0202,
            Self::EmptyClass => ErrorCode::E0203,
            Self::MisplacedMarker(_) => ErrorCode::E0204,
            Self::UnexpectedWhitespace => ErrorCode::E0205,
            Self::TrailingCharacters => ErrorCode::E0206,
            Self::UnclosedAttributes => ErrorCode::E0301,
            Self::MissingAttributeName => ErrorCode::E0302,
            Self::UnquotedValue => ErrorCode::E0303,
            Self::UnterminatedValue => ErrorCode::E0304,
            Self::MissingSeparator => ErrorCode::E0305,
            Self::UnclosedContent => ErrorCode::E0401,
        }
    }
}

impl std::fmt::Display for LiteralFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MisplacedMarker(marker) => write!(f, "misplaced '{}'", marker),
            other => f.write_str(other.code().default_message()),
        }
    }
}

/// Errors that can occur while parsing an abbreviation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Parenthesis depth did not return to zero.
    #[error("unbalanced grouping: {imbalance} at {range:?}")]
    UnbalancedGrouping { imbalance: Imbalance, range: TextRange },

    /// A node literal does not have the `tag#id.class[attrs]{content}` shape.
    #[error("malformed node literal `{literal}`: {fault} at {range:?}")]
    MalformedNodeLiteral {
        literal: String,
        fault: LiteralFault,
        range: TextRange,
    },

    /// The same attribute name appears twice in one node literal.
    #[error("duplicate attribute `{name}` in `{literal}` at {range:?}")]
    DuplicateAttribute {
        name: SmolStr,
        literal: String,
        range: TextRange,
    },
}

impl ParseError {
    /// Create an unbalanced grouping error
    pub fn unbalanced(imbalance: Imbalance, range: TextRange) -> Self {
        Self::UnbalancedGrouping { imbalance, range }
    }

    /// Create a malformed literal error
    pub fn malformed(literal: impl Into<String>, fault: LiteralFault, range: TextRange) -> Self {
        Self::MalformedNodeLiteral {
            literal: literal.into(),
            fault,
            range,
        }
    }

    /// Create a duplicate attribute error
    pub fn duplicate_attribute(
        name: impl Into<SmolStr>,
        literal: impl Into<String>,
        range: TextRange,
    ) -> Self {
        Self::DuplicateAttribute {
            name: name.into(),
            literal: literal.into(),
            range,
        }
    }

    /// Categorized error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnbalancedGrouping { imbalance, .. } => imbalance.code(),
            Self::MalformedNodeLiteral { fault, .. } => fault.code(),
            Self::DuplicateAttribute { .. } => ErrorCode::E0306,
        }
    }

    /// Source range in the parsed expression
    pub fn range(&self) -> TextRange {
        match self {
            Self::UnbalancedGrouping { range, .. }
            | Self::MalformedNodeLiteral { range, .. }
            | Self::DuplicateAttribute { range, .. } => *range,
        }
    }

    /// Shift the range by `offset`, for errors found in a sub-slice
    pub(crate) fn shifted(mut self, offset: TextSize) -> Self {
        match &mut self {
            Self::UnbalancedGrouping { range, .. }
            | Self::MalformedNodeLiteral { range, .. }
            | Self::DuplicateAttribute { range, .. } => {
                *range = TextRange::new(range.start() + offset, range.end() + offset)
            }
        }
        self
    }

    /// Format the error with its code prefix
    pub fn format(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}
