//! Abbreviation parser
//!
//! Turns an Emmet-style abbreviation such as
//! `ul#nav>li.item[data-x="1"]{text}+li` into a [`Node`](crate::syntax::Node)
//! tree.
//!
//! ## Architecture
//!
//! ```text
//! Abbreviation
//!     ↓
//! Lexer (logos) → flat token stream with SyntaxKind
//!     ↓
//! Parser (recursive descent) → Expr: levels of sibling items
//!     ↓
//! Tree builder → forest, deeper levels on the last sibling
//!     ↓                ↑
//!     ↓         Literal scanner → one childless Node per literal
//!     ↓
//! Node tree under a synthetic `root`
//! ```
//!
//! [`split`] is the standalone delimiter splitter with the same notion of
//! "top-level" as the lexer.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod builder;
pub mod errors;
mod lexer;
mod literal;
mod splitter;
mod syntax_kind;

pub use builder::{parse, parse_all};
pub use errors::{ErrorCode, Imbalance, LiteralFault, ParseError};
pub use lexer::{Lexer, Token, tokenize};
pub use literal::parse_literal;
pub use parser::parse_expression;
pub use splitter::split;
pub use syntax_kind::SyntaxKind;

/// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
