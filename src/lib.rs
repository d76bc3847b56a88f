//! # flexcon
//!
//! Parser for Emmet-style abbreviations. An expression such as
//! `div#id.cls[attr="v"]{text}>child+sibling` becomes a tree of [`Node`]s
//! carrying tag, id, classes, attributes, content and children, ready for a
//! downstream generator.
//!
//! ```ignore
//! let root = flexcon::parse("ul#nav>li.item{one}+li.item{two}")?;
//! assert_eq!(root.children[0].children.len(), 2);
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, recursive-descent parser, literal scanner, tree builder
//!   ↓
//! syntax    → Node tree handed to callers
//! ```
//!
//! Parsing is pure: no I/O, no global mutable state. Independent expressions
//! may be parsed from any number of threads; [`parse_all`] does so with rayon.

/// Parser: lexer, grammar, literal scanner, tree builder, errors
pub mod parser;

/// Syntax: the node tree
pub mod syntax;

pub use parser::{ErrorCode, ParseError, parse, parse_all};
pub use syntax::{Attributes, Node, ROOT_TAG};
