//! Syntax: the node tree produced by the parser
mod node;

pub use node::{Attributes, Descendants, Node, ROOT_TAG};
