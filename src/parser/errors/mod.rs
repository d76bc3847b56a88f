//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - A single `ParseError` type for every failure of `parse`

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{Imbalance, LiteralFault, ParseError};
