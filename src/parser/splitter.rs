//! Delimiter splitter
//!
//! Splits an expression at the top-level occurrences of one delimiter
//! character. A delimiter is top-level when it is outside content groups
//! (`{…}`), attribute groups (`[…]`) and parentheses. Content and attribute
//! groups are mutually exclusive and never nest.

use text_size::{TextRange, TextSize};

use super::errors::{Imbalance, ParseError};

/// Scanner state while walking the text
#[derive(Debug, Default)]
struct SplitState {
    in_content: bool,
    in_attr: bool,
    depth: i64,
    /// Offset of the `)` that last took the depth from zero below zero
    unopened: Option<usize>,
    /// Offsets of `(` not yet closed
    open: Vec<usize>,
}

impl SplitState {
    fn step(&mut self, offset: usize, ch: char) {
        match ch {
            '{' if !self.in_content && !self.in_attr => self.in_content = true,
            '}' if self.in_content && !self.in_attr => self.in_content = false,
            '[' if !self.in_attr && !self.in_content => self.in_attr = true,
            ']' if self.in_attr && !self.in_content => self.in_attr = false,
            '(' if !self.in_content && !self.in_attr => {
                // below zero a `(` only pays back an earlier `)`
                if self.depth >= 0 {
                    self.open.push(offset);
                }
                self.depth += 1;
            }
            ')' if !self.in_content && !self.in_attr => {
                if self.depth > 0 {
                    self.open.pop();
                } else if self.depth == 0 {
                    self.unopened = Some(offset);
                }
                self.depth -= 1;
            }
            _ => {}
        }
    }

    fn is_split_point(&self, ch: char, delimiter: char) -> bool {
        ch == delimiter && !self.in_content && !self.in_attr && self.depth == 0
    }
}

/// Split `text` at every top-level `delimiter`.
///
/// Segments are returned in order as sub-slices of `text`. A delimiter always
/// closes the current segment, even an empty one; an empty segment left at
/// the end of the scan is not emitted. Fails when the parenthesis depth is
/// not zero once the whole text has been scanned.
pub fn split(text: &str, delimiter: char) -> Result<Vec<&str>, ParseError> {
    let mut state = SplitState::default();
    let mut segments = Vec::new();
    let mut start = 0;

    for (offset, ch) in text.char_indices() {
        state.step(offset, ch);
        if state.is_split_point(ch, delimiter) {
            segments.push(&text[start..offset]);
            start = offset + ch.len_utf8();
        }
    }

    if start < text.len() {
        segments.push(&text[start..]);
    }

    if state.depth < 0 {
        let offset = state.unopened.unwrap_or(text.len());
        return Err(ParseError::unbalanced(
            Imbalance::ExcessClosing,
            char_range(offset),
        ));
    }
    if state.depth > 0 {
        let offset = state.open.last().copied().unwrap_or(text.len());
        return Err(ParseError::unbalanced(
            Imbalance::ExcessOpening,
            char_range(offset),
        ));
    }

    Ok(segments)
}

/// Range of the single parenthesis character at `offset`
fn char_range(offset: usize) -> TextRange {
    TextRange::at(TextSize::new(offset as u32), TextSize::new(1))
}
