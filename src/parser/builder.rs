//! Tree builder
//!
//! Folds the parsed levels into a forest of [`Node`]s and wraps it in the
//! synthetic root. Descendant levels attach to the *last* node produced at
//! the shallower level only: `a+b>c` gives `b` the child `c`, `a` stays
//! childless.

use rayon::prelude::*;
use tracing::{debug, trace};

use super::ast::{Item, ItemKind, Level};
use super::errors::ParseError;
use super::literal::parse_literal;
use super::parser::parse_expression;
use crate::syntax::Node;

/// Parse an abbreviation into a tree rooted at a synthetic `root` node.
///
/// Fails on the first error; no partial tree is returned.
pub fn parse(expression: &str) -> Result<Node, ParseError> {
    debug!(expression, "parsing abbreviation");

    let result = parse_expression(expression)
        .and_then(|expr| TreeBuilder::new(expression).build_forest(&expr.levels))
        .map(Node::root);

    match &result {
        Ok(root) => debug!(nodes = root.descendants().count(), "parsed abbreviation"),
        Err(err) => debug!(code = %err.code(), %err, "rejected abbreviation"),
    }
    result
}

/// Parse independent abbreviations in parallel.
///
/// Results are returned in input order.
pub fn parse_all<S>(expressions: &[S]) -> Vec<Result<Node, ParseError>>
where
    S: AsRef<str> + Sync,
{
    debug!(count = expressions.len(), "parsing abbreviations in parallel");
    let results: Vec<_> = expressions
        .par_iter()
        .map(|expression| parse(expression.as_ref()))
        .collect();

    let rejected = results.iter().filter(|result| result.is_err()).count();
    debug!(
        parsed = results.len() - rejected,
        rejected, "parsed abbreviations in parallel"
    );
    results
}

struct TreeBuilder<'a> {
    source: &'a str,
}

impl<'a> TreeBuilder<'a> {
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    fn build_forest(&self, levels: &[Level]) -> Result<Vec<Node>, ParseError> {
        let Some((head, rest)) = levels.split_first() else {
            return Ok(Vec::new());
        };

        // A single item on the last level is a leaf, parentheses and all
        if let ([item], []) = (head.items.as_slice(), rest) {
            return Ok(vec![self.literal(item)?]);
        }

        let mut forest = Vec::new();
        for item in &head.items {
            match &item.kind {
                ItemKind::Empty => {}
                ItemKind::Literal => forest.push(self.literal(item)?),
                ItemKind::Group(inner) => forest.extend(self.build_forest(&inner.levels)?),
            }
        }

        if !rest.is_empty() {
            if let Some(last) = forest.last_mut() {
                let children = self.build_forest(rest)?;
                if !last.children.is_empty() {
                    trace!(
                        tag = %last.tag,
                        replaced = last.children.len(),
                        "deeper level replaces existing children"
                    );
                }
                last.children = children;
            }
        }

        Ok(forest)
    }

    fn literal(&self, item: &Item) -> Result<Node, ParseError> {
        parse_literal(item.text(self.source)).map_err(|err| err.shifted(item.range.start()))
    }
}
