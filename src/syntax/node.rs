//! The node tree handed to downstream generators
//!
//! A [`Node`] is constructed childless by the literal scanner and receives its
//! children once from the tree builder. Children are owned exclusively by
//! their parent, so the tree is always finite and acyclic.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

/// Tag of the synthetic node wrapping a parsed forest
pub const ROOT_TAG: &str = "root";

/// Attribute name to optional value, in source order
pub type Attributes = IndexMap<SmolStr, Option<String>, FxBuildHasher>;

/// A structural node: tag, id, classes, attributes, content and children
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub tag: SmolStr,
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<SmolStr>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub classes: Vec<SmolStr>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a childless node with only a tag
    pub fn new(tag: impl Into<SmolStr>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create the synthetic root wrapping `children`
    pub fn root(children: Vec<Node>) -> Self {
        Self::new(ROOT_TAG).with_children(children)
    }

    pub fn with_id(mut self, id: impl Into<SmolStr>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<SmolStr>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<SmolStr>, value: Option<&str>) -> Self {
        self.attributes.insert(name.into(), value.map(str::to_string));
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Check if this node has the shape of the synthetic root: tag `root`
    /// and no id, classes, attributes or content.
    ///
    /// A node knows nothing about its position, so a parsed `root` literal
    /// has the same shape. Only the node returned by `parse` is the actual
    /// root of a tree.
    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.content.is_none()
    }

    /// Id without the `#` marker, empty when absent
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// Raw content text, empty when absent
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up an attribute.
    ///
    /// `None` when the attribute is not present, `Some(None)` for a bare
    /// attribute, `Some(Some(value))` for `name="value"`.
    pub fn attribute(&self, name: &str) -> Option<Option<&str>> {
        self.attributes.get(name).map(|value| value.as_deref())
    }

    /// All nodes below this one, in pre-order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First node (this one or below, pre-order) with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        std::iter::once(self)
            .chain(self.descendants())
            .find(|node| node.id.as_deref() == Some(id))
    }
}

/// Pre-order iterator over the nodes below a node
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
