//! Node definitions.
//!
//! Nodes live in a [`Document`](crate::Document) arena and are addressed by
//! [`NodeId`]. Identifiers are assigned in document (pre-order) order, so
//! comparing two ids compares their position in the tree.

use crate::Location;

/// Index of a node inside its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The document root.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Returns the arena index of this node.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a node and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The document root. Not an element.
    Document,
    /// A markup tag instance.
    Element(Element),
    /// Character data.
    Text(String),
    /// A markup comment.
    Comment(String),
}

impl NodeKind {
    /// Returns the element payload, if any.
    #[inline]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NodeKind::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// One tag instance: name, attributes and start-tag range.
///
/// Tag and attribute names are stored lowercase so lookups are
/// case-insensitive. An absent attribute and an empty attribute are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    start_tag: Option<Location>,
}

impl Element {
    /// Creates an element with no attributes and no source range.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_ascii_lowercase(),
            attributes: Vec::new(),
            start_tag: None,
        }
    }

    /// Adds an attribute. The first occurrence of a name wins, matching how
    /// HTML parsers treat duplicate attributes.
    pub fn with_attr(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.push_attr(name, value);
        self
    }

    /// Sets the start-tag range.
    pub fn with_start_tag(mut self, location: Location) -> Self {
        self.start_tag = Some(location);
        self
    }

    pub(crate) fn push_attr(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let name = name.as_ref().to_ascii_lowercase();
        if !self.attributes.iter().any(|(existing, _)| *existing == name) {
            self.attributes.push((name, value.into()));
        }
    }

    pub(crate) fn set_start_tag(&mut self, location: Option<Location>) {
        self.start_tag = location;
    }

    /// Lowercase tag name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the tag name matches, ignoring ASCII case.
    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.name.eq_ignore_ascii_case(tag)
    }

    /// Returns the raw value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the attribute value when present and not just whitespace.
    pub fn non_blank_attr(&self, name: &str) -> Option<&str> {
        self.attr(name).filter(|value| !value.trim().is_empty())
    }

    /// Returns true if the attribute is present (possibly empty).
    #[inline]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Iterates attributes in source order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Start-tag range, if the parser recorded one.
    #[inline]
    pub const fn start_tag(&self) -> Option<Location> {
        self.start_tag
    }

    /// Heading level for `h1`..`h6`.
    pub fn heading_level(&self) -> Option<u8> {
        match self.name.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }
}
