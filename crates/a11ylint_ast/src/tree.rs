//! JSON tree format for documents produced by an external parser.
//!
//! ```json
//! {
//!   "title": "index.html",
//!   "nodes": [
//!     {
//!       "type": "element",
//!       "name": "img",
//!       "attributes": { "src": "logo.png" },
//!       "startTag": { "start": { "line": 4, "column": 1 }, "end": { "line": 4, "column": 20 } },
//!       "children": []
//!     },
//!     { "type": "text", "value": "Hello" }
//!   ]
//! }
//! ```
//!
//! The top level may also be a bare node or a bare array of nodes.
//!
//! Nodes are streamed straight into a [`DocumentBuilder`], so no intermediate
//! tree is kept. Attributes keep their source order and the first occurrence
//! of a name wins. Element nesting is capped at [`MAX_DEPTH`].

use std::fmt;

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::{Document, DocumentBuilder, DocumentError, Element, Location, NodeId};

/// Deepest element nesting accepted by [`parse_tree`].
pub const MAX_DEPTH: usize = 512;

const NODE_TYPES: &[&str] = &["element", "text", "comment"];

/// A document loaded from the JSON tree format.
#[derive(Debug, Clone)]
pub struct ParsedTree {
    /// Optional display title carried by the file.
    pub title: Option<String>,
    /// The document.
    pub document: Document,
}

/// Parses the JSON tree format.
pub fn parse_tree(json: &str) -> Result<ParsedTree, DocumentError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    // Nesting is bounded by MAX_DEPTH instead of serde_json's fixed limit.
    deserializer.disable_recursion_limit();

    let mut builder = DocumentBuilder::new();
    let title = TopSeed {
        builder: &mut builder,
    }
    .deserialize(&mut deserializer)?;
    deserializer.end()?;

    Ok(ParsedTree {
        title,
        document: builder.finish(),
    })
}

struct TopSeed<'b> {
    builder: &'b mut DocumentBuilder,
}

impl<'de> DeserializeSeed<'de> for TopSeed<'_> {
    type Value = Option<String>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for TopSeed<'_> {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a node, an array of nodes, or an object with `nodes`")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        ChildrenSeed {
            builder: self.builder,
            depth: 1,
        }
        .visit_seq(seq)?;
        Ok(None)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        NodeVisitor {
            builder: self.builder,
            depth: 1,
            top_level: true,
        }
        .visit_map(map)
    }
}

/// A sequence of sibling nodes at `depth`.
struct ChildrenSeed<'b> {
    builder: &'b mut DocumentBuilder,
    depth: usize,
}

impl<'de> DeserializeSeed<'de> for ChildrenSeed<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for ChildrenSeed<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of nodes")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        let depth = self.depth;
        while seq
            .next_element_seed(NodeSeed {
                builder: &mut *self.builder,
                depth,
            })?
            .is_some()
        {}
        Ok(())
    }
}

struct NodeSeed<'b> {
    builder: &'b mut DocumentBuilder,
    depth: usize,
}

impl<'de> DeserializeSeed<'de> for NodeSeed<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        if self.depth > MAX_DEPTH {
            return Err(de::Error::custom(format!(
                "document tree is nested deeper than {MAX_DEPTH} elements"
            )));
        }
        deserializer
            .deserialize_map(NodeVisitor {
                builder: self.builder,
                depth: self.depth,
                top_level: false,
            })
            .map(|_| ())
    }
}

/// Reads one node object. At the top level the object may instead be the
/// `{ "title", "nodes" }` wrapper; the title is returned.
struct NodeVisitor<'b> {
    builder: &'b mut DocumentBuilder,
    depth: usize,
    top_level: bool,
}

impl<'de> Visitor<'de> for NodeVisitor<'_> {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a document tree node")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let NodeVisitor {
            builder,
            depth,
            top_level,
        } = self;

        let mut fields = NodeFields::default();
        let mut title = None;
        let mut has_nodes = false;
        // Children may come before the name, so the element is opened with a
        // placeholder payload and filled in once the object is read.
        let mut opened = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "type" => fields.kind = Some(map.next_value()?),
                "name" => fields.name = Some(map.next_value()?),
                "value" => fields.value = Some(map.next_value()?),
                "attributes" => fields.attributes = map.next_value::<Attributes>()?.0,
                "startTag" => fields.start_tag = map.next_value()?,
                "children" => {
                    if opened.is_some() {
                        return Err(de::Error::duplicate_field("children"));
                    }
                    opened = Some(builder.open_element(Element::new("")));
                    map.next_value_seed(ChildrenSeed {
                        builder: &mut *builder,
                        depth: depth + 1,
                    })?;
                }
                "title" if top_level => title = map.next_value()?,
                "nodes" if top_level => {
                    has_nodes = true;
                    map.next_value_seed(ChildrenSeed {
                        builder: &mut *builder,
                        depth,
                    })?;
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        if has_nodes {
            if fields.kind.is_some() || opened.is_some() {
                return Err(de::Error::custom(
                    "an object with `nodes` cannot also be a node",
                ));
            }
            return Ok(title);
        }

        fields.finish(builder, opened)?;
        Ok(title)
    }
}

#[derive(Default)]
struct NodeFields {
    kind: Option<String>,
    name: Option<String>,
    value: Option<String>,
    attributes: Vec<(String, String)>,
    start_tag: Option<Location>,
}

impl NodeFields {
    fn finish<E: de::Error>(
        self,
        builder: &mut DocumentBuilder,
        opened: Option<NodeId>,
    ) -> Result<(), E> {
        let kind = self.kind.ok_or_else(|| E::missing_field("type"))?;

        match kind.as_str() {
            "element" => {
                let name = self.name.ok_or_else(|| E::missing_field("name"))?;
                let mut element = Element::new(name);
                for (key, value) in self.attributes {
                    element.push_attr(key, value);
                }
                element.set_start_tag(self.start_tag);

                match opened {
                    Some(id) => {
                        builder.set_element(id, element);
                        builder.close_element().map_err(E::custom)?;
                    }
                    None => {
                        builder.element(element);
                    }
                }
            }
            "text" | "comment" => {
                if opened.is_some() {
                    return Err(E::custom(format!("a {kind} node cannot have children")));
                }
                let value = self.value.ok_or_else(|| E::missing_field("value"))?;
                if kind == "text" {
                    builder.text(value);
                } else {
                    builder.comment(value);
                }
            }
            other => return Err(E::unknown_variant(other, NODE_TYPES)),
        }

        Ok(())
    }
}

/// Attribute pairs in source order, duplicates included.
struct Attributes(Vec<(String, String)>);

impl<'de> de::Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Attributes, A::Error> {
                let mut pairs = Vec::new();
                while let Some(pair) = map.next_entry::<String, String>()? {
                    pairs.push(pair);
                }
                Ok(Attributes(pairs))
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}
