//! Lint context for one document.
//!
//! The index is built once per document, before any rule runs, so rules can
//! answer document-wide questions (is this id unique, which labels point at
//! this control, which headings came first) without rescanning the tree.

use std::collections::HashMap;

use a11ylint_ast::{Document, ElementRef, Location, NodeId};

use crate::Configuration;

/// A heading recorded by the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingInfo {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading node.
    pub id: NodeId,
    /// Start-tag range, when known.
    pub start_tag: Option<Location>,
}

/// Precomputed lookups over one document.
///
/// All lists are in document order.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    by_tag: HashMap<String, Vec<NodeId>>,
    by_id: HashMap<String, Vec<NodeId>>,
    labels_by_for: HashMap<String, Vec<NodeId>>,
    headings: Vec<HeadingInfo>,
}

impl DocumentIndex {
    /// Indexes every element of `document` in one pass.
    pub fn build(document: &Document) -> Self {
        let mut index = Self::default();

        for element in document.elements() {
            let id = element.id();
            index
                .by_tag
                .entry(element.name().to_string())
                .or_default()
                .push(id);

            if let Some(value) = element.non_blank_attr("id") {
                index.by_id.entry(value.to_string()).or_default().push(id);
            }

            if element.is("label")
                && let Some(target) = element.non_blank_attr("for")
            {
                index
                    .labels_by_for
                    .entry(target.to_string())
                    .or_default()
                    .push(id);
            }

            if let Some(level) = element.element().heading_level() {
                index.headings.push(HeadingInfo {
                    level,
                    id,
                    start_tag: element.start_tag(),
                });
            }
        }

        index
    }

    /// Elements with the given lowercase tag name.
    pub fn by_tag(&self, tag: &str) -> &[NodeId] {
        self.by_tag.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Elements whose `id` attribute equals `value`.
    pub fn by_id(&self, value: &str) -> &[NodeId] {
        self.by_id.get(value).map_or(&[], Vec::as_slice)
    }

    /// `label` elements whose `for` attribute equals `target`.
    pub fn labels_for(&self, target: &str) -> &[NodeId] {
        self.labels_by_for.get(target).map_or(&[], Vec::as_slice)
    }

    /// All `h1`..`h6` elements.
    pub fn headings(&self) -> &[HeadingInfo] {
        &self.headings
    }
}

/// Everything a rule can see while checking one element.
pub struct LintContext<'a> {
    document: &'a Document,
    index: DocumentIndex,
    config: &'a Configuration,
}

impl<'a> LintContext<'a> {
    /// Creates a context and builds the document index.
    pub fn new(document: &'a Document, config: &'a Configuration) -> Self {
        Self {
            document,
            index: DocumentIndex::build(document),
            config,
        }
    }

    #[inline]
    pub fn document(&self) -> &'a Document {
        self.document
    }

    #[inline]
    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    #[inline]
    pub fn config(&self) -> &'a Configuration {
        self.config
    }

    /// Resolves indexed ids to element handles.
    pub fn resolve<'s>(&'s self, ids: &'s [NodeId]) -> impl Iterator<Item = ElementRef<'a>> + 's {
        ids.iter().filter_map(|id| self.document.element(*id))
    }

    /// Labels associated with `element` through `label[for]`.
    ///
    /// Only explicit association counts: a control without an `id` has no
    /// labels, even when a `label` wraps it.
    pub fn labels_of(&self, element: ElementRef<'_>) -> Vec<ElementRef<'a>> {
        match element.non_blank_attr("id") {
            Some(id) => self.resolve(self.index.labels_for(id)).collect(),
            None => Vec::new(),
        }
    }
}
