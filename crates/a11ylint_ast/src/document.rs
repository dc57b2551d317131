//! Document arena and tree queries.

use crate::{DocumentError, Element, Location, NodeId, NodeKind};

#[derive(Debug, Clone)]
struct NodeEntry {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// One past the last descendant. Descendants occupy `id + 1 .. end`.
    end: usize,
}

/// A parsed document tree.
///
/// Nodes are stored in pre-order, which makes document order the same as
/// [`NodeId`] order and makes every subtree a contiguous range. The tree is
/// immutable once built.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeEntry>,
}

impl Document {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            doc: self,
            id: NodeId::ROOT,
        }
    }

    /// Returns a node by id.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then_some(NodeRef { doc: self, id })
    }

    /// Returns an element by id.
    pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.get(id).and_then(|node| node.as_element())
    }

    /// Total number of nodes, including the root.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the document holds nothing but its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterates every element in document order.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        (0..self.nodes.len()).filter_map(|index| self.element(NodeId::from_index(index)))
    }

    fn entry(&self, id: NodeId) -> &NodeEntry {
        &self.nodes[id.index()]
    }
}

/// A borrowed handle to any node.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// Node id.
    #[inline]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The owning document.
    #[inline]
    pub const fn document(&self) -> &'a Document {
        self.doc
    }

    /// Node kind and payload.
    #[inline]
    pub fn kind(&self) -> &'a NodeKind {
        &self.doc.entry(self.id).kind
    }

    /// Returns this node as an element handle.
    pub fn as_element(&self) -> Option<ElementRef<'a>> {
        self.kind().as_element().map(|element| ElementRef {
            doc: self.doc,
            id: self.id,
            element,
        })
    }

    /// Returns the text value of a text node.
    #[inline]
    pub fn as_text(&self) -> Option<&'a str> {
        self.kind().as_text()
    }

    /// Parent node; `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.doc.entry(self.id).parent.map(|id| NodeRef { doc: self.doc, id })
    }

    /// Direct children in order.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let doc = self.doc;
        doc.entry(self.id)
            .children
            .iter()
            .map(move |&id| NodeRef { doc, id })
    }

    /// All descendants in document order, excluding this node.
    pub fn descendants(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let doc = self.doc;
        let end = doc.entry(self.id).end;
        (self.id.index() + 1..end).map(move |index| NodeRef {
            doc,
            id: NodeId::from_index(index),
        })
    }

    /// Returns true if any descendant text node holds non-whitespace text.
    pub fn has_text(&self) -> bool {
        self.descendants()
            .filter_map(|node| node.as_text())
            .any(|text| !text.trim().is_empty())
    }

    /// Concatenated descendant text.
    pub fn text_content(&self) -> String {
        self.descendants().filter_map(|node| node.as_text()).collect()
    }
}

/// A borrowed handle to an element node.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    id: NodeId,
    element: &'a Element,
}

impl<'a> ElementRef<'a> {
    /// Node id.
    #[inline]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The element payload.
    #[inline]
    pub const fn element(&self) -> &'a Element {
        self.element
    }

    /// The same node as a generic handle.
    #[inline]
    pub const fn as_node(&self) -> NodeRef<'a> {
        NodeRef {
            doc: self.doc,
            id: self.id,
        }
    }

    /// Lowercase tag name.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.element.name()
    }

    /// Case-insensitive tag comparison.
    #[inline]
    pub fn is(&self, tag: &str) -> bool {
        self.element.is(tag)
    }

    #[inline]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.attr(name)
    }

    #[inline]
    pub fn non_blank_attr(&self, name: &str) -> Option<&'a str> {
        self.element.non_blank_attr(name)
    }

    #[inline]
    pub fn has_attr(&self, name: &str) -> bool {
        self.element.has_attr(name)
    }

    #[inline]
    pub const fn start_tag(&self) -> Option<Location> {
        self.element.start_tag()
    }

    /// Nearest ancestor that is an element.
    pub fn parent_element(&self) -> Option<ElementRef<'a>> {
        self.as_node().parent().and_then(|parent| parent.as_element())
    }

    /// Element ancestors, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        std::iter::successors(self.parent_element(), |element| element.parent_element())
    }

    /// Direct children of any kind.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.as_node().children()
    }

    /// Direct element children.
    pub fn child_elements(self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.as_node().children().filter_map(|node| node.as_element())
    }

    /// Descendant elements in document order.
    pub fn descendant_elements(self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.as_node()
            .descendants()
            .filter_map(|node| node.as_element())
    }

    /// Returns true if `other` lies inside this element's subtree.
    pub fn contains(&self, other: NodeId) -> bool {
        let end = self.doc.entry(self.id).end;
        self.id < other && other.index() < end
    }

    #[inline]
    pub fn has_text(&self) -> bool {
        self.as_node().has_text()
    }

    #[inline]
    pub fn text_content(&self) -> String {
        self.as_node().text_content()
    }
}

/// Incrementally builds a [`Document`], the way a parser's tree sink does.
///
/// ```rust
/// use a11ylint_ast::{DocumentBuilder, Element};
///
/// let mut builder = DocumentBuilder::new();
/// builder.open_element(Element::new("p"));
/// builder.text("Hello");
/// builder.close_element().unwrap();
/// let doc = builder.finish();
///
/// assert_eq!(doc.elements().count(), 1);
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    nodes: Vec<NodeEntry>,
    open: Vec<NodeId>,
}

impl DocumentBuilder {
    /// Creates a builder holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeEntry {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
                end: 1,
            }],
            open: vec![NodeId::ROOT],
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        let parent = self.open.last().copied().unwrap_or(NodeId::ROOT);
        self.nodes.push(NodeEntry {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            end: id.index() + 1,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Opens an element; subsequent nodes become its children until
    /// [`close_element`](Self::close_element).
    pub fn open_element(&mut self, element: Element) -> NodeId {
        let id = self.push(NodeKind::Element(element));
        self.open.push(id);
        id
    }

    /// Closes the innermost open element.
    pub fn close_element(&mut self) -> Result<NodeId, DocumentError> {
        if self.open.len() <= 1 {
            return Err(DocumentError::UnbalancedClose);
        }
        let id = self.open.pop().ok_or(DocumentError::UnbalancedClose)?;
        self.nodes[id.index()].end = self.nodes.len();
        Ok(id)
    }

    /// Replaces the payload of an element opened earlier. Used by loaders
    /// that only learn an element's name after reading its children.
    pub(crate) fn set_element(&mut self, id: NodeId, element: Element) {
        if let Some(entry) = self.nodes.get_mut(id.index()) {
            entry.kind = NodeKind::Element(element);
        }
    }

    /// Adds an element with no children (a void element).
    pub fn element(&mut self, element: Element) -> NodeId {
        self.push(NodeKind::Element(element))
    }

    /// Adds a text node.
    pub fn text(&mut self, value: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(value.into()))
    }

    /// Adds a comment node.
    pub fn comment(&mut self, value: impl Into<String>) -> NodeId {
        self.push(NodeKind::Comment(value.into()))
    }

    /// Closes any elements left open and returns the document.
    pub fn finish(mut self) -> Document {
        let len = self.nodes.len();
        for id in self.open.drain(..) {
            self.nodes[id.index()].end = len;
        }
        Document { nodes: self.nodes }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Document {
        // <html><body><a href="/"><img alt="x"></a><p>text</p><!-- c --></body></html>
        let mut b = DocumentBuilder::new();
        b.open_element(Element::new("html"));
        b.open_element(Element::new("body"));
        b.open_element(Element::new("a").with_attr("href", "/"));
        b.element(Element::new("img").with_attr("alt", "x"));
        b.close_element().unwrap();
        b.open_element(Element::new("p"));
        b.text("text");
        b.close_element().unwrap();
        b.comment(" c ");
        b.close_element().unwrap();
        b.close_element().unwrap();
        b.finish()
    }

    #[test]
    fn test_elements_in_document_order() {
        let doc = sample();
        let names: Vec<_> = doc.elements().map(|e| e.name()).collect();
        assert_eq!(names, vec!["html", "body", "a", "img", "p"]);
    }

    #[test]
    fn test_parent_and_ancestors() {
        let doc = sample();
        let img = doc.elements().find(|e| e.is("img")).unwrap();

        assert_eq!(img.parent_element().map(|p| p.name()), Some("a"));
        let ancestors: Vec<_> = img.ancestors().map(|e| e.name()).collect();
        assert_eq!(ancestors, vec!["a", "body", "html"]);
    }

    #[test]
    fn test_root_has_no_parent_element() {
        let doc = sample();
        let html = doc.elements().next().unwrap();
        assert!(html.parent_element().is_none());
        assert!(html.as_node().parent().is_some());
        assert!(doc.root().parent().is_none());
    }

    #[test]
    fn test_children_include_text_and_comments() {
        let doc = sample();
        let body = doc.elements().find(|e| e.is("body")).unwrap();

        assert_eq!(body.children().count(), 3);
        let child_names: Vec<_> = body.child_elements().map(|e| e.name()).collect();
        assert_eq!(child_names, vec!["a", "p"]);
    }

    #[test]
    fn test_descendant_elements_are_contiguous() {
        let doc = sample();
        let body = doc.elements().find(|e| e.is("body")).unwrap();
        let names: Vec<_> = body.descendant_elements().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a", "img", "p"]);

        let a = doc.elements().find(|e| e.is("a")).unwrap();
        let img = doc.elements().find(|e| e.is("img")).unwrap();
        let p = doc.elements().find(|e| e.is("p")).unwrap();
        assert!(a.contains(img.id()));
        assert!(!a.contains(p.id()));
        assert!(!a.contains(a.id()));
    }

    #[test]
    fn test_text_queries() {
        let doc = sample();
        let p = doc.elements().find(|e| e.is("p")).unwrap();
        let a = doc.elements().find(|e| e.is("a")).unwrap();

        assert!(p.has_text());
        assert_eq!(p.text_content(), "text");
        assert!(!a.has_text());
    }

    #[test]
    fn test_whitespace_is_not_text() {
        let mut b = DocumentBuilder::new();
        b.open_element(Element::new("title"));
        b.text("   \n ");
        b.close_element().unwrap();
        let doc = b.finish();

        assert!(!doc.elements().next().unwrap().has_text());
    }

    #[test]
    fn test_unbalanced_close_is_an_error() {
        let mut b = DocumentBuilder::new();
        assert!(matches!(
            b.close_element(),
            Err(DocumentError::UnbalancedClose)
        ));
    }

    #[test]
    fn test_finish_closes_open_elements() {
        let mut b = DocumentBuilder::new();
        b.open_element(Element::new("div"));
        b.open_element(Element::new("span"));
        b.text("unterminated");
        let doc = b.finish();

        let div = doc.elements().next().unwrap();
        assert_eq!(div.descendant_elements().count(), 1);
        assert!(div.has_text());
    }

    #[test]
    fn test_empty_document() {
        let doc = DocumentBuilder::new().finish();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.elements().count(), 0);
        assert!(doc.get(NodeId::ROOT).is_some());
    }
}
