//! Walk functions for document traversal.
//!
//! Walking never recurses: a subtree is a contiguous id range in the arena,
//! so it is read front to back while a stack of open elements decides when
//! to call [`Visitor::leave_element`].

use std::ops::ControlFlow;

use crate::{Document, ElementRef, NodeKind, NodeRef};

use super::{VisitResult, Visitor};

/// Walks a whole document, starting at its root.
pub fn walk_document<'a, V>(visitor: &mut V, document: &'a Document) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    walk_children(visitor, document.root())
}

/// Walks `node` and everything below it.
///
/// The document root has no visit method of its own; passing it walks its
/// children.
pub fn walk_node<'a, V>(visitor: &mut V, node: NodeRef<'a>) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    walk_nodes(visitor, std::iter::once(node).chain(node.descendants()))
}

/// Walks everything below `node`, but not `node` itself.
pub fn walk_children<'a, V>(visitor: &mut V, node: NodeRef<'a>) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
{
    walk_nodes(visitor, node.descendants())
}

/// Visits `nodes`, which must be a pre-order run of whole subtrees.
fn walk_nodes<'a, V, I>(visitor: &mut V, nodes: I) -> VisitResult
where
    V: Visitor<'a> + ?Sized,
    I: Iterator<Item = NodeRef<'a>>,
{
    let mut open: Vec<ElementRef<'a>> = Vec::new();

    for node in nodes {
        while let Some(&top) = open.last()
            && !top.contains(node.id())
        {
            open.pop();
            visitor.leave_element(top)?;
        }

        match node.kind() {
            NodeKind::Document => {}
            NodeKind::Element(_) => {
                if let Some(element) = node.as_element() {
                    visitor.visit_element(element)?;
                    open.push(element);
                }
            }
            NodeKind::Text(value) => visitor.visit_text(node, value)?,
            NodeKind::Comment(value) => visitor.visit_comment(node, value)?,
        }
    }

    while let Some(top) = open.pop() {
        visitor.leave_element(top)?;
    }
    ControlFlow::Continue(())
}
