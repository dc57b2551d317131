//! Visitor pattern for document traversal.
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_document`] - Walk a whole document from its root
//! - [`walk_node`] - Walk one node and its subtree
//! - [`walk_children`] - Walk everything below a node
//!
//! Traversal is depth-first and pre-order: an element is visited before its
//! children, and its children before its next sibling. After the last node
//! of an element's subtree, [`Visitor::leave_element`] is called for it. The
//! walk functions do the descending themselves, without recursion, so
//! arbitrarily deep documents are safe to walk.
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use a11ylint_ast::{DocumentBuilder, Element, ElementRef};
//! use a11ylint_ast::visitor::{VisitResult, Visitor, walk_document};
//!
//! struct TagCollector {
//!     tags: Vec<String>,
//! }
//!
//! impl<'a> Visitor<'a> for TagCollector {
//!     fn visit_element(&mut self, element: ElementRef<'a>) -> VisitResult {
//!         self.tags.push(element.name().to_string());
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let mut builder = DocumentBuilder::new();
//! builder.open_element(Element::new("ul"));
//! builder.element(Element::new("li"));
//! builder.close_element().unwrap();
//! let doc = builder.finish();
//!
//! let mut collector = TagCollector { tags: Vec::new() };
//! assert_eq!(walk_document(&mut collector, &doc), ControlFlow::Continue(()));
//! assert_eq!(collector.tags, vec!["ul", "li"]);
//! ```

mod walk;

use std::ops::ControlFlow;

use crate::{ElementRef, NodeRef};

pub use walk::{walk_children, walk_document, walk_node};

/// Result of a visit: `Continue` to keep walking, `Break` to stop.
pub type VisitResult = ControlFlow<()>;

/// Read-only visitor over a document tree.
pub trait Visitor<'a> {
    /// Called for every element, before its children.
    fn visit_element(&mut self, _element: ElementRef<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called once an element's children have all been walked.
    fn leave_element(&mut self, _element: ElementRef<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    fn visit_text(&mut self, _node: NodeRef<'a>, _value: &'a str) -> VisitResult {
        ControlFlow::Continue(())
    }

    fn visit_comment(&mut self, _node: NodeRef<'a>, _value: &'a str) -> VisitResult {
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, DocumentBuilder, Element};
    use pretty_assertions::assert_eq;

    fn nested() -> Document {
        // <div><p>one</p><!-- c --><section><h2>two</h2></section></div><footer></footer>
        let mut b = DocumentBuilder::new();
        b.open_element(Element::new("div"));
        b.open_element(Element::new("p"));
        b.text("one");
        b.close_element().unwrap();
        b.comment(" c ");
        b.open_element(Element::new("section"));
        b.open_element(Element::new("h2"));
        b.text("two");
        b.close_element().unwrap();
        b.close_element().unwrap();
        b.close_element().unwrap();
        b.element(Element::new("footer"));
        b.finish()
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        stop_at: Option<&'static str>,
    }

    impl<'a> Visitor<'a> for Recorder {
        fn visit_element(&mut self, element: ElementRef<'a>) -> VisitResult {
            self.events.push(element.name().to_string());
            if self.stop_at == Some(element.name()) {
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        }

        fn leave_element(&mut self, element: ElementRef<'a>) -> VisitResult {
            self.events.push(format!("/{}", element.name()));
            ControlFlow::Continue(())
        }

        fn visit_text(&mut self, _node: NodeRef<'a>, value: &'a str) -> VisitResult {
            self.events.push(format!("#{value}"));
            ControlFlow::Continue(())
        }

        fn visit_comment(&mut self, _node: NodeRef<'a>, _value: &'a str) -> VisitResult {
            self.events.push("!".to_string());
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn test_pre_order_traversal_with_leave_events() {
        let doc = nested();
        let mut recorder = Recorder::default();

        assert_eq!(walk_document(&mut recorder, &doc), ControlFlow::Continue(()));
        assert_eq!(
            recorder.events,
            vec![
                "div", "p", "#one", "/p", "!", "section", "h2", "#two", "/h2", "/section",
                "/div", "footer", "/footer",
            ]
        );
    }

    #[test]
    fn test_break_stops_traversal() {
        let doc = nested();
        let mut recorder = Recorder {
            stop_at: Some("section"),
            ..Default::default()
        };

        assert_eq!(walk_document(&mut recorder, &doc), ControlFlow::Break(()));
        assert_eq!(recorder.events, vec!["div", "p", "#one", "/p", "!", "section"]);
    }

    #[test]
    fn test_walk_node_includes_the_node() {
        let doc = nested();
        let section = doc.elements().find(|e| e.is("section")).unwrap();

        let mut recorder = Recorder::default();
        let _ = walk_node(&mut recorder, section.as_node());
        assert_eq!(recorder.events, vec!["section", "h2", "#two", "/h2", "/section"]);

        let mut recorder = Recorder::default();
        let _ = walk_children(&mut recorder, section.as_node());
        assert_eq!(recorder.events, vec!["h2", "#two", "/h2"]);
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let depth = 100_000;
        let mut b = DocumentBuilder::new();
        for _ in 0..depth {
            b.open_element(Element::new("div"));
        }
        b.text("leaf");
        let doc = b.finish();

        struct Depth {
            current: usize,
            max: usize,
            left: usize,
        }
        impl<'a> Visitor<'a> for Depth {
            fn visit_element(&mut self, _element: ElementRef<'a>) -> VisitResult {
                self.current += 1;
                self.max = self.max.max(self.current);
                ControlFlow::Continue(())
            }
            fn leave_element(&mut self, _element: ElementRef<'a>) -> VisitResult {
                self.current -= 1;
                self.left += 1;
                ControlFlow::Continue(())
            }
        }

        let mut visitor = Depth {
            current: 0,
            max: 0,
            left: 0,
        };
        assert_eq!(walk_document(&mut visitor, &doc), ControlFlow::Continue(()));
        assert_eq!(visitor.max, depth);
        assert_eq!(visitor.left, depth);
        assert_eq!(visitor.current, 0);
    }
}
