//! # a11ylint_ast
//!
//! Document tree types for a11ylint.
//!
//! The tree is produced by an HTML parser outside this workspace, either
//! through [`DocumentBuilder`] (a parser tree sink) or from the JSON tree
//! format read by [`parse_tree`].
//!
//! ## Architecture
//!
//! - All nodes of a document live in one arena, addressed by [`NodeId`]
//! - Nodes are stored in pre-order, so id order is document order
//! - Every node keeps its parent, which makes ancestor queries cheap
//! - Elements carry the source range of their start tag when the parser
//!   recorded one
//!
//! ## Example
//!
//! ```rust
//! use a11ylint_ast::{DocumentBuilder, Element, Location};
//!
//! let mut builder = DocumentBuilder::new();
//! builder.element(
//!     Element::new("img")
//!         .with_attr("src", "logo.png")
//!         .with_start_tag(Location::from_coords(4, 1, 4, 20)),
//! );
//! let doc = builder.finish();
//!
//! let img = doc.elements().next().unwrap();
//! assert!(img.is("img"));
//! assert!(!img.has_attr("alt"));
//! ```

mod document;
mod error;
mod node;
mod span;
mod tree;
pub mod visitor;

pub use document::{Document, DocumentBuilder, ElementRef, NodeRef};
pub use error::DocumentError;
pub use node::{Element, NodeId, NodeKind};
pub use span::{Location, Position};
pub use tree::{MAX_DEPTH, ParsedTree, parse_tree};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor};
