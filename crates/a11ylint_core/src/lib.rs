//! # a11ylint_core
//!
//! Accessibility rule engine for a11ylint.
//!
//! This crate provides:
//! - The built-in WCAG rule library
//! - The configuration gate that switches rules on and off
//! - Depth-first traversal that runs the rules over a document
//! - Per-document statistics and cross-document merging
//! - The `Linter` orchestrator, which lints batches in parallel
//!
//! ## Example
//!
//! ```rust
//! use a11ylint_ast::{DocumentBuilder, Element, Location};
//! use a11ylint_core::{Configuration, Linter, SourceDocument};
//!
//! let mut builder = DocumentBuilder::new();
//! builder.element(Element::new("img").with_start_tag(Location::from_coords(4, 1, 4, 20)));
//! let page = SourceDocument::new("index", "index.json", builder.finish());
//!
//! let linter = Linter::new(Configuration::defaults()).unwrap();
//! let report = linter.lint_document(&page).unwrap();
//!
//! assert_eq!(report.diagnostics[0].code, "1.1.1");
//! assert_eq!(report.statistics.tallies, [1, 0, 0, 0]);
//! ```

mod config;
pub mod context;
mod diagnostic;
mod engine;
mod error;
mod linter;
mod merge;
mod result;
pub mod rules;
mod stats;

pub use config::{Configuration, RuleKey};
pub use context::{DocumentIndex, HeadingInfo, LintContext};
pub use diagnostic::{DIAGNOSTIC_SOURCE, Diagnostic, Severity};
pub use engine::traverse;
pub use error::{ConfigError, LinterError};
pub use linter::Linter;
pub use merge::merge;
pub use result::{DocumentReport, SourceDocument, Summary};
pub use rules::{Rule, RuleMeta};
pub use stats::{Principle, Statistics, aggregate};
