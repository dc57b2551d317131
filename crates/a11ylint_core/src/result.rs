//! Lint results.

use std::path::{Path, PathBuf};

use a11ylint_ast::{Document, ParsedTree};
use serde::Serialize;

use crate::{Diagnostic, Severity, Statistics, merge};

/// A document queued for linting.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Display title.
    pub title: String,
    /// Where the document came from.
    pub path: PathBuf,
    pub document: Document,
}

impl SourceDocument {
    pub fn new(title: impl Into<String>, path: impl Into<PathBuf>, document: Document) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            document,
        }
    }

    /// Wraps a parsed tree. Without a title in the tree, the file name is used.
    pub fn from_tree(path: impl AsRef<Path>, tree: ParsedTree) -> Self {
        let path = path.as_ref();
        let title = tree.title.unwrap_or_else(|| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        });
        Self::new(title, path, tree.document)
    }
}

/// Diagnostics and statistics for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub title: String,
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    pub statistics: Statistics,
}

impl DocumentReport {
    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns the number of errors.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Reports for a batch of documents plus their merged statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub documents: Vec<DocumentReport>,
    pub overall: Statistics,
}

impl Summary {
    /// Merges report statistics in input order.
    pub fn from_reports(documents: Vec<DocumentReport>) -> Self {
        let overall = merge(documents.iter().map(|report| &report.statistics));
        Self { documents, overall }
    }

    pub fn has_errors(&self) -> bool {
        self.documents.iter().any(DocumentReport::has_errors)
    }

    /// Diagnostics across all documents, coded or not.
    pub fn diagnostic_count(&self) -> usize {
        self.documents.iter().map(|d| d.diagnostics.len()).sum()
    }
}
