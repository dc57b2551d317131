//! Core linter engine.

use rayon::prelude::*;
use tracing::debug;

use a11ylint_ast::Document;

use crate::context::LintContext;
use crate::engine::traverse;
use crate::rules::{Rule, builtin_rules};
use crate::{
    Configuration, Diagnostic, DocumentReport, LinterError, SourceDocument, Summary, aggregate,
};

/// The accessibility linter.
///
/// Holds the rule set and the configuration every run is checked against.
/// A linter is read-only while linting, so one instance can serve any
/// number of documents in parallel.
pub struct Linter {
    rules: Vec<Box<dyn Rule>>,
    config: Configuration,
}

impl Linter {
    /// Creates a linter with the built-in rules.
    pub fn new(config: Configuration) -> Result<Self, LinterError> {
        Self::with_rules(builtin_rules(), config)
    }

    /// Creates a linter with a custom rule set.
    ///
    /// Fails if the configuration has no entry for one of the rules.
    pub fn with_rules(
        rules: Vec<Box<dyn Rule>>,
        config: Configuration,
    ) -> Result<Self, LinterError> {
        config.ensure_covers(rules.iter().map(|rule| &rule.meta().key))?;
        debug!(
            rules = rules.len(),
            enabled = config.enabled_count(),
            "Linter initialized"
        );
        Ok(Self { rules, config })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Replaces the configuration as a whole.
    ///
    /// The old configuration stays in place if the new one does not cover
    /// every rule.
    pub fn set_config(&mut self, config: Configuration) -> Result<(), LinterError> {
        config.ensure_covers(self.rules.iter().map(|rule| &rule.meta().key))?;
        self.config = config;
        Ok(())
    }

    /// Runs every rule over one document.
    pub fn check(&self, document: &Document) -> Result<Vec<Diagnostic>, LinterError> {
        let ctx = LintContext::new(document, &self.config);
        Ok(traverse(&ctx, &self.rules)?)
    }

    /// Lints one document and aggregates its diagnostics.
    pub fn lint_document(&self, source: &SourceDocument) -> Result<DocumentReport, LinterError> {
        let diagnostics = self.check(&source.document)?;
        let statistics = aggregate(&diagnostics);
        debug!(
            path = %source.path.display(),
            diagnostics = diagnostics.len(),
            "Linted document"
        );

        Ok(DocumentReport {
            title: source.title.clone(),
            path: source.path.clone(),
            diagnostics,
            statistics,
        })
    }

    /// Lints documents in parallel, then merges their statistics in input
    /// order.
    pub fn lint_documents(&self, sources: &[SourceDocument]) -> Result<Summary, LinterError> {
        let reports = sources
            .par_iter()
            .map(|source| self.lint_document(source))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Summary::from_reports(reports))
    }
}
