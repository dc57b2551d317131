//! Diagnostic types for accessibility findings.

use a11ylint_ast::Location;
use serde::{Deserialize, Serialize};

/// Source label attached to every diagnostic produced by the engine.
pub const DIAGNOSTIC_SOURCE: &str = "a11ylint";

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - an accessibility failure.
    #[default]
    Error,
    /// Warning - a suggestion or obsolete markup.
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => f.pad("error"),
            Severity::Warning => f.pad("warning"),
        }
    }
}

/// One accessibility finding.
///
/// `code` is a WCAG success-criterion identifier such as `"1.1.1"`, or empty
/// for rules without a criterion mapping. The field is required when
/// deserializing, so a diagnostic without a code cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Success-criterion code; empty for uncoded diagnostics.
    pub code: String,

    /// Human-readable message.
    pub message: String,

    /// Severity level.
    pub severity: Severity,

    /// Start-tag range of the offending element.
    pub range: Location,

    /// Engine label, always [`DIAGNOSTIC_SOURCE`].
    pub source: String,

    /// Name of the rule that emitted this diagnostic.
    #[serde(default)]
    pub rule: String,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn new(code: impl Into<String>, message: impl Into<String>, range: Location) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: Severity::Error,
            range,
            source: DIAGNOSTIC_SOURCE.to_string(),
            rule: String::new(),
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Records the emitting rule.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Returns true if the diagnostic has no success-criterion code.
    #[inline]
    pub fn is_uncoded(&self) -> bool {
        self.code.is_empty()
    }
}
