//! Form control labelling rules.

use a11ylint_ast::{Element, ElementRef};

use super::{Rule, RuleMeta, Target};
use crate::Diagnostic;
use crate::context::LintContext;

/// Which label condition a rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCheck {
    /// No `label[for]` points at the control.
    Missing,
    /// More than one `label[for]` points at the control.
    Multiple,
    /// Labels exist but none of them has text.
    Empty,
}

impl LabelCheck {
    fn violated(self, labels: &[ElementRef<'_>]) -> bool {
        match self {
            LabelCheck::Missing => labels.is_empty(),
            LabelCheck::Multiple => labels.len() > 1,
            LabelCheck::Empty => !labels.is_empty() && labels.iter().all(|label| !label.has_text()),
        }
    }
}

/// Matches controls against the `for` index by their `id`.
#[derive(Debug, Clone)]
pub struct LabelAssociation {
    meta: RuleMeta,
    target: Target,
    check: LabelCheck,
}

impl LabelAssociation {
    pub fn new(meta: RuleMeta, target: Target, check: LabelCheck) -> Self {
        Self {
            meta,
            target,
            check,
        }
    }
}

impl Rule for LabelAssociation {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        self.target.matches(element)
    }

    fn check(&self, ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let labels = ctx.labels_of(element);
        if !self.check.violated(&labels) {
            return Vec::new();
        }
        self.meta.report(element).into_iter().collect()
    }
}
