//! Document-wide id rules.

use a11ylint_ast::{Element, ElementRef};

use super::{Rule, RuleMeta};
use crate::Diagnostic;
use crate::context::LintContext;

/// Attributes whose value is a list of element ids.
pub const ARIA_REFERENCE_ATTRIBUTES: [&str; 6] = [
    "aria-labelledby",
    "aria-describedby",
    "aria-controls",
    "aria-owns",
    "aria-activedescendant",
    "aria-flowto",
];

/// Every element whose `id` is shared with another element.
#[derive(Debug, Clone)]
pub struct DuplicateId {
    meta: RuleMeta,
}

impl DuplicateId {
    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

impl Rule for DuplicateId {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.non_blank_attr("id").is_some()
    }

    fn check(&self, ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let Some(id) = element.non_blank_attr("id") else {
            return Vec::new();
        };
        let shared = ctx.index().by_id(id).len();
        if shared < 2 {
            return Vec::new();
        }

        let message = format!("{}: \"{}\" is used by {} elements", self.meta.message, id, shared);
        self.meta.report_with(element, message).into_iter().collect()
    }
}

/// One diagnostic per ARIA id reference that resolves to nothing.
#[derive(Debug, Clone)]
pub struct AriaReference {
    meta: RuleMeta,
}

impl AriaReference {
    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

impl Rule for AriaReference {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, _element: &Element) -> bool {
        true
    }

    fn check(&self, ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for attribute in ARIA_REFERENCE_ATTRIBUTES {
            let Some(value) = element.attr(attribute) else {
                continue;
            };
            for token in value.split_whitespace() {
                if !ctx.index().by_id(token).is_empty() {
                    continue;
                }
                let message = format!(
                    "{}: {} points at missing id \"{}\"",
                    self.meta.message, attribute, token
                );
                diagnostics.extend(self.meta.report_with(element, message));
            }
        }

        diagnostics
    }
}
