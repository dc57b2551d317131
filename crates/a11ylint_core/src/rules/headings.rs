//! Heading structure rules.

use a11ylint_ast::{Element, ElementRef};
use tracing::debug;

use super::{Rule, RuleMeta};
use crate::Diagnostic;
use crate::context::LintContext;

/// Deeper headings must not start before a heading of this level.
///
/// For an `hN`, every `hM` with `M > N` whose start tag begins before the
/// `hN` start tag is one violation, reported at the `hN`.
#[derive(Debug, Clone)]
pub struct HeadingOrder {
    meta: RuleMeta,
    level: u8,
}

impl HeadingOrder {
    pub fn new(meta: RuleMeta, level: u8) -> Self {
        Self { meta, level }
    }
}

impl Rule for HeadingOrder {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.heading_level() == Some(self.level)
    }

    fn check(&self, ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let Some(start) = element.start_tag() else {
            debug!(rule = self.meta.key.name, "Heading has no start-tag range");
            return Vec::new();
        };

        ctx.index()
            .headings()
            .iter()
            .filter(|heading| heading.level > self.level)
            .filter(|heading| {
                heading
                    .start_tag
                    .is_some_and(|other| other.starts_before(&start))
            })
            .filter_map(|heading| {
                let message = format!(
                    "{}: <h{}> appears before this <h{}>",
                    self.meta.message, heading.level, self.level
                );
                self.meta.report_with(element, message)
            })
            .collect()
    }
}

/// Only the first `h1` of a document is allowed.
#[derive(Debug, Clone)]
pub struct SingleTopHeading {
    meta: RuleMeta,
}

impl SingleTopHeading {
    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

impl Rule for SingleTopHeading {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.is("h1")
    }

    fn check(&self, ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let first = ctx.index().by_tag("h1").first().copied();
        if first == Some(element.id()) {
            return Vec::new();
        }
        self.meta.report(element).into_iter().collect()
    }
}
