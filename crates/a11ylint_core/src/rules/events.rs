//! Mouse handlers that need a keyboard counterpart.

use a11ylint_ast::{Element, ElementRef};

use super::{Rule, RuleMeta};
use crate::Diagnostic;
use crate::context::LintContext;

/// An element with `mouse` set must also set `keyboard`.
#[derive(Debug, Clone)]
pub struct EventPairing {
    meta: RuleMeta,
    mouse: &'static str,
    keyboard: &'static str,
}

impl EventPairing {
    pub fn new(meta: RuleMeta, mouse: &'static str, keyboard: &'static str) -> Self {
        Self {
            meta,
            mouse,
            keyboard,
        }
    }
}

impl Rule for EventPairing {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, _element: &Element) -> bool {
        true
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        if element.has_attr(self.mouse) && !element.has_attr(self.keyboard) {
            return self.meta.report(element).into_iter().collect();
        }
        Vec::new()
    }
}
