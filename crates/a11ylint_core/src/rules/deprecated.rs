//! Tags that are reported wherever they appear.

use a11ylint_ast::{Element, ElementRef};

use super::{Rule, RuleMeta};
use crate::Diagnostic;
use crate::context::LintContext;

/// Reports every occurrence of one tag.
#[derive(Debug, Clone)]
pub struct TagUsage {
    meta: RuleMeta,
    tag: &'static str,
}

impl TagUsage {
    pub fn new(meta: RuleMeta, tag: &'static str) -> Self {
        Self { meta, tag }
    }
}

impl Rule for TagUsage {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.is(self.tag)
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        self.meta.report(element).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{at, run_rule};
    use crate::{RuleKey, Severity};
    use a11ylint_ast::DocumentBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_usage() {
        let rule = TagUsage::new(
            RuleMeta::new(
                RuleKey::new("deprecated", "obsoleteTags", "<center> tag is deprecated"),
                "",
                Severity::Warning,
            ),
            "center",
        );

        let mut b = DocumentBuilder::new();
        b.element(Element::new("CENTER").with_start_tag(at(1)));
        b.element(Element::new("div").with_start_tag(at(2)));

        let diags = run_rule(&rule, &b.finish());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, "");
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].message, "<center> tag is deprecated");
    }
}
