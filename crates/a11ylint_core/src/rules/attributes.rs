//! Attribute presence and validity rules.

use a11ylint_ast::{Element, ElementRef};

use super::{Rule, RuleMeta, Target, input_type, is_valid_language_tag};
use crate::Diagnostic;
use crate::context::LintContext;

/// Reports elements that lack an attribute.
#[derive(Debug, Clone)]
pub struct RequiredAttribute {
    meta: RuleMeta,
    target: Target,
    attribute: &'static str,
    blank_is_missing: bool,
}

impl RequiredAttribute {
    /// The attribute must be present; an empty value is accepted.
    pub fn present(meta: RuleMeta, target: Target, attribute: &'static str) -> Self {
        Self {
            meta,
            target,
            attribute,
            blank_is_missing: false,
        }
    }

    /// The attribute must be present and not blank.
    pub fn non_blank(meta: RuleMeta, target: Target, attribute: &'static str) -> Self {
        Self {
            meta,
            target,
            attribute,
            blank_is_missing: true,
        }
    }
}

impl Rule for RequiredAttribute {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        self.target.matches(element)
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let satisfied = if self.blank_is_missing {
            element.non_blank_attr(self.attribute).is_some()
        } else {
            element.has_attr(self.attribute)
        };

        if satisfied {
            return Vec::new();
        }
        self.meta.report(element).into_iter().collect()
    }
}

/// `img` directly inside `a` must carry a non-blank `alt`, since it is the
/// link's only text.
#[derive(Debug, Clone)]
pub struct LinkedImageAlt {
    meta: RuleMeta,
}

impl LinkedImageAlt {
    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

impl Rule for LinkedImageAlt {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.is("img")
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let in_anchor = element.parent_element().is_some_and(|parent| parent.is("a"));
        if !in_anchor || element.non_blank_attr("alt").is_some() {
            return Vec::new();
        }
        self.meta.report(element).into_iter().collect()
    }
}

/// `alt` is only meaningful on `input type="image"`.
#[derive(Debug, Clone)]
pub struct MisplacedAlt {
    meta: RuleMeta,
}

impl MisplacedAlt {
    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

impl Rule for MisplacedAlt {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.is("input")
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let is_image = input_type(element.element()).eq_ignore_ascii_case("image");
        if is_image || !element.has_attr("alt") {
            return Vec::new();
        }
        self.meta.report(element).into_iter().collect()
    }
}

/// `html[lang]` must name a known language.
///
/// A missing or blank `lang` is left to the presence rule.
#[derive(Debug, Clone)]
pub struct LanguageCode {
    meta: RuleMeta,
}

impl LanguageCode {
    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

impl Rule for LanguageCode {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.is("html")
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        match element.non_blank_attr("lang") {
            Some(lang) if !is_valid_language_tag(lang) => {
                self.meta.report(element).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }
}

/// `meta http-equiv="refresh"` with a positive delay.
#[derive(Debug, Clone)]
pub struct MetaRefresh {
    meta: RuleMeta,
}

impl MetaRefresh {
    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

/// Leading delay of a refresh `content` value such as `"5; url=/next"`.
fn refresh_delay(content: &str) -> Option<f64> {
    content.split([';', ',']).next()?.trim().parse().ok()
}

impl Rule for MetaRefresh {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.is("meta")
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let is_refresh = element
            .attr("http-equiv")
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("refresh"));
        let timed = element
            .attr("content")
            .and_then(refresh_delay)
            .is_some_and(|delay| delay > 0.0);

        if is_refresh && timed {
            self.meta.report(element).into_iter().collect()
        } else {
            Vec::new()
        }
    }
}
