//! Structural containment and empty-content rules.

use a11ylint_ast::{Element, ElementRef};

use super::{Rule, RuleMeta, Target, input_type};
use crate::Diagnostic;
use crate::context::LintContext;

/// Whether an image inside the element counts as content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageContent {
    /// Only text counts.
    Ignored,
    /// Any `img` descendant counts.
    Any,
    /// An `img` descendant counts when its `alt` is not blank.
    WithAlt,
}

/// Text-bearing elements must contain non-whitespace text.
#[derive(Debug, Clone)]
pub struct TextContent {
    meta: RuleMeta,
    target: Target,
    images: ImageContent,
}

impl TextContent {
    pub fn new(meta: RuleMeta, target: Target, images: ImageContent) -> Self {
        Self {
            meta,
            target,
            images,
        }
    }
}

impl Rule for TextContent {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        self.target.matches(element)
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        if element.has_text() {
            return Vec::new();
        }

        let mut images = element.descendant_elements().filter(|e| e.is("img"));
        let has_image = match self.images {
            ImageContent::Ignored => false,
            ImageContent::Any => images.next().is_some(),
            ImageContent::WithAlt => images.any(|img| img.non_blank_attr("alt").is_some()),
        };
        if has_image {
            return Vec::new();
        }

        self.meta.report(element).into_iter().collect()
    }
}

/// A container must have a direct child of a given tag.
#[derive(Debug, Clone)]
pub struct RequiredChild {
    meta: RuleMeta,
    tag: &'static str,
    child: &'static str,
}

impl RequiredChild {
    pub fn new(meta: RuleMeta, tag: &'static str, child: &'static str) -> Self {
        Self { meta, tag, child }
    }
}

impl Rule for RequiredChild {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.is(self.tag)
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        if element.child_elements().any(|child| child.is(self.child)) {
            return Vec::new();
        }
        self.meta.report(element).into_iter().collect()
    }
}

/// `head` must have exactly one `title` child.
#[derive(Debug, Clone)]
pub struct TitleCount {
    meta: RuleMeta,
}

impl TitleCount {
    const MULTIPLE: &'static str = "Document has more than one title element";

    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

impl Rule for TitleCount {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.is("head")
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let titles = element
            .child_elements()
            .filter(|child| child.is("title"))
            .count();

        let diagnostic = match titles {
            1 => None,
            0 => self.meta.report(element),
            _ => self.meta.report_with(element, Self::MULTIPLE),
        };
        diagnostic.into_iter().collect()
    }
}

const MENU_ITEM_ROLES: [&str; 3] = ["menuitem", "menuitemcheckbox", "menuitemradio"];

fn has_role(element: &Element, roles: &[&str]) -> bool {
    element.attr("role").is_some_and(|value| {
        value
            .split_whitespace()
            .any(|role| roles.iter().any(|r| r.eq_ignore_ascii_case(role)))
    })
}

/// `role="menu"` must own at least one menu item.
#[derive(Debug, Clone)]
pub struct MenuItems {
    meta: RuleMeta,
}

impl MenuItems {
    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

impl Rule for MenuItems {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        has_role(element, &["menu"])
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let has_items = element
            .descendant_elements()
            .any(|child| has_role(child.element(), &MENU_ITEM_ROLES));
        if has_items {
            return Vec::new();
        }
        self.meta.report(element).into_iter().collect()
    }
}

/// A form with several radio buttons must group each of them in a
/// `fieldset` that has a `legend`.
#[derive(Debug, Clone)]
pub struct RadioGrouping {
    meta: RuleMeta,
}

impl RadioGrouping {
    pub fn new(meta: RuleMeta) -> Self {
        Self { meta }
    }
}

fn in_legend_fieldset(radio: ElementRef<'_>, form: ElementRef<'_>) -> bool {
    radio
        .ancestors()
        .take_while(|ancestor| ancestor.id() != form.id())
        .any(|ancestor| {
            ancestor.is("fieldset") && ancestor.child_elements().any(|child| child.is("legend"))
        })
}

impl Rule for RadioGrouping {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn applies_to(&self, element: &Element) -> bool {
        element.is("form")
    }

    fn check(&self, _ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic> {
        let radios: Vec<_> = element
            .descendant_elements()
            .filter(|e| e.is("input") && input_type(e.element()).eq_ignore_ascii_case("radio"))
            .collect();

        if radios.len() < 2 || radios.iter().all(|radio| in_legend_fieldset(*radio, element)) {
            return Vec::new();
        }
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

    fn meta(name: &'static str) -> RuleMeta {
        RuleMeta::new(RuleKey::new("test", "content", name), "2.4.4", Severity::Error)
    }

    #[test]
    fn test_text_content_whitespace_is_empty() {
        let rule = TextContent::new(meta("anchor"), Target::Tag("a"), ImageContent::Any);

        let mut b = DocumentBuilder::new();
        b.open_element(Element::new("a").with_start_tag(at(1)));
        b.text("  \n ");
        b.close_element().unwrap();
        b.open_element(Element::new("a").with_start_tag(at(2)));
        b.open_element(Element::new("span"));
        b.text("Home");
        b.close_element().unwrap();
        b.close_element().unwrap();

        let diags = run_rule(&rule, &b.finish());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range, at(1));
    }

    #[test]
    fn test_text_content_image_policies() {
        let build = || {
            let mut b = DocumentBuilder::new();
            b.open_element(Element::new("th").with_start_tag(at(1)));
            b.element(Element::new("img").with_attr("alt", ""));
            b.close_element().unwrap();
            b.open_element(Element::new("th").with_start_tag(at(2)));
            b.element(Element::new("img").with_attr("alt", "Price"));
            b.close_element().unwrap();
            b.finish()
        };

        let ignored = TextContent::new(meta("th"), Target::Tag("th"), ImageContent::Ignored);
        let any = TextContent::new(meta("th"), Target::Tag("th"), ImageContent::Any);
        let with_alt = TextContent::new(meta("th"), Target::Tag("th"), ImageContent::WithAlt);

        assert_eq!(run_rule(&ignored, &build()).len(), 2);
        assert_eq!(run_rule(&any, &build()).len(), 0);

        let diags = run_rule(&with_alt, &build());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range, at(1));
    }

    #[test]
    fn test_required_child_must_be_direct() {
        let rule = RequiredChild::new(meta("caption"), "table", "caption");

        let mut b = DocumentBuilder::new();
        b.open_element(Element::new("table").with_start_tag(at(1)));
        b.element(Element::new("caption"));
        b.close_element().unwrap();
        b.open_element(Element::new("table").with_start_tag(at(2)));
        b.open_element(Element::new("tr"));
        b.element(Element::new("caption"));
        b.close_element().unwrap();
        b.close_element().unwrap();

        let diags = run_rule(&rule, &b.finish());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range, at(2));
    }

    #[test]
    fn test_title_count_messages() {
        let rule = TitleCount::new(meta("Document missing title element"));

        let mut b = DocumentBuilder::new();
        b.element(Element::new("head").with_start_tag(at(1)));
        b.open_element(Element::new("head").with_start_tag(at(2)));
        b.element(Element::new("title"));
        b.close_element().unwrap();
        b.open_element(Element::new("head").with_start_tag(at(3)));
        b.element(Element::new("title"));
        b.element(Element::new("title"));
        b.close_element().unwrap();

        let diags = run_rule(&rule, &b.finish());
        let messages: Vec<_> = diags.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Document missing title element",
                "Document has more than one title element"
            ]
        );
    }

    #[test]
    fn test_menu_items() {
        let rule = MenuItems::new(meta("menu"));

        let mut b = DocumentBuilder::new();
        b.open_element(Element::new("ul").with_attr("role", "menu").with_start_tag(at(1)));
        b.open_element(Element::new("li"));
        b.element(Element::new("a").with_attr("role", "menuitemradio"));
        b.close_element().unwrap();
        b.close_element().unwrap();
        b.open_element(Element::new("div").with_attr("role", "MENU").with_start_tag(at(2)));
        b.element(Element::new("a").with_attr("role", "link"));
        b.close_element().unwrap();
        b.element(Element::new("div").with_attr("role", "menubar").with_start_tag(at(3)));

        let diags = run_rule(&rule, &b.finish());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range, at(2));
    }

    fn radio() -> Element {
        Element::new("input").with_attr("type", "radio")
    }

    #[test]
    fn test_radio_grouping() {
        let rule = RadioGrouping::new(meta("radios"));

        let mut b = DocumentBuilder::new();
        // Grouped with a legend.
        b.open_element(Element::new("form").with_start_tag(at(1)));
        b.open_element(Element::new("fieldset"));
        b.element(Element::new("legend"));
        b.element(radio());
        b.element(radio());
        b.close_element().unwrap();
        b.close_element().unwrap();
        // Fieldset without a legend.
        b.open_element(Element::new("form").with_start_tag(at(2)));
        b.open_element(Element::new("fieldset"));
        b.element(radio());
        b.element(radio());
        b.close_element().unwrap();
        b.close_element().unwrap();
        // A single radio needs no group.
        b.open_element(Element::new("form").with_start_tag(at(3)));
        b.element(radio());
        b.close_element().unwrap();

        let diags = run_rule(&rule, &b.finish());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range, at(2));
    }
}
