//! Built-in accessibility rules.
//!
//! Every rule is a pure predicate over one element. The engine offers each
//! element to each rule in [`builtin_rules`] order; a rule first checks the
//! element's tag, then its configuration switch, and only then looks at the
//! document.

mod attributes;
mod content;
mod deprecated;
mod events;
mod headings;
mod identity;
mod labels;
mod lang_codes;

pub use attributes::{
    LanguageCode, LinkedImageAlt, MetaRefresh, MisplacedAlt, RequiredAttribute,
};
pub use content::{
    ImageContent, MenuItems, RadioGrouping, RequiredChild, TextContent, TitleCount,
};
pub use deprecated::TagUsage;
pub use events::EventPairing;
pub use headings::{HeadingOrder, SingleTopHeading};
pub use identity::{ARIA_REFERENCE_ATTRIBUTES, AriaReference, DuplicateId};
pub use labels::{LabelAssociation, LabelCheck};
pub use lang_codes::{LANGUAGE_CODES, is_valid_language_tag};

use a11ylint_ast::{Element, ElementRef};
use tracing::debug;

use crate::context::LintContext;
use crate::{ConfigError, Diagnostic, RuleKey, Severity};

/// Which elements a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Every element.
    Any,
    /// One tag name.
    Tag(&'static str),
    /// Any of several tag names.
    Tags(&'static [&'static str]),
    /// `input` elements whose resolved type is in the list.
    Input(&'static [&'static str]),
}

impl Target {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Target::Any => true,
            Target::Tag(tag) => element.is(tag),
            Target::Tags(tags) => tags.iter().any(|tag| element.is(tag)),
            Target::Input(types) => {
                element.is("input") && {
                    let kind = input_type(element);
                    types.iter().any(|t| t.eq_ignore_ascii_case(kind))
                }
            }
        }
    }
}

/// The `type` of an input element. A missing or blank type means `text`.
pub fn input_type(element: &Element) -> &str {
    element
        .non_blank_attr("type")
        .map(str::trim)
        .unwrap_or("text")
}

/// Fixed properties of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    /// Configuration key. `key.name` is the rule name.
    pub key: RuleKey,
    /// Success-criterion code, empty for uncoded rules.
    pub code: &'static str,
    pub severity: Severity,
    /// Default diagnostic message.
    pub message: &'static str,
}

impl RuleMeta {
    /// Creates metadata whose message is the rule name.
    pub const fn new(key: RuleKey, code: &'static str, severity: Severity) -> Self {
        Self {
            key,
            code,
            severity,
            message: key.name,
        }
    }

    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    /// A diagnostic with the default message at the element's start tag.
    pub fn report(&self, element: ElementRef<'_>) -> Option<Diagnostic> {
        self.report_with(element, self.message)
    }

    /// A diagnostic with a custom message at the element's start tag.
    ///
    /// Returns `None` when the parser recorded no range for the element.
    pub fn report_with(
        &self,
        element: ElementRef<'_>,
        message: impl Into<String>,
    ) -> Option<Diagnostic> {
        let Some(range) = element.start_tag() else {
            debug!(
                rule = self.key.name,
                tag = element.name(),
                "Element has no start-tag range, skipping diagnostic"
            );
            return None;
        };

        Some(
            Diagnostic::new(self.code, message, range)
                .with_severity(self.severity)
                .with_rule(self.key.name),
        )
    }
}

/// An accessibility rule.
pub trait Rule: Send + Sync {
    fn meta(&self) -> &RuleMeta;

    /// Tag guard. Cheap, and checked before the configuration switch.
    fn applies_to(&self, element: &Element) -> bool;

    /// Rule body. Only called for elements that passed both guards.
    fn check(&self, ctx: &LintContext<'_>, element: ElementRef<'_>) -> Vec<Diagnostic>;

    /// Runs the tag guard, then the configuration switch, then the body.
    fn evaluate(
        &self,
        ctx: &LintContext<'_>,
        element: ElementRef<'_>,
    ) -> Result<Vec<Diagnostic>, ConfigError> {
        if !self.applies_to(element.element()) {
            return Ok(Vec::new());
        }
        if !ctx.config().is_enabled(&self.meta().key)? {
            return Ok(Vec::new());
        }
        Ok(self.check(ctx, element))
    }
}

const PERCEIVABLE: &str = "perceivable";
const OPERABLE: &str = "operable";
const UNDERSTANDABLE: &str = "understandable";
const ROBUST: &str = "robust";
const DEPRECATED: &str = "deprecated";

const LABELLED_INPUTS: [&str; 5] = ["text", "password", "radio", "checkbox", "file"];

const fn error(
    category: &'static str,
    group: &'static str,
    name: &'static str,
    code: &'static str,
) -> RuleMeta {
    RuleMeta::new(RuleKey::new(category, group, name), code, Severity::Error)
}

const fn warning(
    category: &'static str,
    group: &'static str,
    name: &'static str,
    code: &'static str,
) -> RuleMeta {
    RuleMeta::new(RuleKey::new(category, group, name), code, Severity::Warning)
}

/// All built-in rules, in the order they run on each element.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    let mut rules: Vec<Box<dyn Rule>> = Vec::new();

    // perceivable.textAlternatives
    let g = "textAlternatives";
    rules.push(Box::new(RequiredAttribute::present(
        error(PERCEIVABLE, g, "img element missing alt attribute", "1.1.1")
            .with_message("Include an alt attribute on every image"),
        Target::Tag("img"),
        "alt",
    )));
    rules.push(Box::new(LinkedImageAlt::new(error(
        PERCEIVABLE,
        g,
        "Image used as anchor is missing valid Alt text.",
        "1.1.1",
    ))));
    rules.push(Box::new(MisplacedAlt::new(error(
        PERCEIVABLE,
        g,
        "input element has alt attribute",
        "1.1.1",
    ))));
    rules.push(Box::new(TextContent::new(
        error(
            PERCEIVABLE,
            g,
            "Table header tags should have associated text or image with alternative text",
            "1.1.1",
        ),
        Target::Tag("th"),
        ImageContent::WithAlt,
    )));

    // perceivable.adaptable
    let g = "adaptable";
    rules.push(Box::new(LabelAssociation::new(
        error(PERCEIVABLE, g, "button has no text in label.", "1.3.1"),
        Target::Tag("button"),
        LabelCheck::Empty,
    )));
    for (kinds, missing, empty) in [
        (
            &["text"],
            "input element, type of 'text', missing an associated label.",
            "input element, type of 'text', has no text in label.",
        ),
        (
            &["password"],
            "input element, type of 'password', missing an associated label.",
            "input element, type of 'password', has no text in label.",
        ),
        (
            &["radio"],
            "input element, type of 'radio', missing an associated label.",
            "input element, type of 'radio', has no text in label.",
        ),
        (
            &["checkbox"],
            "input element, type of 'checkbox', missing an associated label.",
            "input element, type of 'checkbox', has no text in label.",
        ),
        (
            &["file"],
            "input element, type of 'file', missing an associated label.",
            "input element, type of 'file', has no text in label.",
        ),
    ] {
        let target = Target::Input(kinds);
        rules.push(Box::new(LabelAssociation::new(
            error(PERCEIVABLE, g, missing, "1.3.1"),
            target,
            LabelCheck::Missing,
        )));
        rules.push(Box::new(LabelAssociation::new(
            error(PERCEIVABLE, g, empty, "1.3.1"),
            target,
            LabelCheck::Empty,
        )));
    }
    rules.push(Box::new(LabelAssociation::new(
        error(PERCEIVABLE, g, "Label text is empty for select statement.", "1.3.1"),
        Target::Tag("select"),
        LabelCheck::Empty,
    )));
    rules.push(Box::new(LabelAssociation::new(
        error(PERCEIVABLE, g, "select element missing an associated label.", "1.3.1"),
        Target::Tag("select"),
        LabelCheck::Missing,
    )));
    rules.push(Box::new(LabelAssociation::new(
        error(
            PERCEIVABLE,
            g,
            "Select elements should only have one associated label",
            "1.3.1",
        ),
        Target::Tag("select"),
        LabelCheck::Multiple,
    )));
    rules.push(Box::new(LabelAssociation::new(
        error(PERCEIVABLE, g, "textarea element missing an associated label.", "1.3.1"),
        Target::Tag("textarea"),
        LabelCheck::Missing,
    )));
    rules.push(Box::new(LabelAssociation::new(
        error(
            PERCEIVABLE,
            g,
            "Textarea elements should only have one associated label",
            "1.3.1",
        ),
        Target::Tag("textarea"),
        LabelCheck::Multiple,
    )));
    rules.push(Box::new(RequiredChild::new(
        error(PERCEIVABLE, g, "Include a caption for each table.", "1.3.1"),
        "table",
        "caption",
    )));
    rules.push(Box::new(RadioGrouping::new(error(
        PERCEIVABLE,
        g,
        "Form missing fieldset and legend to group multiple radio buttons",
        "1.3.1",
    ))));

    // perceivable.distinguishable
    let g = "distinguishable";
    rules.push(Box::new(TagUsage::new(
        warning(PERCEIVABLE, g, "b (bold) element used", "1.3.1"),
        "b",
    )));
    rules.push(Box::new(TagUsage::new(
        warning(PERCEIVABLE, g, "i (italic) element used", "1.3.1"),
        "i",
    )));
    rules.push(Box::new(TagUsage::new(
        warning(PERCEIVABLE, g, "font used", "1.4.4"),
        "font",
    )));

    // operable.enoughTime
    let g = "enoughTime";
    rules.push(Box::new(TagUsage::new(
        error(OPERABLE, g, "Marquee element used", "2.2.2"),
        "marquee",
    )));
    rules.push(Box::new(MetaRefresh::new(error(
        OPERABLE,
        g,
        "Meta refresh with a time-out is used",
        "2.2.1",
    ))));

    // operable.keyboardAccessible
    let g = "keyboardAccessible";
    rules.push(Box::new(EventPairing::new(
        error(OPERABLE, g, "onmousedown event missing onkeydown event", "2.1.1"),
        "onmousedown",
        "onkeydown",
    )));
    rules.push(Box::new(EventPairing::new(
        error(
            OPERABLE,
            g,
            "onmouseover event handler missing onfocus event handler",
            "2.1.1",
        ),
        "onmouseover",
        "onfocus",
    )));
    rules.push(Box::new(EventPairing::new(
        error(
            OPERABLE,
            g,
            "script not keyboard accessible - onmouse missing onblur",
            "2.1.1",
        ),
        "onmouseleave",
        "onblur",
    )));
    rules.push(Box::new(EventPairing::new(
        error(
            OPERABLE,
            g,
            "script not keyboard accessible - onmouseout missing onblur",
            "2.1.1",
        ),
        "onmouseout",
        "onblur",
    )));
    rules.push(Box::new(RequiredAttribute::present(
        error(
            OPERABLE,
            g,
            "Video and audio tags should have control attribute for pausing and volume",
            "2.1.1",
        ),
        Target::Tags(&["video", "audio"]),
        "controls",
    )));

    // operable.navigable
    let g = "navigable";
    rules.push(Box::new(TextContent::new(
        error(OPERABLE, g, "Anchor contains no text.", "2.4.4"),
        Target::Tag("a"),
        ImageContent::Any,
    )));
    rules.push(Box::new(TitleCount::new(error(
        OPERABLE,
        g,
        "Document missing title element",
        "2.4.2",
    ))));
    for (level, name) in [
        (1, "Header nesting - header following h1 is incorrect."),
        (2, "Header nesting - header following h2 is incorrect."),
        (3, "Header nesting - header following h3 is incorrect."),
        (4, "Header nesting - header following h4 is incorrect."),
        (5, "Header nesting - header following h5 is incorrect."),
    ] {
        rules.push(Box::new(HeadingOrder::new(
            error(OPERABLE, g, name, "2.4.6"),
            level,
        )));
    }
    rules.push(Box::new(RequiredAttribute::non_blank(
        error(
            OPERABLE,
            g,
            "Include an href attribute to make text a hyperlink",
            "2.4.4",
        ),
        Target::Tag("a"),
        "href",
    )));
    rules.push(Box::new(SingleTopHeading::new(error(
        OPERABLE,
        g,
        "There should only be one <h1> per page",
        "2.4.6",
    ))));
    rules.push(Box::new(TextContent::new(
        error(OPERABLE, g, "title element is empty", "2.4.2"),
        Target::Tag("title"),
        ImageContent::Ignored,
    )));
    rules.push(Box::new(RequiredAttribute::non_blank(
        error(OPERABLE, g, "Give input element a value attribute", "2.4.6"),
        Target::Input(&["submit", "reset", "button"]),
        "value",
    )));
    rules.push(Box::new(TextContent::new(
        error(
            OPERABLE,
            g,
            "Place text content within the <button> element",
            "2.4.6",
        ),
        Target::Tag("button"),
        ImageContent::Any,
    )));
    rules.push(Box::new(TextContent::new(
        error(OPERABLE, g, "Heading contains no text.", "2.4.6"),
        Target::Tags(&["h1", "h2", "h3", "h4", "h5", "h6"]),
        ImageContent::Any,
    )));

    // understandable.inputAssistance
    let g = "inputAssistance";
    rules.push(Box::new(LabelAssociation::new(
        error(
            UNDERSTANDABLE,
            g,
            "input element has more than one associated label",
            "3.3.2",
        ),
        Target::Input(&LABELLED_INPUTS),
        LabelCheck::Multiple,
    )));
    rules.push(Box::new(TextContent::new(
        error(UNDERSTANDABLE, g, "label text is empty", "3.3.2"),
        Target::Tag("label"),
        ImageContent::Ignored,
    )));

    // understandable.readable
    let g = "readable";
    rules.push(Box::new(RequiredAttribute::non_blank(
        error(UNDERSTANDABLE, g, "document language not identified", "3.1.1"),
        Target::Tag("html"),
        "lang",
    )));
    rules.push(Box::new(LanguageCode::new(error(
        UNDERSTANDABLE,
        g,
        "document has invalid language code",
        "3.1.1",
    ))));

    // robust.compatible
    let g = "compatible";
    rules.push(Box::new(DuplicateId::new(error(
        ROBUST,
        g,
        "id attribute is not unique",
        "4.1.1",
    ))));
    rules.push(Box::new(AriaReference::new(error(
        ROBUST,
        g,
        "broken ARIA reference",
        "4.1.2",
    ))));
    rules.push(Box::new(MenuItems::new(error(
        ROBUST,
        g,
        "broken ARIA menu",
        "4.1.2",
    ))));

    // deprecated.semanticAlternatives
    let g = "semanticAlternatives";
    rules.push(Box::new(TagUsage::new(
        warning(DEPRECATED, g, "Consider using the <strong> tag instead of <b>", ""),
        "b",
    )));
    rules.push(Box::new(TagUsage::new(
        warning(DEPRECATED, g, "Consider using the <em> tag instead of <i>", ""),
        "i",
    )));

    // deprecated.obsoleteTags
    let g = "obsoleteTags";
    for (tag, name) in [
        ("acronym", "<acronym> tag is deprecated, use <abbr> tag instead."),
        ("u", "<u> tag is deprecated"),
        ("tt", "<tt> tag is deprecated"),
        ("strike", "<strike> tag is deprecated"),
        ("s", "<s> tag is deprecated"),
        ("plaintext", "<plaintext> tag is deprecated"),
        ("menu", "<menu> tag is deprecated"),
        ("noframes", "<noframes> tag is deprecated"),
        ("isindex", "<isindex> tag is deprecated"),
        ("frameset", "<frameset> tag is deprecated"),
        ("frame", "<frame> tag is deprecated"),
        ("embed", "<embed> tag is deprecated"),
        ("dir", "<dir> tag is deprecated"),
        ("center", "<center> tag is deprecated"),
        ("blink", "<blink> tag is deprecated"),
        ("big", "<big> tag is deprecated"),
        ("basefont", "<basefont> tag is deprecated"),
        ("applet", "<applet> tag is deprecated"),
    ] {
        rules.push(Box::new(TagUsage::new(warning(DEPRECATED, g, name, ""), tag)));
    }

    rules
}

/// Configuration keys of every built-in rule, in declaration order.
pub fn catalog() -> Vec<RuleKey> {
    builtin_rules().iter().map(|rule| rule.meta().key).collect()
}
