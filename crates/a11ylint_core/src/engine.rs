//! Depth-first rule traversal.

use std::ops::ControlFlow;

use a11ylint_ast::visitor::walk_document;
use a11ylint_ast::{ElementRef, VisitResult, Visitor};

use crate::context::LintContext;
use crate::rules::Rule;
use crate::{ConfigError, Diagnostic};

/// Runs every rule on every element of the context's document.
///
/// Elements are visited in pre-order. On each element the rules run in slice
/// order and their results are appended before the walk moves on to the
/// children. The walk keeps no call stack per level, so nesting depth is
/// unbounded. Text and comment nodes are not visited but stay visible to rules
/// through the tree.
///
/// The only failure is a rule whose key is missing from the configuration;
/// the walk stops there.
pub fn traverse(
    ctx: &LintContext<'_>,
    rules: &[Box<dyn Rule>],
) -> Result<Vec<Diagnostic>, ConfigError> {
    let mut runner = RuleRunner {
        ctx,
        rules,
        diagnostics: Vec::new(),
        error: None,
    };
    let _ = walk_document(&mut runner, ctx.document());

    match runner.error {
        Some(err) => Err(err),
        None => Ok(runner.diagnostics),
    }
}

struct RuleRunner<'c, 'a> {
    ctx: &'c LintContext<'a>,
    rules: &'c [Box<dyn Rule>],
    diagnostics: Vec<Diagnostic>,
    error: Option<ConfigError>,
}

impl<'a> Visitor<'a> for RuleRunner<'_, 'a> {
    fn visit_element(&mut self, element: ElementRef<'a>) -> VisitResult {
        for rule in self.rules {
            match rule.evaluate(self.ctx, element) {
                Ok(found) => self.diagnostics.extend(found),
                Err(err) => {
                    self.error = Some(err);
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    }
}
