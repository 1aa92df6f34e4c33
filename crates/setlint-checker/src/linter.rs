//! Rule setup and traversal.
//!
//! `Linter::new` resolves the enabled rules and obtains parser services for
//! each one, so configuration failures surface before any node is visited.
//! `Linter::lint` walks the tree in pre-order and hands every node to the
//! listeners registered for its kind, in rule registration order.

use crate::config::{LintConfig, RuleSeverity};
use crate::parser_services::{ConfigError, ParserServices, RuleContext, get_parser_services};
use crate::rule::{CheckContext, CheckFn, RuleDefinition, RuleRegistry, Violation};
use rustc_hash::FxHashMap;
use setlint_common::{Diagnostic, DiagnosticCategory, DiagnosticSink};
use setlint_parser::{NodeIndex, walk_preorder};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

/// Failure while setting up a `Linter`.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("{source}")]
    ParserServices {
        rule: &'static str,
        #[source]
        source: ConfigError,
    },
    #[error("unknown rule '{0}'")]
    UnknownRule(String),
}

struct ActiveRule<'a> {
    definition: &'static RuleDefinition,
    category: DiagnosticCategory,
    services: ParserServices<'a>,
}

pub struct Linter<'a> {
    context: RuleContext<'a>,
    rules: Vec<ActiveRule<'a>>,
    /// `SyntaxKind` -> (rule index, listener), in registration order.
    listeners: FxHashMap<u16, SmallVec<[(usize, CheckFn); 2]>>,
}

impl<'a> Linter<'a> {
    pub fn new(
        config: &LintConfig,
        registry: &RuleRegistry,
        context: RuleContext<'a>,
    ) -> Result<Self, LintError> {
        if let Some(unknown) = config.rules.keys().find(|name| !registry.contains(name)) {
            return Err(LintError::UnknownRule(unknown.clone()));
        }

        let mut rules = Vec::new();
        let mut listeners: FxHashMap<u16, SmallVec<[(usize, CheckFn); 2]>> =
            FxHashMap::default();

        for definition in registry.iter() {
            let severity = config.severity(definition.name());
            let Some(category) = severity.category() else {
                continue;
            };

            let services = get_parser_services(
                &context,
                !definition.meta.requires_type_information,
            )
            .map_err(|source| LintError::ParserServices {
                rule: definition.name(),
                source,
            })?;

            let index = rules.len();
            for listener in definition.listeners {
                listeners
                    .entry(listener.kind as u16)
                    .or_default()
                    .push((index, listener.check));
            }
            debug!(rule = definition.name(), severity = severity.as_str(), "rule enabled");
            rules.push(ActiveRule {
                definition,
                category,
                services,
            });
        }

        Ok(Linter {
            context,
            rules,
            listeners,
        })
    }

    /// Names of enabled rules, in registration order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.definition.name())
    }

    /// Severity an enabled rule reports at; `Off` for anything else.
    pub fn severity_of(&self, name: &str) -> RuleSeverity {
        match self
            .rules
            .iter()
            .find(|rule| rule.definition.name() == name)
            .map(|rule| rule.category)
        {
            Some(DiagnosticCategory::Warning) => RuleSeverity::Warn,
            Some(_) => RuleSeverity::Error,
            None => RuleSeverity::Off,
        }
    }

    /// Lint the tree under `root`, reporting into `sink`.
    ///
    /// Returns the number of diagnostics reported.
    #[tracing::instrument(level = "debug", skip_all, fields(file = self.context.file_name))]
    pub fn lint(&self, root: NodeIndex, sink: &mut dyn DiagnosticSink) -> usize {
        let arena = self.context.arena;
        let mut reported = 0usize;

        walk_preorder(arena, root, |idx| {
            let Some(node) = arena.get(idx) else {
                return;
            };
            let Some(listeners) = self.listeners.get(&node.kind) else {
                return;
            };
            for &(rule_index, check) in listeners {
                let Some(rule) = self.rules.get(rule_index) else {
                    continue;
                };
                let ctx = CheckContext {
                    file_name: self.context.file_name,
                    arena,
                    services: rule.services,
                };
                if let Some(violation) = check(&ctx, idx) {
                    sink.report(self.to_diagnostic(rule, violation));
                    reported += 1;
                }
            }
        });

        debug!(reported, "lint finished");
        reported
    }

    /// Lint and collect diagnostics.
    pub fn lint_to_vec(&self, root: NodeIndex) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        self.lint(root, &mut diagnostics);
        diagnostics
    }

    fn to_diagnostic(&self, rule: &ActiveRule<'_>, violation: Violation) -> Diagnostic {
        let (start, length) = self
            .context
            .arena
            .get(violation.node)
            .map(|node| (node.pos, node.width()))
            .unwrap_or((0, 0));
        Diagnostic::from_message(
            self.context.file_name.to_string(),
            start,
            length,
            violation.message,
        )
        .with_category(rule.category)
        .with_rule(rule.definition.name())
    }
}

#[cfg(test)]
#[path = "../tests/linter_tests.rs"]
mod tests;
