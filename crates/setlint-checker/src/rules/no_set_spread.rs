//! `no-set-spread`: spreading a `Set<T>` (`[...s]`, `f(...s)`, `{ ...s }`).

use crate::rule::{CheckContext, RuleDefinition, RuleListener, RuleMeta, RuleType, Violation};
use crate::set_type::is_set_type;
use setlint_common::diagnostics::{diagnostic_codes, get_diagnostic_message};
use setlint_parser::{NodeIndex, SyntaxKind};

pub static NO_SET_SPREAD: RuleDefinition = RuleDefinition {
    meta: RuleMeta {
        name: "no-set-spread",
        rule_type: RuleType::Problem,
        description: "Disallow the spread operator on Set<T> values",
        requires_type_information: true,
    },
    listeners: &[
        RuleListener {
            kind: SyntaxKind::SpreadElement,
            check: check_spread,
        },
        RuleListener {
            kind: SyntaxKind::SpreadAssignment,
            check: check_spread,
        },
    ],
};

/// Reports at the spread node when its operand is a set.
fn check_spread(ctx: &CheckContext<'_>, node: NodeIndex) -> Option<Violation> {
    let spread = ctx.arena.get(node).and_then(|n| ctx.arena.get_spread(n))?;
    if !is_set_type(&ctx.services, spread.expression) {
        return None;
    }
    let message = get_diagnostic_message(diagnostic_codes::CANT_USE_SPREAD_OPERATOR_WITH_SET)?;
    Some(Violation::new(node, message))
}
