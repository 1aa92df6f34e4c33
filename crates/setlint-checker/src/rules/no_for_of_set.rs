//! `no-for-of-set`: iterating a `Set<T>` with `for ... of`.

use crate::rule::{CheckContext, RuleDefinition, RuleListener, RuleMeta, RuleType, Violation};
use crate::set_type::is_set_type;
use setlint_common::diagnostics::{diagnostic_codes, get_diagnostic_message};
use setlint_parser::{NodeIndex, SyntaxKind};

pub static NO_FOR_OF_SET: RuleDefinition = RuleDefinition {
    meta: RuleMeta {
        name: "no-for-of-set",
        rule_type: RuleType::Problem,
        description: "Disallow for-of iteration over Set<T> values",
        requires_type_information: true,
    },
    // for-in walks keys, not elements, so only for-of is checked
    listeners: &[RuleListener {
        kind: SyntaxKind::ForOfStatement,
        check: check_for_of,
    }],
};

fn check_for_of(ctx: &CheckContext<'_>, node: NodeIndex) -> Option<Violation> {
    let stmt = ctx.arena.get(node).and_then(|n| ctx.arena.get_for_in_of(n))?;
    if !is_set_type(&ctx.services, stmt.expression) {
        return None;
    }
    let message = get_diagnostic_message(diagnostic_codes::CANT_USE_FOR_OF_TO_ITERATE_OVER_SET)?;
    Some(Violation::new(node, message))
}
