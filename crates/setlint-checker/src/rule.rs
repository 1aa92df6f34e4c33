//! Rule definitions and the rule registry.
//!
//! A rule is static data: metadata plus listeners. Each listener is a plain
//! function bound to one `SyntaxKind`; it inspects one node and returns at
//! most one violation.

use crate::parser_services::ParserServices;
use crate::rules::{NO_FOR_OF_SET, NO_SET_SPREAD};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use setlint_common::DiagnosticMessage;
use setlint_parser::{NodeArena, NodeIndex, SyntaxKind};

/// Rule category, as shown to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    /// Code that is likely wrong at runtime.
    Problem,
    Suggestion,
    Layout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RuleMeta {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub description: &'static str,
    /// Setup fails unless the program has full type information.
    pub requires_type_information: bool,
}

/// Node-level state handed to a listener.
#[derive(Clone, Copy, Debug)]
pub struct CheckContext<'a> {
    pub file_name: &'a str,
    pub arena: &'a NodeArena,
    pub services: ParserServices<'a>,
}

/// A reportable finding, anchored at `node`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    pub node: NodeIndex,
    pub message: &'static DiagnosticMessage,
}

impl Violation {
    pub const fn new(node: NodeIndex, message: &'static DiagnosticMessage) -> Self {
        Violation { node, message }
    }
}

pub type CheckFn = fn(&CheckContext<'_>, NodeIndex) -> Option<Violation>;

#[derive(Clone, Copy)]
pub struct RuleListener {
    pub kind: SyntaxKind,
    pub check: CheckFn,
}

pub struct RuleDefinition {
    pub meta: RuleMeta,
    pub listeners: &'static [RuleListener],
}

impl RuleDefinition {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.meta.name
    }
}

/// Rules by name, in registration order.
#[derive(Default)]
pub struct RuleRegistry {
    rules: IndexMap<&'static str, &'static RuleDefinition>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        RuleRegistry::default()
    }

    /// Register a rule, returning the definition it replaced, if any.
    pub fn register(&mut self, rule: &'static RuleDefinition) -> Option<&'static RuleDefinition> {
        self.rules.insert(rule.name(), rule)
    }

    pub fn get(&self, name: &str) -> Option<&'static RuleDefinition> {
        self.rules.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static RuleDefinition> + '_ {
        self.rules.values().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

static BUILTIN_RULES: Lazy<RuleRegistry> = Lazy::new(|| {
    let mut registry = RuleRegistry::new();
    registry.register(&NO_SET_SPREAD);
    registry.register(&NO_FOR_OF_SET);
    registry
});

/// The built-in rules: `no-set-spread` and `no-for-of-set`.
pub fn builtin_rules() -> &'static RuleRegistry {
    &BUILTIN_RULES
}
