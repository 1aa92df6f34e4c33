//! Type-aware lint rules over the setlint syntax tree.
//!
//! Rules are registered in a `RuleRegistry`, enabled through a `LintConfig`
//! and run by a `Linter` against one file. Two rules ship built in:
//! `no-set-spread` and `no-for-of-set`.

pub mod config;
pub mod linter;
pub mod parser_services;
pub mod program;
pub mod rule;
mod rules;
pub mod set_type;

pub use config::{LintConfig, RuleSeverity};
pub use linter::{LintError, Linter};
pub use parser_services::{
    ConfigError, PARSER_SERVICES_REQUIRED, ParserServices, RuleContext, get_parser_services,
};
pub use program::Program;
pub use rule::{
    CheckContext, CheckFn, RuleDefinition, RuleListener, RuleMeta, RuleRegistry, RuleType,
    Violation, builtin_rules,
};
pub use rules::{NO_FOR_OF_SET, NO_SET_SPREAD};
pub use set_type::{
    CollectionMatcher, RenderedPrefixMatcher, SET_TYPE_PREFIX, is_collection_type, is_set_type,
};
