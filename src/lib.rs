//! setlint: type-aware lint rules that flag `Set<T>` spread and `for ... of`
//! iteration.
//!
//! The workspace is split the same way a type checker is:
//!
//! - [`common`]: interning, diagnostics and limits
//! - [`parser`]: the syntax tree arena and its walker
//! - [`solver`]: the type model and the type-name classifier
//! - [`checker`]: parser services, rules and the linter
//!
//! ```ignore
//! let program: setlint::Program = build_program();
//! let linter = setlint::Linter::new(
//!     &setlint::LintConfig::recommended(),
//!     setlint::builtin_rules(),
//!     program.rule_context(),
//! )?;
//! let diagnostics = linter.lint_to_vec(root);
//! ```

pub use setlint_checker as checker;
pub use setlint_common as common;
pub use setlint_parser as parser;
pub use setlint_solver as solver;

pub mod tracing_config;
pub use tracing_config::init_tracing;

pub use setlint_checker::{
    ConfigError, LintConfig, LintError, Linter, Program, RuleRegistry, RuleSeverity,
    builtin_rules, get_parser_services, is_set_type,
};
pub use setlint_common::{Diagnostic, DiagnosticCategory, DiagnosticSink};
pub use setlint_solver::{CanonicalName, classify_type, is_string_type};
