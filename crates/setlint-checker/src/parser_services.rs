//! Parser services: the type-checking capabilities a rule obtains at setup.
//!
//! A rule asks for services once, when it is created. Missing services, or a
//! program without full type information, is a configuration failure raised
//! before any node is visited.

use setlint_parser::NodeArena;
use setlint_solver::TypeQueries;
use std::fmt;
use thiserror::Error;

/// Text of every parser-services configuration failure. Users search for it,
/// so it stays byte-for-byte stable.
pub const PARSER_SERVICES_REQUIRED: &str = "You have used a rule which requires parserServices to be generated. You must therefore provide a value for the \"parserOptions.project\" property for @typescript-eslint/parser.";

/// Rule setup failed because type information is unavailable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The host supplied no parser services (no program).
    #[error("{}", PARSER_SERVICES_REQUIRED)]
    MissingParserServices,
    /// A program exists but reports partial type information.
    #[error("{}", PARSER_SERVICES_REQUIRED)]
    MissingFullTypeInformation,
}

/// Type information handed to rules.
#[derive(Clone, Copy)]
pub struct ParserServices<'a> {
    pub program: &'a dyn TypeQueries,
    /// `None` when the host does not say; treated as `true`.
    pub has_full_type_information: Option<bool>,
}

impl<'a> ParserServices<'a> {
    pub fn new(program: &'a dyn TypeQueries) -> Self {
        ParserServices {
            program,
            has_full_type_information: None,
        }
    }

    #[must_use]
    pub fn with_full_type_information(mut self, value: Option<bool>) -> Self {
        self.has_full_type_information = value;
        self
    }

    /// The checker behind these services.
    #[inline]
    pub fn type_checker(&self) -> &'a dyn TypeQueries {
        self.program
    }

    #[inline]
    pub fn has_full_type_information(&self) -> bool {
        self.has_full_type_information.unwrap_or(true)
    }
}

impl fmt::Debug for ParserServices<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserServices")
            .field("has_full_type_information", &self.has_full_type_information)
            .finish_non_exhaustive()
    }
}

/// What the host passes to each rule when it is created.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub file_name: &'a str,
    pub arena: &'a NodeArena,
    pub parser_services: Option<ParserServices<'a>>,
}

impl<'a> RuleContext<'a> {
    /// A context without parser services.
    pub fn new(file_name: &'a str, arena: &'a NodeArena) -> Self {
        RuleContext {
            file_name,
            arena,
            parser_services: None,
        }
    }

    #[must_use]
    pub fn with_parser_services(mut self, services: ParserServices<'a>) -> Self {
        self.parser_services = Some(services);
        self
    }
}

/// Obtain parser services for a rule.
///
/// Fails when the context has no services, or when the program lacks full
/// type information and `allow_without_full_type_information` is false.
pub fn get_parser_services<'a>(
    context: &RuleContext<'a>,
    allow_without_full_type_information: bool,
) -> Result<ParserServices<'a>, ConfigError> {
    let services = context
        .parser_services
        .ok_or(ConfigError::MissingParserServices)?;

    if !services.has_full_type_information() && !allow_without_full_type_information {
        return Err(ConfigError::MissingFullTypeInformation);
    }

    Ok(services)
}

#[cfg(test)]
#[path = "../tests/parser_services_tests.rs"]
mod tests;
