//! Diagnostic types and message lookup for the lint rules.
//!
//! Message text is part of the observable contract: editors and test
//! snapshots match on it, so it must not be reworded.

use serde::Serialize;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const CANT_USE_SPREAD_OPERATOR_WITH_SET: u32 = 9001;
    pub const CANT_USE_FOR_OF_TO_ITERATE_OVER_SET: u32 = 9002;
}

pub mod diagnostic_messages {
    pub const CANT_USE_SPREAD_OPERATOR_WITH_SET: &str = "Can't use spread operator with Set<T>";
    pub const CANT_USE_FOR_OF_TO_ITERATE_OVER_SET: &str =
        "Can't use for-of to iterate over Set<T>";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::CANT_USE_SPREAD_OPERATOR_WITH_SET,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CANT_USE_SPREAD_OPERATOR_WITH_SET,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CANT_USE_FOR_OF_TO_ITERATE_OVER_SET,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CANT_USE_FOR_OF_TO_ITERATE_OVER_SET,
    },
];

/// A lint diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    /// Name of the rule that produced this diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(file: String, start: u32, length: u32, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
            rule: None,
        }
    }

    /// Create a diagnostic from a message table entry.
    #[must_use]
    pub fn from_message(file: String, start: u32, length: u32, message: &DiagnosticMessage) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message.message.to_string(),
            category: message.category,
            code: message.code,
            rule: None,
        }
    }

    /// Attach the name of the producing rule.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Override the category (e.g. a rule configured as a warning).
    #[must_use]
    pub fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }

    /// End offset (exclusive) of the diagnostic span.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.length)
    }
}

/// Receiver of emitted diagnostics.
///
/// Sinks must not fail: a diagnostic that cannot be surfaced is dropped by
/// the sink itself.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}
