//! Lint configuration.
//!
//! ESLint-style rule table:
//!
//! ```json
//! { "rules": { "no-set-spread": "error", "no-for-of-set": ["warn"] } }
//! ```
//!
//! A severity is `"off"`, `"warn"`, `"error"`, the numbers `0`, `1`, `2`, or
//! an array whose first element is one of those (rule options follow and are
//! ignored).

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use setlint_common::DiagnosticCategory;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RuleSeverity {
    #[default]
    Off,
    Warn,
    Error,
}

impl RuleSeverity {
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(RuleSeverity::Off),
            1 => Some(RuleSeverity::Warn),
            2 => Some(RuleSeverity::Error),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" => Some(RuleSeverity::Off),
            "warn" => Some(RuleSeverity::Warn),
            "error" => Some(RuleSeverity::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuleSeverity::Off => "off",
            RuleSeverity::Warn => "warn",
            RuleSeverity::Error => "error",
        }
    }

    #[inline]
    pub fn is_enabled(self) -> bool {
        self != RuleSeverity::Off
    }

    /// Category of diagnostics reported at this severity.
    pub fn category(self) -> Option<DiagnosticCategory> {
        match self {
            RuleSeverity::Off => None,
            RuleSeverity::Warn => Some(DiagnosticCategory::Warning),
            RuleSeverity::Error => Some(DiagnosticCategory::Error),
        }
    }
}

impl<'de> Deserialize<'de> for RuleSeverity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LevelOrName {
            Level(u64),
            Name(String),
            WithOptions(Vec<serde_json::Value>),
        }

        fn from_value<E: Error>(value: &serde_json::Value) -> std::result::Result<RuleSeverity, E> {
            match value {
                serde_json::Value::Number(n) => n
                    .as_u64()
                    .and_then(RuleSeverity::from_level)
                    .ok_or_else(|| E::custom(format!("invalid rule severity: {n}"))),
                serde_json::Value::String(s) => RuleSeverity::from_name(s)
                    .ok_or_else(|| E::custom(format!("invalid rule severity: '{s}'"))),
                other => Err(E::custom(format!("invalid rule severity: {other}"))),
            }
        }

        match LevelOrName::deserialize(deserializer)? {
            LevelOrName::Level(level) => RuleSeverity::from_level(level).ok_or_else(|| {
                D::Error::custom(format!(
                    "invalid rule severity: {level}. Expected 0, 1 or 2"
                ))
            }),
            LevelOrName::Name(name) => RuleSeverity::from_name(&name).ok_or_else(|| {
                D::Error::custom(format!(
                    "invalid rule severity: '{name}'. Expected 'off', 'warn' or 'error'"
                ))
            }),
            LevelOrName::WithOptions(values) => match values.first() {
                Some(first) => from_value(first),
                None => Err(D::Error::custom("empty rule severity array")),
            },
        }
    }
}

impl Serialize for RuleSeverity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: IndexMap<String, RuleSeverity>,
}

impl LintConfig {
    /// Both built-in rules at `error`.
    pub fn recommended() -> Self {
        LintConfig::default()
            .with_rule("no-set-spread", RuleSeverity::Error)
            .with_rule("no-for-of-set", RuleSeverity::Error)
    }

    #[must_use]
    pub fn with_rule(mut self, name: impl Into<String>, severity: RuleSeverity) -> Self {
        self.rules.insert(name.into(), severity);
        self
    }

    /// Configured severity; unlisted rules are off.
    pub fn severity(&self, name: &str) -> RuleSeverity {
        self.rules.get(name).copied().unwrap_or_default()
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("failed to parse lint config JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read lint config: {}", path.display()))?;
        Self::from_json_str(&source)
            .with_context(|| format!("failed to parse lint config: {}", path.display()))
    }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
