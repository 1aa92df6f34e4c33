//! Common types and utilities for the setlint workspace.
//!
//! This crate provides foundational types used across all setlint crates:
//! - String interning (`Atom`, `Interner`, `SyncInterner`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message table)
//! - Centralized recursion limits

// String interning for identifier and literal deduplication
pub mod interner;
pub use interner::{Atom, Interner, SyncInterner};

// Diagnostics reported by lint rules
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage, DiagnosticSink};

// Centralized limits and thresholds
pub mod limits;
