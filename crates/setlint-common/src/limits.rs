//! Centralized limits and thresholds.
//!
//! Classification recurses through union and intersection members. These
//! limits bound that recursion; the solver wraps them in
//! `ClassificationLimits`.

/// Maximum nesting depth for type-name classification.
///
/// Depth grows by one for every nested union or intersection member.
/// Type-parameter constraint chains are followed in a loop and do not count,
/// so `A extends B, B extends C, ...` resolves at any length.
pub const MAX_CLASSIFICATION_DEPTH: u32 = 100;

/// Maximum number of classification steps for a single query.
///
/// Bounds total work on very wide unions (e.g. generated string-literal
/// unions with thousands of members).
pub const MAX_CLASSIFICATION_ITERATIONS: u32 = 100_000;
