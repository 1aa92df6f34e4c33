//! Visit tracking for type-name classification.
//!
//! Classification recurses through union and intersection members. A
//! `VisitGuard` records which types are in progress so a type that reaches
//! itself is reported as a cycle, and it caps nesting depth and total steps
//! for one top-level query.

use rustc_hash::FxHashSet;
use setlint_common::limits;

use crate::types::TypeId;

/// Bounds for one classification query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationLimits {
    /// Nested union/intersection members in progress at once.
    pub max_depth: u32,
    /// Visits attempted, successful or not.
    pub max_steps: u32,
}

impl Default for ClassificationLimits {
    fn default() -> Self {
        ClassificationLimits {
            max_depth: limits::MAX_CLASSIFICATION_DEPTH,
            max_steps: limits::MAX_CLASSIFICATION_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    Entered,
    /// The type is already in progress further up.
    Cycle,
    /// Depth or step budget used up.
    Exhausted,
}

pub(crate) struct VisitGuard {
    in_progress: FxHashSet<TypeId>,
    steps: u32,
    limits: ClassificationLimits,
}

impl VisitGuard {
    pub(crate) fn new(limits: ClassificationLimits) -> Self {
        VisitGuard {
            in_progress: FxHashSet::default(),
            steps: 0,
            limits,
        }
    }

    /// Every `Visit::Entered` must be paired with `leave(type_id)`.
    pub(crate) fn enter(&mut self, type_id: TypeId) -> Visit {
        self.steps = self.steps.saturating_add(1);
        if self.steps > self.limits.max_steps || self.depth() >= self.limits.max_depth {
            return Visit::Exhausted;
        }
        if !self.in_progress.insert(type_id) {
            return Visit::Cycle;
        }
        Visit::Entered
    }

    pub(crate) fn leave(&mut self, type_id: TypeId) {
        self.in_progress.remove(&type_id);
    }

    /// Types currently in progress.
    #[inline]
    pub(crate) fn depth(&self) -> u32 {
        self.in_progress.len() as u32
    }
}

#[cfg(test)]
#[path = "../tests/recursion_tests.rs"]
mod tests;
