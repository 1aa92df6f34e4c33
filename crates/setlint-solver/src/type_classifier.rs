//! Type-name classification.
//!
//! Maps any type to a canonical name: the privileged `string` category for
//! everything that is effectively a string, or else the checker's display
//! rendering. Rules then match structural families (such as `Set<...>`)
//! against that name.
//!
//! First matching rule wins:
//!
//! 1. String-like flags (string, string literal, template literal, string
//!    mapping) classify as `string`.
//! 2. A type parameter whose first declaration has an `extends` clause
//!    classifies as its constraint. The checker's own constraint resolution
//!    is not consulted.
//! 3. A union classifies as `string` when every member does.
//! 4. An intersection classifies as `string` when any member does.
//! 5. Anything else is the display rendering.
//!
//! ```rust,ignore
//! let name = classify_type(&program, type_id);
//! if name.is_string() { /* ... */ }
//! ```

use crate::db::TypeQueries;
use crate::recursion::{ClassificationLimits, Visit, VisitGuard};
use crate::types::{TypeFlags, TypeId};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, trace};

/// Canonical name of a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CanonicalName {
    /// Effectively a string.
    String,
    /// The checker's display rendering, unmodified.
    Rendered(String),
    /// A constraint cycle or a type nested past the classification limits.
    Unresolvable,
}

impl CanonicalName {
    /// Spelling of the canonical string category.
    pub const STRING_NAME: &'static str = "string";

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, CanonicalName::String)
    }

    #[inline]
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, CanonicalName::Unresolvable)
    }

    /// Textual form used for structural matching; `None` when unresolvable.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CanonicalName::String => Some(Self::STRING_NAME),
            CanonicalName::Rendered(text) => Some(text),
            CanonicalName::Unresolvable => None,
        }
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalName::String => f.write_str(Self::STRING_NAME),
            CanonicalName::Rendered(text) => f.write_str(text),
            CanonicalName::Unresolvable => f.write_str("<unresolvable>"),
        }
    }
}

/// Classifier state for one top-level query.
///
/// Holds only the visit guard; nothing carries over between queries, so the
/// same type and checker always produce the same name.
pub struct TypeNameClassifier<'a> {
    db: &'a dyn TypeQueries,
    guard: VisitGuard,
}

impl<'a> TypeNameClassifier<'a> {
    pub fn new(db: &'a dyn TypeQueries) -> Self {
        Self::with_limits(db, ClassificationLimits::default())
    }

    pub fn with_limits(db: &'a dyn TypeQueries, limits: ClassificationLimits) -> Self {
        TypeNameClassifier {
            db,
            guard: VisitGuard::new(limits),
        }
    }

    /// Classify `type_id`.
    pub fn classify(&mut self, type_id: TypeId) -> CanonicalName {
        match self.guard.enter(type_id) {
            Visit::Entered => {
                let name = self.classify_entered(type_id);
                self.guard.leave(type_id);
                name
            }
            Visit::Cycle => {
                debug!(type_id = type_id.0, "classification cycle");
                CanonicalName::Unresolvable
            }
            Visit::Exhausted => {
                debug!(
                    type_id = type_id.0,
                    depth = self.guard.depth(),
                    "classification limit exceeded"
                );
                CanonicalName::Unresolvable
            }
        }
    }

    fn classify_entered(&mut self, type_id: TypeId) -> CanonicalName {
        let flags = self.db.type_flags(type_id);

        if flags.intersects(TypeFlags::STRING_LIKE) {
            trace!(type_id = type_id.0, "string-like flags");
            return CanonicalName::String;
        }

        if flags.contains(TypeFlags::TYPE_PARAMETER)
            && let Some(constraint) = self.declared_constraint(type_id)
        {
            trace!(
                type_id = type_id.0,
                constraint = constraint.0,
                "following declared constraint"
            );
            return self.classify_constraint_chain(type_id, constraint);
        }

        if flags.contains(TypeFlags::UNION)
            && let Some(members) = self.db.composite_members(type_id)
            && members.iter().all(|&member| self.classify(member).is_string())
        {
            trace!(type_id = type_id.0, "union of strings");
            return CanonicalName::String;
        }

        if flags.contains(TypeFlags::INTERSECTION)
            && let Some(members) = self.db.composite_members(type_id)
            && members.iter().any(|&member| self.classify(member).is_string())
        {
            trace!(type_id = type_id.0, "intersection with a string member");
            return CanonicalName::String;
        }

        let rendered = self.db.type_to_string(type_id);
        trace!(type_id = type_id.0, rendered = %rendered, "display rendering");
        CanonicalName::Rendered(rendered)
    }

    /// Follow `T extends U`, `U extends V`, ... to the first type that is not
    /// a constrained type parameter, then classify that. The chain is walked
    /// in a loop, so its length does not count against the depth limit.
    fn classify_constraint_chain(&mut self, param: TypeId, constraint: TypeId) -> CanonicalName {
        let mut seen = FxHashSet::default();
        seen.insert(param);
        let mut current = constraint;

        loop {
            if !seen.insert(current) {
                debug!(type_id = param.0, "constraint cycle");
                return CanonicalName::Unresolvable;
            }
            let flags = self.db.type_flags(current);
            if flags.intersects(TypeFlags::STRING_LIKE)
                || !flags.contains(TypeFlags::TYPE_PARAMETER)
            {
                break;
            }
            match self.declared_constraint(current) {
                Some(next) => current = next,
                None => break,
            }
        }

        self.classify(current)
    }

    /// Constraint type of the first declaration of a type parameter.
    fn declared_constraint(&self, type_id: TypeId) -> Option<TypeId> {
        let declaration = *self.db.type_parameter_declarations(type_id).first()?;
        let constraint_node = self.db.type_parameter_constraint_node(declaration)?;
        Some(self.db.type_from_type_node(constraint_node))
    }
}

/// Classify a single type with a fresh guard.
pub fn classify_type(db: &dyn TypeQueries, type_id: TypeId) -> CanonicalName {
    TypeNameClassifier::new(db).classify(type_id)
}

/// Whether `type_id` classifies as the canonical string category.
pub fn is_string_type(db: &dyn TypeQueries, type_id: TypeId) -> bool {
    classify_type(db, type_id).is_string()
}

#[cfg(test)]
#[path = "../tests/type_classifier_tests.rs"]
mod tests;
