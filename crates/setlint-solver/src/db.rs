//! Capability traits the classifier needs from its host.
//!
//! A host type system implements `TypeChecker` and `DeclarationLookup`; both
//! are checked once, at rule setup, by obtaining parser services. The blanket
//! `TypeQueries` impl lets the classifier take a single `&dyn TypeQueries`.

use crate::types::{TypeFlags, TypeId};
use setlint_parser::NodeIndex;
use std::sync::Arc;

/// Read-only queries against the type checker.
pub trait TypeChecker {
    /// Category flags of `type_id`.
    fn type_flags(&self, type_id: TypeId) -> TypeFlags;

    /// Members of a union or intersection, `None` for any other type.
    fn composite_members(&self, type_id: TypeId) -> Option<Arc<[TypeId]>>;

    /// Default display rendering of a type (`Set<number>`, `"a" | "b"`).
    fn type_to_string(&self, type_id: TypeId) -> String;

    /// Type of a syntax node. Unmapped nodes yield `TypeId::ERROR`.
    fn type_of_node(&self, node: NodeIndex) -> TypeId;
}

/// Access to the syntax that declared a type.
pub trait DeclarationLookup {
    /// Declaration nodes of a type parameter, in declaration order. Empty for
    /// types without declarations.
    fn type_parameter_declarations(&self, type_id: TypeId) -> &[NodeIndex];

    /// Constraint clause of a type-parameter declaration node, if it is one
    /// and it has an `extends` clause.
    fn type_parameter_constraint_node(&self, declaration: NodeIndex) -> Option<NodeIndex>;

    /// Resolve a type node (a constraint clause) into a type.
    fn type_from_type_node(&self, type_node: NodeIndex) -> TypeId;
}

/// Everything the classifier queries.
pub trait TypeQueries: TypeChecker + DeclarationLookup {}

impl<T: TypeChecker + DeclarationLookup + ?Sized> TypeQueries for T {}
