//! In-memory reference program.
//!
//! Holds one source file's syntax arena, a type interner and the two maps a
//! real type checker would compute: node -> type, and type parameter ->
//! declaring nodes. Programs are assembled through builder methods; there is
//! no source text parser.

use crate::parser_services::{ParserServices, RuleContext};
use rustc_hash::FxHashMap;
use setlint_parser::{NodeArena, NodeIndex, SyntaxKind};
use setlint_solver::{
    DeclarationLookup, IntrinsicKind, TypeChecker, TypeFlags, TypeFormatter, TypeId, TypeInterner,
};
use smallvec::SmallVec;
use std::sync::Arc;

pub struct Program {
    file_name: String,
    arena: NodeArena,
    types: TypeInterner,
    node_types: FxHashMap<NodeIndex, TypeId>,
    type_param_declarations: FxHashMap<TypeId, SmallVec<[NodeIndex; 1]>>,
    full_type_information: Option<bool>,
}

impl Program {
    pub fn new(file_name: impl Into<String>) -> Self {
        Program {
            file_name: file_name.into(),
            arena: NodeArena::new(),
            types: TypeInterner::new(),
            node_types: FxHashMap::default(),
            type_param_declarations: FxHashMap::default(),
            full_type_information: None,
        }
    }

    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    #[inline]
    pub fn types(&self) -> &TypeInterner {
        &self.types
    }

    /// Record the type of an expression or type node.
    pub fn set_node_type(&mut self, node: NodeIndex, type_id: TypeId) {
        self.node_types.insert(node, type_id);
    }

    /// Append a declaration for a type parameter. The first one recorded is
    /// the one classification consults.
    pub fn add_type_parameter_declaration(&mut self, param: TypeId, declaration: NodeIndex) {
        self.type_param_declarations
            .entry(param)
            .or_default()
            .push(declaration);
    }

    /// `None` leaves the decision to consumers (full information assumed).
    pub fn set_full_type_information(&mut self, value: Option<bool>) {
        self.full_type_information = value;
    }

    // =========================================================================
    // Builders spanning arena and types
    // =========================================================================

    /// Identifier expression with a known type.
    pub fn add_typed_identifier(
        &mut self,
        name: &str,
        type_id: TypeId,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let idx = self.arena.add_identifier(name, pos, end);
        self.set_node_type(idx, type_id);
        idx
    }

    /// Type reference node (`Set<number>`, `T`) that resolves to `type_id`.
    pub fn add_type_node(&mut self, name: &str, type_id: TypeId, pos: u32, end: u32) -> NodeIndex {
        let type_name = self.arena.add_identifier(name, pos, end);
        let idx = self.arena.add_type_ref(type_name, None, pos, end);
        self.set_node_type(idx, type_id);
        idx
    }

    /// Declare a fresh type parameter `name extends <constraint>`.
    ///
    /// Returns the parameter's type and its declaration node.
    pub fn declare_type_parameter(
        &mut self,
        name: &str,
        constraint: Option<NodeIndex>,
        pos: u32,
        end: u32,
    ) -> (TypeId, NodeIndex) {
        let param = self.types.type_param(name);
        let ident = self.arena.add_identifier(name, pos, pos + name.len() as u32);
        let decl = self.arena.add_type_parameter(
            ident,
            constraint.unwrap_or(NodeIndex::NONE),
            NodeIndex::NONE,
            pos,
            end,
        );
        self.add_type_parameter_declaration(param, decl);
        (param, decl)
    }

    // =========================================================================
    // Host surfaces
    // =========================================================================

    pub fn parser_services(&self) -> ParserServices<'_> {
        ParserServices::new(self).with_full_type_information(self.full_type_information)
    }

    /// Rule context carrying this program's parser services.
    pub fn rule_context(&self) -> RuleContext<'_> {
        RuleContext::new(&self.file_name, &self.arena).with_parser_services(self.parser_services())
    }

    fn keyword_type(kind: SyntaxKind) -> Option<TypeId> {
        let intrinsic = match kind {
            SyntaxKind::StringKeyword => IntrinsicKind::String,
            SyntaxKind::NumberKeyword => IntrinsicKind::Number,
            SyntaxKind::BooleanKeyword => IntrinsicKind::Boolean,
            SyntaxKind::BigIntKeyword => IntrinsicKind::Bigint,
            SyntaxKind::SymbolKeyword => IntrinsicKind::Symbol,
            SyntaxKind::ObjectKeyword => IntrinsicKind::Object,
            SyntaxKind::AnyKeyword => IntrinsicKind::Any,
            SyntaxKind::UnknownKeyword => IntrinsicKind::Unknown,
            SyntaxKind::NeverKeyword => IntrinsicKind::Never,
            SyntaxKind::VoidKeyword => IntrinsicKind::Void,
            SyntaxKind::UndefinedKeyword => IntrinsicKind::Undefined,
            _ => return None,
        };
        Some(intrinsic.to_type_id())
    }
}

impl TypeChecker for Program {
    fn type_flags(&self, type_id: TypeId) -> TypeFlags {
        self.types.flags(type_id)
    }

    fn composite_members(&self, type_id: TypeId) -> Option<Arc<[TypeId]>> {
        self.types.composite_members(type_id)
    }

    fn type_to_string(&self, type_id: TypeId) -> String {
        TypeFormatter::new(&self.types).format(type_id)
    }

    fn type_of_node(&self, node: NodeIndex) -> TypeId {
        self.node_types.get(&node).copied().unwrap_or(TypeId::ERROR)
    }
}

impl DeclarationLookup for Program {
    fn type_parameter_declarations(&self, type_id: TypeId) -> &[NodeIndex] {
        self.type_param_declarations
            .get(&type_id)
            .map(|decls| decls.as_slice())
            .unwrap_or(&[])
    }

    fn type_parameter_constraint_node(&self, declaration: NodeIndex) -> Option<NodeIndex> {
        self.arena
            .get_type_parameter_at(declaration)
            .and_then(|data| data.constraint.into_option())
    }

    fn type_from_type_node(&self, type_node: NodeIndex) -> TypeId {
        if let Some(&type_id) = self.node_types.get(&type_node) {
            return type_id;
        }
        self.arena
            .kind(type_node)
            .and_then(Self::keyword_type)
            .unwrap_or(TypeId::ERROR)
    }
}

#[cfg(test)]
#[path = "../tests/program_tests.rs"]
mod tests;
