//! NodeArena creation and access methods.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    /// Kind of the node at `idx`, if it exists.
    #[inline]
    pub fn kind(&self, idx: NodeIndex) -> Option<SyntaxKind> {
        self.get(idx).and_then(|node| SyntaxKind::from_u16(node.kind))
    }

    #[inline]
    pub fn is_kind(&self, idx: NodeIndex, kind: SyntaxKind) -> bool {
        self.get(idx).is_some_and(|node| node.kind == kind as u16)
    }

    /// Parent of the node at `idx` (`NodeIndex::NONE` for the root).
    #[inline]
    pub fn parent(&self, idx: NodeIndex) -> NodeIndex {
        if idx.is_none() {
            return NodeIndex::NONE;
        }
        self.parents
            .get(idx.0 as usize)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }

    /// Resolve an identifier node's text.
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        let node = self.get(idx)?;
        self.get_identifier(node).map(|data| data.escaped_text.as_str())
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_none() {
            return;
        }
        if let Some(slot) = self.parents.get_mut(child.0 as usize) {
            *slot = parent;
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn set_parent_opt_list(&mut self, list: &Option<NodeList>, parent: NodeIndex) {
        if let Some(l) = list {
            self.set_parent_list(l, parent);
        }
    }

    fn push_node(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        self.parents.push(NodeIndex::NONE);
        idx
    }

    fn push_data<T>(pool: &mut Vec<T>, data: T) -> u32 {
        let index = pool.len() as u32;
        pool.push(data);
        index
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a node that carries no data (keyword types, `true`, `null`).
    pub fn add_token(&mut self, kind: SyntaxKind, pos: u32, end: u32) -> NodeIndex {
        self.push_node(Node::new(kind as u16, pos, end))
    }

    pub fn add_source_file(
        &mut self,
        file_name: impl Into<String>,
        statements: Vec<NodeIndex>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let statements = NodeList::new(statements);
        let data = Self::push_data(
            &mut self.source_files,
            SourceFileData {
                file_name: file_name.into(),
                statements: statements.clone(),
            },
        );
        let idx = self.push_node(Node::with_data(
            SyntaxKind::SourceFile as u16,
            pos,
            end,
            data,
        ));
        self.set_parent_list(&statements, idx);
        idx
    }

    pub fn add_identifier(&mut self, text: impl Into<String>, pos: u32, end: u32) -> NodeIndex {
        let data = Self::push_data(
            &mut self.identifiers,
            IdentifierData {
                escaped_text: text.into(),
            },
        );
        self.push_node(Node::with_data(
            SyntaxKind::Identifier as u16,
            pos,
            end,
            data,
        ))
    }

    /// Add a string or numeric literal.
    pub fn add_literal(
        &mut self,
        kind: SyntaxKind,
        text: impl Into<String>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral
        ));
        let data = Self::push_data(&mut self.literals, LiteralData { text: text.into() });
        self.push_node(Node::with_data(kind as u16, pos, end, data))
    }

    /// Add an array or object literal expression.
    pub fn add_literal_expr(
        &mut self,
        kind: SyntaxKind,
        elements: Vec<NodeIndex>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::ArrayLiteralExpression | SyntaxKind::ObjectLiteralExpression
        ));
        let elements = NodeList::new(elements);
        let data = Self::push_data(
            &mut self.literal_exprs,
            LiteralExprData {
                elements: elements.clone(),
            },
        );
        let idx = self.push_node(Node::with_data(kind as u16, pos, end, data));
        self.set_parent_list(&elements, idx);
        idx
    }

    pub fn add_property_assignment(
        &mut self,
        name: NodeIndex,
        initializer: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data = Self::push_data(
            &mut self.property_assignments,
            PropertyAssignmentData { name, initializer },
        );
        let idx = self.push_node(Node::with_data(
            SyntaxKind::PropertyAssignment as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(name, idx);
        self.set_parent(initializer, idx);
        idx
    }

    /// Add a call or `new` expression.
    pub fn add_call_expr(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        type_arguments: Option<Vec<NodeIndex>>,
        arguments: Option<Vec<NodeIndex>>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::CallExpression | SyntaxKind::NewExpression
        ));
        let type_arguments = type_arguments.map(NodeList::new);
        let arguments = arguments.map(NodeList::new);
        let data = Self::push_data(
            &mut self.call_exprs,
            CallExprData {
                expression,
                type_arguments: type_arguments.clone(),
                arguments: arguments.clone(),
            },
        );
        let idx = self.push_node(Node::with_data(kind as u16, pos, end, data));
        self.set_parent(expression, idx);
        self.set_parent_opt_list(&type_arguments, idx);
        self.set_parent_opt_list(&arguments, idx);
        idx
    }

    pub fn add_property_access(
        &mut self,
        expression: NodeIndex,
        name: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data = Self::push_data(&mut self.access_exprs, AccessExprData { expression, name });
        let idx = self.push_node(Node::with_data(
            SyntaxKind::PropertyAccessExpression as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(expression, idx);
        self.set_parent(name, idx);
        idx
    }

    pub fn add_parenthesized(&mut self, expression: NodeIndex, pos: u32, end: u32) -> NodeIndex {
        let data = Self::push_data(&mut self.parenthesized, ParenthesizedData { expression });
        let idx = self.push_node(Node::with_data(
            SyntaxKind::ParenthesizedExpression as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(expression, idx);
        idx
    }

    /// Add a spread element (`SpreadElement`) or object spread (`SpreadAssignment`).
    pub fn add_spread(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::SpreadElement | SyntaxKind::SpreadAssignment
        ));
        let data = Self::push_data(&mut self.spread_data, SpreadData { expression });
        let idx = self.push_node(Node::with_data(kind as u16, pos, end, data));
        self.set_parent(expression, idx);
        idx
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>, pos: u32, end: u32) -> NodeIndex {
        let statements = NodeList::new(statements);
        let data = Self::push_data(
            &mut self.blocks,
            BlockData {
                statements: statements.clone(),
            },
        );
        let idx = self.push_node(Node::with_data(
            SyntaxKind::Block as u16,
            pos,
            end,
            data,
        ));
        self.set_parent_list(&statements, idx);
        idx
    }

    pub fn add_variable_statement(
        &mut self,
        declarations: Vec<NodeIndex>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let declarations = NodeList::new(declarations);
        let data = Self::push_data(
            &mut self.variable_statements,
            VariableStatementData {
                declarations: declarations.clone(),
            },
        );
        let idx = self.push_node(Node::with_data(
            SyntaxKind::VariableStatement as u16,
            pos,
            end,
            data,
        ));
        self.set_parent_list(&declarations, idx);
        idx
    }

    pub fn add_variable_declaration(
        &mut self,
        name: NodeIndex,
        type_annotation: NodeIndex,
        initializer: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data = Self::push_data(
            &mut self.variable_declarations,
            VariableDeclarationData {
                name,
                type_annotation,
                initializer,
            },
        );
        let idx = self.push_node(Node::with_data(
            SyntaxKind::VariableDeclaration as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(name, idx);
        self.set_parent(type_annotation, idx);
        self.set_parent(initializer, idx);
        idx
    }

    /// Add an expression statement or a return statement.
    pub fn add_expr_statement(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::ExpressionStatement | SyntaxKind::ReturnStatement
        ));
        let data = Self::push_data(&mut self.expr_statements, ExprStatementData { expression });
        let idx = self.push_node(Node::with_data(kind as u16, pos, end, data));
        self.set_parent(expression, idx);
        idx
    }

    /// Add a `for ... of` or `for ... in` statement.
    pub fn add_for_in_of(
        &mut self,
        kind: SyntaxKind,
        await_modifier: bool,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::ForOfStatement | SyntaxKind::ForInStatement
        ));
        let data = Self::push_data(
            &mut self.for_in_of,
            ForInOfData {
                await_modifier,
                initializer,
                expression,
                statement,
            },
        );
        let idx = self.push_node(Node::with_data(kind as u16, pos, end, data));
        self.set_parent(initializer, idx);
        self.set_parent(expression, idx);
        self.set_parent(statement, idx);
        idx
    }

    pub fn add_function(
        &mut self,
        name: NodeIndex,
        type_parameters: Option<Vec<NodeIndex>>,
        parameters: Vec<NodeIndex>,
        type_annotation: NodeIndex,
        body: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let type_parameters = type_parameters.map(NodeList::new);
        let parameters = NodeList::new(parameters);
        let data = Self::push_data(
            &mut self.functions,
            FunctionData {
                name,
                type_parameters: type_parameters.clone(),
                parameters: parameters.clone(),
                type_annotation,
                body,
            },
        );
        let idx = self.push_node(Node::with_data(
            SyntaxKind::FunctionDeclaration as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(name, idx);
        self.set_parent_opt_list(&type_parameters, idx);
        self.set_parent_list(&parameters, idx);
        self.set_parent(type_annotation, idx);
        self.set_parent(body, idx);
        idx
    }

    pub fn add_parameter(
        &mut self,
        name: NodeIndex,
        type_annotation: NodeIndex,
        initializer: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data = Self::push_data(
            &mut self.parameters,
            ParameterData {
                name,
                type_annotation,
                initializer,
            },
        );
        let idx = self.push_node(Node::with_data(
            SyntaxKind::Parameter as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(name, idx);
        self.set_parent(type_annotation, idx);
        self.set_parent(initializer, idx);
        idx
    }

    pub fn add_type_parameter(
        &mut self,
        name: NodeIndex,
        constraint: NodeIndex,
        default: NodeIndex,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let data = Self::push_data(
            &mut self.type_parameters,
            TypeParameterData {
                name,
                constraint,
                default,
            },
        );
        let idx = self.push_node(Node::with_data(
            SyntaxKind::TypeParameter as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(name, idx);
        self.set_parent(constraint, idx);
        self.set_parent(default, idx);
        idx
    }

    pub fn add_type_ref(
        &mut self,
        type_name: NodeIndex,
        type_arguments: Option<Vec<NodeIndex>>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        let type_arguments = type_arguments.map(NodeList::new);
        let data = Self::push_data(
            &mut self.type_refs,
            TypeRefData {
                type_name,
                type_arguments: type_arguments.clone(),
            },
        );
        let idx = self.push_node(Node::with_data(
            SyntaxKind::TypeReference as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(type_name, idx);
        self.set_parent_opt_list(&type_arguments, idx);
        idx
    }

    /// Add a union or intersection type node.
    pub fn add_composite_type(
        &mut self,
        kind: SyntaxKind,
        types: Vec<NodeIndex>,
        pos: u32,
        end: u32,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::UnionType | SyntaxKind::IntersectionType
        ));
        let types = NodeList::new(types);
        let data = Self::push_data(
            &mut self.composite_types,
            CompositeTypeData {
                types: types.clone(),
            },
        );
        let idx = self.push_node(Node::with_data(kind as u16, pos, end, data));
        self.set_parent_list(&types, idx);
        idx
    }

    pub fn add_array_type(&mut self, element_type: NodeIndex, pos: u32, end: u32) -> NodeIndex {
        let data = Self::push_data(&mut self.array_types, ArrayTypeData { element_type });
        let idx = self.push_node(Node::with_data(
            SyntaxKind::ArrayType as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(element_type, idx);
        idx
    }

    pub fn add_literal_type(&mut self, literal: NodeIndex, pos: u32, end: u32) -> NodeIndex {
        let data = Self::push_data(&mut self.literal_types, LiteralTypeData { literal });
        let idx = self.push_node(Node::with_data(
            SyntaxKind::LiteralType as u16,
            pos,
            end,
            data,
        ));
        self.set_parent(literal, idx);
        idx
    }

    // ============================================================================
    // Typed Accessors
    // ============================================================================

    #[inline]
    fn pool_get<'a, T>(pool: &'a [T], node: &Node, kinds: &[SyntaxKind]) -> Option<&'a T> {
        if !node.has_data() || !kinds.iter().any(|&k| k as u16 == node.kind) {
            return None;
        }
        pool.get(node.data_index as usize)
    }

    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        Self::pool_get(&self.source_files, node, &[SyntaxKind::SourceFile])
    }

    /// Source file data for a root index.
    pub fn get_source_file_at(&self, idx: NodeIndex) -> Option<&SourceFileData> {
        self.get(idx).and_then(|node| self.get_source_file(node))
    }

    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        Self::pool_get(&self.identifiers, node, &[SyntaxKind::Identifier])
    }

    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        Self::pool_get(
            &self.literals,
            node,
            &[SyntaxKind::StringLiteral, SyntaxKind::NumericLiteral],
        )
    }

    pub fn get_literal_expr(&self, node: &Node) -> Option<&LiteralExprData> {
        Self::pool_get(
            &self.literal_exprs,
            node,
            &[
                SyntaxKind::ArrayLiteralExpression,
                SyntaxKind::ObjectLiteralExpression,
            ],
        )
    }

    pub fn get_property_assignment(&self, node: &Node) -> Option<&PropertyAssignmentData> {
        Self::pool_get(
            &self.property_assignments,
            node,
            &[SyntaxKind::PropertyAssignment],
        )
    }

    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        Self::pool_get(
            &self.call_exprs,
            node,
            &[SyntaxKind::CallExpression, SyntaxKind::NewExpression],
        )
    }

    pub fn get_access_expr(&self, node: &Node) -> Option<&AccessExprData> {
        Self::pool_get(
            &self.access_exprs,
            node,
            &[SyntaxKind::PropertyAccessExpression],
        )
    }

    pub fn get_parenthesized(&self, node: &Node) -> Option<&ParenthesizedData> {
        Self::pool_get(
            &self.parenthesized,
            node,
            &[SyntaxKind::ParenthesizedExpression],
        )
    }

    pub fn get_spread(&self, node: &Node) -> Option<&SpreadData> {
        Self::pool_get(
            &self.spread_data,
            node,
            &[SyntaxKind::SpreadElement, SyntaxKind::SpreadAssignment],
        )
    }

    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        Self::pool_get(&self.blocks, node, &[SyntaxKind::Block])
    }

    pub fn get_variable_statement(&self, node: &Node) -> Option<&VariableStatementData> {
        Self::pool_get(
            &self.variable_statements,
            node,
            &[SyntaxKind::VariableStatement],
        )
    }

    pub fn get_variable_declaration(&self, node: &Node) -> Option<&VariableDeclarationData> {
        Self::pool_get(
            &self.variable_declarations,
            node,
            &[SyntaxKind::VariableDeclaration],
        )
    }

    pub fn get_expr_statement(&self, node: &Node) -> Option<&ExprStatementData> {
        Self::pool_get(
            &self.expr_statements,
            node,
            &[SyntaxKind::ExpressionStatement, SyntaxKind::ReturnStatement],
        )
    }

    pub fn get_for_in_of(&self, node: &Node) -> Option<&ForInOfData> {
        Self::pool_get(
            &self.for_in_of,
            node,
            &[SyntaxKind::ForOfStatement, SyntaxKind::ForInStatement],
        )
    }

    pub fn get_function(&self, node: &Node) -> Option<&FunctionData> {
        Self::pool_get(&self.functions, node, &[SyntaxKind::FunctionDeclaration])
    }

    pub fn get_parameter(&self, node: &Node) -> Option<&ParameterData> {
        Self::pool_get(&self.parameters, node, &[SyntaxKind::Parameter])
    }

    pub fn get_type_parameter(&self, node: &Node) -> Option<&TypeParameterData> {
        Self::pool_get(&self.type_parameters, node, &[SyntaxKind::TypeParameter])
    }

    /// Type parameter data for a node index, `None` unless it is a type
    /// parameter declaration.
    pub fn get_type_parameter_at(&self, idx: NodeIndex) -> Option<&TypeParameterData> {
        self.get(idx).and_then(|node| self.get_type_parameter(node))
    }

    pub fn get_type_ref(&self, node: &Node) -> Option<&TypeRefData> {
        Self::pool_get(&self.type_refs, node, &[SyntaxKind::TypeReference])
    }

    pub fn get_composite_type(&self, node: &Node) -> Option<&CompositeTypeData> {
        Self::pool_get(
            &self.composite_types,
            node,
            &[SyntaxKind::UnionType, SyntaxKind::IntersectionType],
        )
    }

    pub fn get_array_type(&self, node: &Node) -> Option<&ArrayTypeData> {
        Self::pool_get(&self.array_types, node, &[SyntaxKind::ArrayType])
    }

    pub fn get_literal_type(&self, node: &Node) -> Option<&LiteralTypeData> {
        Self::pool_get(&self.literal_types, node, &[SyntaxKind::LiteralType])
    }
}
