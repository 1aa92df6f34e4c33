//! Child enumeration and pre-order traversal over a `NodeArena`.

use crate::base::{NodeIndex, NodeList};
use crate::node::NodeArena;
use crate::syntax_kind::SyntaxKind;
use smallvec::SmallVec;

/// Children of a node, in source order.
pub type Children = SmallVec<[NodeIndex; 4]>;

fn push_some(out: &mut Children, idx: NodeIndex) {
    if idx.is_some() {
        out.push(idx);
    }
}

fn push_list(out: &mut Children, list: &NodeList) {
    out.extend(list.nodes.iter().copied().filter(|idx| idx.is_some()));
}

fn push_opt_list(out: &mut Children, list: &Option<NodeList>) {
    if let Some(list) = list {
        push_list(out, list);
    }
}

/// Direct children of `idx` in source order. Unknown or data-less nodes have
/// none.
pub fn child_nodes(arena: &NodeArena, idx: NodeIndex) -> Children {
    let mut out = Children::new();
    let Some(node) = arena.get(idx) else {
        return out;
    };
    let Some(kind) = SyntaxKind::from_u16(node.kind) else {
        return out;
    };

    match kind {
        SyntaxKind::SourceFile => {
            if let Some(data) = arena.get_source_file(node) {
                push_list(&mut out, &data.statements);
            }
        }
        SyntaxKind::ArrayLiteralExpression | SyntaxKind::ObjectLiteralExpression => {
            if let Some(data) = arena.get_literal_expr(node) {
                push_list(&mut out, &data.elements);
            }
        }
        SyntaxKind::PropertyAssignment => {
            if let Some(data) = arena.get_property_assignment(node) {
                push_some(&mut out, data.name);
                push_some(&mut out, data.initializer);
            }
        }
        SyntaxKind::CallExpression | SyntaxKind::NewExpression => {
            if let Some(data) = arena.get_call_expr(node) {
                push_some(&mut out, data.expression);
                push_opt_list(&mut out, &data.type_arguments);
                push_opt_list(&mut out, &data.arguments);
            }
        }
        SyntaxKind::PropertyAccessExpression => {
            if let Some(data) = arena.get_access_expr(node) {
                push_some(&mut out, data.expression);
                push_some(&mut out, data.name);
            }
        }
        SyntaxKind::ParenthesizedExpression => {
            if let Some(data) = arena.get_parenthesized(node) {
                push_some(&mut out, data.expression);
            }
        }
        SyntaxKind::SpreadElement | SyntaxKind::SpreadAssignment => {
            if let Some(data) = arena.get_spread(node) {
                push_some(&mut out, data.expression);
            }
        }
        SyntaxKind::Block => {
            if let Some(data) = arena.get_block(node) {
                push_list(&mut out, &data.statements);
            }
        }
        SyntaxKind::VariableStatement => {
            if let Some(data) = arena.get_variable_statement(node) {
                push_list(&mut out, &data.declarations);
            }
        }
        SyntaxKind::VariableDeclaration => {
            if let Some(data) = arena.get_variable_declaration(node) {
                push_some(&mut out, data.name);
                push_some(&mut out, data.type_annotation);
                push_some(&mut out, data.initializer);
            }
        }
        SyntaxKind::ExpressionStatement | SyntaxKind::ReturnStatement => {
            if let Some(data) = arena.get_expr_statement(node) {
                push_some(&mut out, data.expression);
            }
        }
        SyntaxKind::ForOfStatement | SyntaxKind::ForInStatement => {
            if let Some(data) = arena.get_for_in_of(node) {
                push_some(&mut out, data.initializer);
                push_some(&mut out, data.expression);
                push_some(&mut out, data.statement);
            }
        }
        SyntaxKind::FunctionDeclaration => {
            if let Some(data) = arena.get_function(node) {
                push_some(&mut out, data.name);
                push_opt_list(&mut out, &data.type_parameters);
                push_list(&mut out, &data.parameters);
                push_some(&mut out, data.type_annotation);
                push_some(&mut out, data.body);
            }
        }
        SyntaxKind::Parameter => {
            if let Some(data) = arena.get_parameter(node) {
                push_some(&mut out, data.name);
                push_some(&mut out, data.type_annotation);
                push_some(&mut out, data.initializer);
            }
        }
        SyntaxKind::TypeParameter => {
            if let Some(data) = arena.get_type_parameter(node) {
                push_some(&mut out, data.name);
                push_some(&mut out, data.constraint);
                push_some(&mut out, data.default);
            }
        }
        SyntaxKind::TypeReference => {
            if let Some(data) = arena.get_type_ref(node) {
                push_some(&mut out, data.type_name);
                push_opt_list(&mut out, &data.type_arguments);
            }
        }
        SyntaxKind::UnionType | SyntaxKind::IntersectionType => {
            if let Some(data) = arena.get_composite_type(node) {
                push_list(&mut out, &data.types);
            }
        }
        SyntaxKind::ArrayType => {
            if let Some(data) = arena.get_array_type(node) {
                push_some(&mut out, data.element_type);
            }
        }
        SyntaxKind::LiteralType => {
            if let Some(data) = arena.get_literal_type(node) {
                push_some(&mut out, data.literal);
            }
        }
        _ => {}
    }

    out
}

/// Visit `root` and every descendant in pre-order (parent before children,
/// children in source order).
///
/// Iterative, so deeply nested trees cannot overflow the stack.
pub fn walk_preorder<F>(arena: &NodeArena, root: NodeIndex, mut visit: F)
where
    F: FnMut(NodeIndex),
{
    if arena.get(root).is_none() {
        return;
    }
    let mut stack: Vec<NodeIndex> = vec![root];
    while let Some(idx) = stack.pop() {
        visit(idx);
        let children = child_nodes(arena, idx);
        stack.extend(children.into_iter().rev());
    }
}
