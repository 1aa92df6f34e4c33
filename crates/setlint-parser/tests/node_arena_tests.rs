//! Tests for arena construction, parent links and traversal order.

use setlint_parser::{NodeArena, NodeIndex, SyntaxKind, child_nodes, walk_preorder};

/// `const xs = [...s]; for (const x of s) {}`
fn spread_and_loop() -> (NodeArena, NodeIndex, NodeIndex, NodeIndex) {
    let mut arena = NodeArena::new();
    let s1 = arena.add_identifier("s", 15, 16);
    let spread = arena.add_spread(SyntaxKind::SpreadElement, s1, 12, 16);
    let array = arena.add_literal_expr(SyntaxKind::ArrayLiteralExpression, vec![spread], 11, 17);
    let xs = arena.add_identifier("xs", 6, 8);
    let decl = arena.add_variable_declaration(xs, NodeIndex::NONE, array, 6, 17);
    let stmt = arena.add_variable_statement(vec![decl], 0, 18);

    let x = arena.add_identifier("x", 30, 31);
    let x_decl = arena.add_variable_declaration(x, NodeIndex::NONE, NodeIndex::NONE, 30, 31);
    let x_list = arena.add_variable_statement(vec![x_decl], 24, 31);
    let s2 = arena.add_identifier("s", 35, 36);
    let body = arena.add_block(vec![], 38, 40);
    let for_of =
        arena.add_for_in_of(SyntaxKind::ForOfStatement, false, x_list, s2, body, 19, 40);

    let root = arena.add_source_file("a.ts", vec![stmt, for_of], 0, 40);
    (arena, root, spread, for_of)
}

#[test]
fn test_builders_record_kinds_and_spans() {
    let (arena, root, spread, for_of) = spread_and_loop();

    assert_eq!(arena.kind(root), Some(SyntaxKind::SourceFile));
    assert_eq!(arena.kind(spread), Some(SyntaxKind::SpreadElement));
    assert!(arena.is_kind(for_of, SyntaxKind::ForOfStatement));

    let node = arena.get(spread).expect("spread exists");
    assert_eq!((node.pos, node.end, node.width()), (12, 16, 4));
    assert_eq!(
        arena
            .get_source_file_at(root)
            .map(|sf| sf.file_name.as_str()),
        Some("a.ts")
    );
}

#[test]
fn test_parents_are_linked() {
    let (arena, root, spread, for_of) = spread_and_loop();

    assert!(arena.parent(root).is_none());
    assert_eq!(arena.parent(for_of), root);
    assert_eq!(
        arena.kind(arena.parent(spread)),
        Some(SyntaxKind::ArrayLiteralExpression)
    );

    let node = arena.get(for_of).expect("for-of exists");
    let data = arena.get_for_in_of(node).expect("for-of data");
    assert_eq!(arena.parent(data.expression), for_of);
    assert_eq!(arena.identifier_text(data.expression), Some("s"));
}

#[test]
fn test_typed_accessors_check_kind() {
    let (arena, _, spread, for_of) = spread_and_loop();
    let spread_node = arena.get(spread).expect("spread exists");
    let loop_node = arena.get(for_of).expect("for-of exists");

    assert!(arena.get_spread(spread_node).is_some());
    assert!(arena.get_for_in_of(spread_node).is_none());
    assert!(arena.get_spread(loop_node).is_none());
    assert!(arena.get(NodeIndex::NONE).is_none());
    assert!(arena.get(NodeIndex(10_000)).is_none());
}

#[test]
fn test_child_nodes_in_source_order() {
    let (arena, _, _, for_of) = spread_and_loop();
    let kinds: Vec<_> = child_nodes(&arena, for_of)
        .into_iter()
        .filter_map(|idx| arena.kind(idx))
        .collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::VariableStatement,
            SyntaxKind::Identifier,
            SyntaxKind::Block
        ]
    );
}

#[test]
fn test_child_nodes_skip_absent_optionals() {
    let mut arena = NodeArena::new();
    let name = arena.add_identifier("T", 0, 1);
    let param = arena.add_type_parameter(name, NodeIndex::NONE, NodeIndex::NONE, 0, 1);
    assert_eq!(child_nodes(&arena, param).as_slice(), &[name]);
    assert!(child_nodes(&arena, name).is_empty());
}

#[test]
fn test_walk_preorder_visits_parent_first() {
    let (arena, root, _, _) = spread_and_loop();
    let mut visited = Vec::new();
    walk_preorder(&arena, root, |idx| visited.push(arena.kind(idx)));

    let kinds: Vec<SyntaxKind> = visited.into_iter().flatten().collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::SourceFile,
            SyntaxKind::VariableStatement,
            SyntaxKind::VariableDeclaration,
            SyntaxKind::Identifier,
            SyntaxKind::ArrayLiteralExpression,
            SyntaxKind::SpreadElement,
            SyntaxKind::Identifier,
            SyntaxKind::ForOfStatement,
            SyntaxKind::VariableStatement,
            SyntaxKind::VariableDeclaration,
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
            SyntaxKind::Block,
        ]
    );
}

#[test]
fn test_walk_preorder_handles_deep_nesting() {
    let mut arena = NodeArena::new();
    let mut inner = arena.add_identifier("s", 0, 1);
    for _ in 0..50_000 {
        inner = arena.add_parenthesized(inner, 0, 1);
    }
    let mut count = 0usize;
    walk_preorder(&arena, inner, |_| count += 1);
    assert_eq!(count, 50_001);
}

#[test]
fn test_walk_preorder_ignores_missing_root() {
    let arena = NodeArena::new();
    let mut count = 0;
    walk_preorder(&arena, NodeIndex::NONE, |_| count += 1);
    assert_eq!(count, 0);
}

/// `function f<T extends string | number>(xs: ("a" | 1)[] = cfg.xs, o: A & B) { return { k: [...xs] }; }`
fn function_declaration() -> (NodeArena, NodeIndex) {
    let mut arena = NodeArena::new();
    let f = arena.add_identifier("f", 9, 10);

    let t = arena.add_identifier("T", 11, 12);
    let string = arena.add_token(SyntaxKind::StringKeyword, 21, 27);
    let number = arena.add_token(SyntaxKind::NumberKeyword, 30, 36);
    let bound = arena.add_composite_type(SyntaxKind::UnionType, vec![string, number], 21, 36);
    let type_param = arena.add_type_parameter(t, bound, NodeIndex::NONE, 11, 36);

    let xs = arena.add_identifier("xs", 38, 40);
    let a = arena.add_literal(SyntaxKind::StringLiteral, "a", 43, 46);
    let a_type = arena.add_literal_type(a, 43, 46);
    let one = arena.add_literal(SyntaxKind::NumericLiteral, "1", 49, 50);
    let one_type = arena.add_literal_type(one, 49, 50);
    let members = arena.add_composite_type(SyntaxKind::UnionType, vec![a_type, one_type], 43, 50);
    let array_type = arena.add_array_type(members, 42, 53);
    let cfg = arena.add_identifier("cfg", 56, 59);
    let cfg_xs = arena.add_identifier("xs", 60, 62);
    let default = arena.add_property_access(cfg, cfg_xs, 56, 62);
    let xs_param = arena.add_parameter(xs, array_type, default, 38, 62);

    let o = arena.add_identifier("o", 64, 65);
    let a_name = arena.add_identifier("A", 67, 68);
    let a_ref = arena.add_type_ref(a_name, None, 67, 68);
    let b_name = arena.add_identifier("B", 71, 72);
    let b_ref = arena.add_type_ref(b_name, None, 71, 72);
    let both = arena.add_composite_type(SyntaxKind::IntersectionType, vec![a_ref, b_ref], 67, 72);
    let o_param = arena.add_parameter(o, both, NodeIndex::NONE, 64, 72);

    let k = arena.add_identifier("k", 85, 86);
    let operand = arena.add_identifier("xs", 92, 94);
    let spread = arena.add_spread(SyntaxKind::SpreadElement, operand, 89, 94);
    let array = arena.add_literal_expr(SyntaxKind::ArrayLiteralExpression, vec![spread], 88, 95);
    let property = arena.add_property_assignment(k, array, 85, 95);
    let object =
        arena.add_literal_expr(SyntaxKind::ObjectLiteralExpression, vec![property], 83, 97);
    let ret = arena.add_expr_statement(SyntaxKind::ReturnStatement, object, 76, 98);
    let body = arena.add_block(vec![ret], 74, 100);

    let function = arena.add_function(
        f,
        Some(vec![type_param]),
        vec![xs_param, o_param],
        NodeIndex::NONE,
        body,
        0,
        100,
    );
    (arena, function)
}

#[test]
fn test_walk_preorder_descends_through_declarations_and_type_nodes() {
    let (arena, function) = function_declaration();
    let mut kinds = Vec::new();
    walk_preorder(&arena, function, |idx| kinds.extend(arena.kind(idx)));

    assert_eq!(
        kinds,
        [
            SyntaxKind::FunctionDeclaration,
            SyntaxKind::Identifier,
            SyntaxKind::TypeParameter,
            SyntaxKind::Identifier,
            SyntaxKind::UnionType,
            SyntaxKind::StringKeyword,
            SyntaxKind::NumberKeyword,
            SyntaxKind::Parameter,
            SyntaxKind::Identifier,
            SyntaxKind::ArrayType,
            SyntaxKind::UnionType,
            SyntaxKind::LiteralType,
            SyntaxKind::StringLiteral,
            SyntaxKind::LiteralType,
            SyntaxKind::NumericLiteral,
            SyntaxKind::PropertyAccessExpression,
            SyntaxKind::Identifier,
            SyntaxKind::Identifier,
            SyntaxKind::Parameter,
            SyntaxKind::Identifier,
            SyntaxKind::IntersectionType,
            SyntaxKind::TypeReference,
            SyntaxKind::Identifier,
            SyntaxKind::TypeReference,
            SyntaxKind::Identifier,
            SyntaxKind::Block,
            SyntaxKind::ReturnStatement,
            SyntaxKind::ObjectLiteralExpression,
            SyntaxKind::PropertyAssignment,
            SyntaxKind::Identifier,
            SyntaxKind::ArrayLiteralExpression,
            SyntaxKind::SpreadElement,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_declaration_builders_link_parents_and_data() {
    let (arena, function) = function_declaration();
    let node = arena.get(function).expect("function exists");
    let data = arena.get_function(node).expect("function data");
    assert_eq!(arena.identifier_text(data.name), Some("f"));
    assert!(data.type_annotation.is_none());
    assert_eq!(data.parameters.nodes.len(), 2);

    let xs_param = data.parameters.nodes[0];
    assert_eq!(arena.parent(xs_param), function);
    let param = arena
        .get(xs_param)
        .and_then(|n| arena.get_parameter(n))
        .expect("parameter data");
    assert_eq!(arena.identifier_text(param.name), Some("xs"));
    assert_eq!(arena.parent(param.initializer), xs_param);

    let array_type = arena
        .get(param.type_annotation)
        .and_then(|n| arena.get_array_type(n))
        .expect("array type data");
    let union = arena
        .get(array_type.element_type)
        .and_then(|n| arena.get_composite_type(n))
        .expect("union data");
    let literal_type = union.types.nodes[0];
    assert_eq!(arena.parent(literal_type), array_type.element_type);
    let literal = arena
        .get(literal_type)
        .and_then(|n| arena.get_literal_type(n))
        .and_then(|lt| arena.get(lt.literal))
        .and_then(|n| arena.get_literal(n))
        .expect("literal data");
    assert_eq!(literal.text, "a");

    let access = arena
        .get(param.initializer)
        .and_then(|n| arena.get_access_expr(n))
        .expect("property access data");
    assert_eq!(arena.identifier_text(access.expression), Some("cfg"));
    assert_eq!(arena.identifier_text(access.name), Some("xs"));
}

#[test]
fn test_property_assignment_children_are_name_then_value() {
    let (arena, function) = function_declaration();
    let mut assignment = NodeIndex::NONE;
    walk_preorder(&arena, function, |idx| {
        if arena.is_kind(idx, SyntaxKind::PropertyAssignment) {
            assignment = idx;
        }
    });

    let children = child_nodes(&arena, assignment);
    assert_eq!(children.len(), 2);
    assert_eq!(arena.identifier_text(children[0]), Some("k"));
    assert_eq!(
        arena.kind(children[1]),
        Some(SyntaxKind::ArrayLiteralExpression)
    );
    assert_eq!(arena.parent(children[1]), assignment);
}
