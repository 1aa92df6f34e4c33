//! Thin node headers and typed data pools.
//!
//! Each `Node` is a 16-byte header (kind, flags, position, data index). The
//! `data_index` field points into the pool selected by `kind`; nodes that
//! carry no data (keyword types, `true`, `null`) use `Node::NO_DATA`.

use crate::base::{NodeIndex, NodeList};
use serde::{Deserialize, Serialize};

/// A thin 16-byte node header.
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    /// SyntaxKind value
    pub kind: u16,
    pub flags: u16,
    /// Start position in source (character index)
    pub pos: u32,
    /// End position in source (character index)
    pub end: u32,
    /// Index into the type-specific storage pool (u32::MAX = no data)
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    /// Width of the node in source characters.
    #[inline]
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Data for the source file root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
}

/// Data for identifier nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Data for string/numeric literals.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// Data for array and object literals.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralExprData {
    pub elements: NodeList,
}

/// Data for `name: initializer` members of object literals.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for call and `new` expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub arguments: Option<NodeList>,
}

/// Data for `a.b` expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

/// Data for parenthesized expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

/// Data for spread elements (`...x` in arrays and calls) and spread
/// assignments (`...x` in object literals).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpreadData {
    pub expression: NodeIndex,
}

/// Data for blocks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

/// Data for variable statements (`const a = 1, b = 2;`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableStatementData {
    pub declarations: NodeList,
}

/// Data for variable declarations (individual)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for expression statements and return statements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

/// Data for `for ... in` / `for ... of` statements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForInOfData {
    /// For for-await-of
    pub await_modifier: bool,
    /// Variable declaration or expression
    pub initializer: NodeIndex,
    /// The iterated expression
    pub expression: NodeIndex,
    /// The loop body
    pub statement: NodeIndex,
}

/// Data for function declarations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionData {
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

/// Data for function parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    pub name: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for type parameter declarations (`T extends C = D`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub name: NodeIndex,
    pub constraint: NodeIndex,
    pub default: NodeIndex,
}

/// Data for type references (`Set<number>`, `T`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeRefData {
    pub type_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// Data for union and intersection type nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompositeTypeData {
    pub types: NodeList,
}

/// Data for `T[]` type nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
}

/// Data for literal type nodes (`"a"`, `1`, `true`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralTypeData {
    pub literal: NodeIndex,
}

/// Arena holding every node of one source file.
///
/// Children are created before their parents, so parent pointers are filled
/// in as each parent is added.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub parents: Vec<NodeIndex>,
    pub source_files: Vec<SourceFileData>,
    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,
    pub literal_exprs: Vec<LiteralExprData>,
    pub property_assignments: Vec<PropertyAssignmentData>,
    pub call_exprs: Vec<CallExprData>,
    pub access_exprs: Vec<AccessExprData>,
    pub parenthesized: Vec<ParenthesizedData>,
    pub spread_data: Vec<SpreadData>,
    pub blocks: Vec<BlockData>,
    pub variable_statements: Vec<VariableStatementData>,
    pub variable_declarations: Vec<VariableDeclarationData>,
    pub expr_statements: Vec<ExprStatementData>,
    pub for_in_of: Vec<ForInOfData>,
    pub functions: Vec<FunctionData>,
    pub parameters: Vec<ParameterData>,
    pub type_parameters: Vec<TypeParameterData>,
    pub type_refs: Vec<TypeRefData>,
    pub composite_types: Vec<CompositeTypeData>,
    pub array_types: Vec<ArrayTypeData>,
    pub literal_types: Vec<LiteralTypeData>,
}
