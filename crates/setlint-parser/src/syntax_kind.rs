//! Syntax node kinds.
//!
//! Only the subset of the TypeScript grammar the rules need to reach is
//! modelled: enough statements and expressions to host spreads and loops, and
//! enough type syntax to express type-parameter constraints.

use serde::{Deserialize, Serialize};

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,
    SourceFile,

    // Names and literals
    Identifier,
    StringLiteral,
    NumericLiteral,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,

    // Expressions
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAssignment,
    CallExpression,
    NewExpression,
    PropertyAccessExpression,
    ParenthesizedExpression,
    SpreadElement,
    SpreadAssignment,

    // Statements and declarations
    Block,
    VariableStatement,
    VariableDeclaration,
    ExpressionStatement,
    ReturnStatement,
    ForOfStatement,
    ForInStatement,
    FunctionDeclaration,
    Parameter,

    // Type syntax
    TypeParameter,
    TypeReference,
    UnionType,
    IntersectionType,
    ArrayType,
    LiteralType,
    StringKeyword,
    NumberKeyword,
    BooleanKeyword,
    BigIntKeyword,
    SymbolKeyword,
    ObjectKeyword,
    AnyKeyword,
    UnknownKeyword,
    NeverKeyword,
    VoidKeyword,
    UndefinedKeyword,
}

impl SyntaxKind {
    const ALL: &'static [SyntaxKind] = &[
        SyntaxKind::Unknown,
        SyntaxKind::SourceFile,
        SyntaxKind::Identifier,
        SyntaxKind::StringLiteral,
        SyntaxKind::NumericLiteral,
        SyntaxKind::TrueKeyword,
        SyntaxKind::FalseKeyword,
        SyntaxKind::NullKeyword,
        SyntaxKind::ArrayLiteralExpression,
        SyntaxKind::ObjectLiteralExpression,
        SyntaxKind::PropertyAssignment,
        SyntaxKind::CallExpression,
        SyntaxKind::NewExpression,
        SyntaxKind::PropertyAccessExpression,
        SyntaxKind::ParenthesizedExpression,
        SyntaxKind::SpreadElement,
        SyntaxKind::SpreadAssignment,
        SyntaxKind::Block,
        SyntaxKind::VariableStatement,
        SyntaxKind::VariableDeclaration,
        SyntaxKind::ExpressionStatement,
        SyntaxKind::ReturnStatement,
        SyntaxKind::ForOfStatement,
        SyntaxKind::ForInStatement,
        SyntaxKind::FunctionDeclaration,
        SyntaxKind::Parameter,
        SyntaxKind::TypeParameter,
        SyntaxKind::TypeReference,
        SyntaxKind::UnionType,
        SyntaxKind::IntersectionType,
        SyntaxKind::ArrayType,
        SyntaxKind::LiteralType,
        SyntaxKind::StringKeyword,
        SyntaxKind::NumberKeyword,
        SyntaxKind::BooleanKeyword,
        SyntaxKind::BigIntKeyword,
        SyntaxKind::SymbolKeyword,
        SyntaxKind::ObjectKeyword,
        SyntaxKind::AnyKeyword,
        SyntaxKind::UnknownKeyword,
        SyntaxKind::NeverKeyword,
        SyntaxKind::VoidKeyword,
        SyntaxKind::UndefinedKeyword,
    ];

    /// Convert a raw node header kind back into a `SyntaxKind`.
    pub fn from_u16(raw: u16) -> Option<SyntaxKind> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Keyword type nodes (`string`, `number`, ...) carry no data.
    pub fn is_keyword_type(self) -> bool {
        matches!(
            self,
            SyntaxKind::StringKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::BigIntKeyword
                | SyntaxKind::SymbolKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::AnyKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::NeverKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::UndefinedKeyword
        )
    }

    pub fn is_type_node(self) -> bool {
        self.is_keyword_type()
            || matches!(
                self,
                SyntaxKind::TypeReference
                    | SyntaxKind::UnionType
                    | SyntaxKind::IntersectionType
                    | SyntaxKind::ArrayType
                    | SyntaxKind::LiteralType
            )
    }
}
