//! Type representation for the reference type system.
//!
//! Types are interned: a `TypeId` is a `u32` handle and structurally equal
//! types share one id. Composite payloads (member lists, object shapes,
//! applications) are interned separately and referenced by their own ids.

use bitflags::bitflags;
use serde::Serialize;
use setlint_common::Atom;

/// A type identifier, O(1) equality by comparing handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Internal placeholder, no valid type.
    pub const NONE: TypeId = TypeId(0);
    /// Unresolved or unmapped type. Rendered as `any`.
    pub const ERROR: TypeId = TypeId(1);
    pub const ANY: TypeId = TypeId(2);
    pub const UNKNOWN: TypeId = TypeId(3);
    pub const NEVER: TypeId = TypeId(4);
    pub const VOID: TypeId = TypeId(5);
    pub const UNDEFINED: TypeId = TypeId(6);
    pub const NULL: TypeId = TypeId(7);
    pub const BOOLEAN: TypeId = TypeId(8);
    pub const NUMBER: TypeId = TypeId(9);
    pub const STRING: TypeId = TypeId(10);
    pub const BIGINT: TypeId = TypeId(11);
    pub const SYMBOL: TypeId = TypeId(12);
    pub const OBJECT: TypeId = TypeId(13);
    pub const BOOLEAN_TRUE: TypeId = TypeId(14);
    pub const BOOLEAN_FALSE: TypeId = TypeId(15);

    /// First id handed out to user-constructed types.
    pub const FIRST_USER: u32 = 100;

    #[inline]
    pub fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }

    #[inline]
    pub fn is_error(self) -> bool {
        self == Self::ERROR
    }

    #[inline]
    pub fn is_any(self) -> bool {
        self == Self::ANY
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    #[inline]
    pub fn is_never(self) -> bool {
        self == Self::NEVER
    }
}

bitflags! {
    /// Category flags of a type. Bit values follow TypeScript's `TypeFlags`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const ENUM = 1 << 5;
        const BIGINT = 1 << 6;
        const STRING_LITERAL = 1 << 7;
        const NUMBER_LITERAL = 1 << 8;
        const BOOLEAN_LITERAL = 1 << 9;
        const ENUM_LITERAL = 1 << 10;
        const BIGINT_LITERAL = 1 << 11;
        const ES_SYMBOL = 1 << 12;
        const UNIQUE_ES_SYMBOL = 1 << 13;
        const VOID = 1 << 14;
        const UNDEFINED = 1 << 15;
        const NULL = 1 << 16;
        const NEVER = 1 << 17;
        const TYPE_PARAMETER = 1 << 18;
        const OBJECT = 1 << 19;
        const UNION = 1 << 20;
        const INTERSECTION = 1 << 21;
        const INDEX = 1 << 22;
        const INDEXED_ACCESS = 1 << 23;
        const CONDITIONAL = 1 << 24;
        const SUBSTITUTION = 1 << 25;
        const NON_PRIMITIVE = 1 << 26;
        const TEMPLATE_LITERAL = 1 << 27;
        const STRING_MAPPING = 1 << 28;

        /// Plain string, string literals, template literals and string
        /// mappings (`Uppercase<T>` and friends).
        const STRING_LIKE = Self::STRING.bits()
            | Self::STRING_LITERAL.bits()
            | Self::TEMPLATE_LITERAL.bits()
            | Self::STRING_MAPPING.bits();
        const UNION_OR_INTERSECTION = Self::UNION.bits() | Self::INTERSECTION.bits();
    }
}

/// Float wrapper with bitwise equality and hashing so literals can be interned.
#[derive(Clone, Copy, Debug)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for OrderedFloat {}

impl std::hash::Hash for OrderedFloat {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Bigint,
    Symbol,
    Object,
}

impl IntrinsicKind {
    pub fn to_type_id(self) -> TypeId {
        match self {
            IntrinsicKind::Any => TypeId::ANY,
            IntrinsicKind::Unknown => TypeId::UNKNOWN,
            IntrinsicKind::Never => TypeId::NEVER,
            IntrinsicKind::Void => TypeId::VOID,
            IntrinsicKind::Undefined => TypeId::UNDEFINED,
            IntrinsicKind::Null => TypeId::NULL,
            IntrinsicKind::Boolean => TypeId::BOOLEAN,
            IntrinsicKind::Number => TypeId::NUMBER,
            IntrinsicKind::String => TypeId::STRING,
            IntrinsicKind::Bigint => TypeId::BIGINT,
            IntrinsicKind::Symbol => TypeId::SYMBOL,
            IntrinsicKind::Object => TypeId::OBJECT,
        }
    }

    pub fn from_type_id(id: TypeId) -> Option<IntrinsicKind> {
        Some(match id {
            TypeId::ANY => IntrinsicKind::Any,
            TypeId::UNKNOWN => IntrinsicKind::Unknown,
            TypeId::NEVER => IntrinsicKind::Never,
            TypeId::VOID => IntrinsicKind::Void,
            TypeId::UNDEFINED => IntrinsicKind::Undefined,
            TypeId::NULL => IntrinsicKind::Null,
            TypeId::BOOLEAN => IntrinsicKind::Boolean,
            TypeId::NUMBER => IntrinsicKind::Number,
            TypeId::STRING => IntrinsicKind::String,
            TypeId::BIGINT => IntrinsicKind::Bigint,
            TypeId::SYMBOL => IntrinsicKind::Symbol,
            TypeId::OBJECT => IntrinsicKind::Object,
            _ => return None,
        })
    }

    /// Keyword spelling.
    pub fn name(self) -> &'static str {
        match self {
            IntrinsicKind::Any => "any",
            IntrinsicKind::Unknown => "unknown",
            IntrinsicKind::Never => "never",
            IntrinsicKind::Void => "void",
            IntrinsicKind::Undefined => "undefined",
            IntrinsicKind::Null => "null",
            IntrinsicKind::Boolean => "boolean",
            IntrinsicKind::Number => "number",
            IntrinsicKind::String => "string",
            IntrinsicKind::Bigint => "bigint",
            IntrinsicKind::Symbol => "symbol",
            IntrinsicKind::Object => "object",
        }
    }

    pub fn flags(self) -> TypeFlags {
        match self {
            IntrinsicKind::Any => TypeFlags::ANY,
            IntrinsicKind::Unknown => TypeFlags::UNKNOWN,
            IntrinsicKind::Never => TypeFlags::NEVER,
            IntrinsicKind::Void => TypeFlags::VOID,
            IntrinsicKind::Undefined => TypeFlags::UNDEFINED,
            IntrinsicKind::Null => TypeFlags::NULL,
            IntrinsicKind::Boolean => TypeFlags::BOOLEAN,
            IntrinsicKind::Number => TypeFlags::NUMBER,
            IntrinsicKind::String => TypeFlags::STRING,
            IntrinsicKind::Bigint => TypeFlags::BIGINT,
            IntrinsicKind::Symbol => TypeFlags::ES_SYMBOL,
            IntrinsicKind::Object => TypeFlags::NON_PRIMITIVE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(Atom),
    Number(OrderedFloat),
    Boolean(bool),
    /// Digits without the trailing `n`.
    BigInt(Atom),
}

/// Intrinsic string mapping types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringIntrinsicKind {
    Uppercase,
    Lowercase,
    Capitalize,
    Uncapitalize,
}

impl StringIntrinsicKind {
    pub fn name(self) -> &'static str {
        match self {
            StringIntrinsicKind::Uppercase => "Uppercase",
            StringIntrinsicKind::Lowercase => "Lowercase",
            StringIntrinsicKind::Capitalize => "Capitalize",
            StringIntrinsicKind::Uncapitalize => "Uncapitalize",
        }
    }
}

/// A generic type parameter. `id` keeps same-named parameters of different
/// declarations apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeParamInfo {
    pub name: Atom,
    pub id: u32,
}

/// Instantiation of a named generic type (`Set<number>`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeApplication {
    pub base: Atom,
    pub args: Vec<TypeId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyInfo {
    pub name: Atom,
    pub type_id: TypeId,
    pub optional: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ObjectShape {
    pub properties: Vec<PropertyInfo>,
}

/// One span of a template literal type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateSpan {
    Text(Atom),
    Type(TypeId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeListId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectShapeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeApplicationId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TemplateLiteralId(pub u32);

/// Structural type data stored behind a `TypeId`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    Literal(LiteralValue),
    Union(TypeListId),
    Intersection(TypeListId),
    TypeParameter(TypeParamInfo),
    Application(TypeApplicationId),
    Array(TypeId),
    Object(ObjectShapeId),
    /// Non-generic named type (`Foo`, `Date`).
    Reference(Atom),
    TemplateLiteral(TemplateLiteralId),
    StringIntrinsic {
        kind: StringIntrinsicKind,
        type_arg: TypeId,
    },
    Error,
}

impl TypeData {
    /// Category flags for this type.
    pub fn flags(&self) -> TypeFlags {
        match self {
            TypeData::Intrinsic(kind) => kind.flags(),
            TypeData::Literal(LiteralValue::String(_)) => TypeFlags::STRING_LITERAL,
            TypeData::Literal(LiteralValue::Number(_)) => TypeFlags::NUMBER_LITERAL,
            TypeData::Literal(LiteralValue::Boolean(_)) => TypeFlags::BOOLEAN_LITERAL,
            TypeData::Literal(LiteralValue::BigInt(_)) => TypeFlags::BIGINT_LITERAL,
            TypeData::Union(_) => TypeFlags::UNION,
            TypeData::Intersection(_) => TypeFlags::INTERSECTION,
            TypeData::TypeParameter(_) => TypeFlags::TYPE_PARAMETER,
            TypeData::Application(_)
            | TypeData::Array(_)
            | TypeData::Object(_)
            | TypeData::Reference(_) => TypeFlags::OBJECT,
            TypeData::TemplateLiteral(_) => TypeFlags::TEMPLATE_LITERAL,
            TypeData::StringIntrinsic { .. } => TypeFlags::STRING_MAPPING,
            TypeData::Error => TypeFlags::ANY,
        }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
