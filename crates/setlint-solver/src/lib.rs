//! Type model and type-name classification.
//!
//! - `TypeId` handles into an interning `TypeInterner`
//! - `TypeFormatter` for display rendering
//! - `TypeChecker` / `DeclarationLookup` capability traits for hosts
//! - `ClassificationLimits` bounding one classification query
//! - The type-name classifier (`classify_type`)

mod db;
mod format;
mod intern;
mod recursion;
pub mod type_classifier;
pub mod types;

pub use db::{DeclarationLookup, TypeChecker, TypeQueries};
pub use format::TypeFormatter;
pub use intern::TypeInterner;
pub use recursion::ClassificationLimits;
pub use type_classifier::{CanonicalName, TypeNameClassifier, classify_type, is_string_type};
pub use types::{
    IntrinsicKind, LiteralValue, OrderedFloat, PropertyInfo, StringIntrinsicKind, TemplateSpan,
    TypeData, TypeFlags, TypeId,
};
