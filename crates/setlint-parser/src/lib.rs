//! Syntax tree storage for the setlint rules.
//!
//! Source text is parsed by the host; this crate only stores the resulting
//! tree in a cache-friendly arena and walks it. Nodes are 16-byte headers
//! (`Node`) whose `data_index` points into a typed pool chosen by `kind`.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod node;
pub use node::*;

mod node_arena;

pub mod walker;
pub use walker::{child_nodes, walk_preorder};
