//! Collection-match predicate.
//!
//! Set-likeness is a textual prefix test on the canonical name of the
//! expression's type: `Set<string>` matches, `WeakSet<string>` and
//! `ReadonlySet<string>` do not, and any user type rendered as `Set<T>` does.
//! The test lives behind `CollectionMatcher` so a nominal matcher can replace
//! it without touching the classifier or the rules.

use crate::parser_services::ParserServices;
use setlint_parser::NodeIndex;
use setlint_solver::{CanonicalName, classify_type};
use tracing::trace;

/// Rendered-name prefix of set types.
pub const SET_TYPE_PREFIX: &str = "Set<";

/// Decides whether a canonical type name denotes a collection family.
pub trait CollectionMatcher: Sync {
    fn matches(&self, name: &CanonicalName) -> bool;
}

/// Matches names whose textual form starts with a fixed prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderedPrefixMatcher {
    prefix: &'static str,
}

impl RenderedPrefixMatcher {
    pub const SET: RenderedPrefixMatcher = RenderedPrefixMatcher::new(SET_TYPE_PREFIX);

    pub const fn new(prefix: &'static str) -> Self {
        RenderedPrefixMatcher { prefix }
    }

    #[inline]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }
}

impl CollectionMatcher for RenderedPrefixMatcher {
    fn matches(&self, name: &CanonicalName) -> bool {
        name.as_str()
            .is_some_and(|text| text.starts_with(self.prefix))
    }
}

/// Classify the type of `node` and test it with `matcher`.
pub fn is_collection_type(
    services: &ParserServices<'_>,
    node: NodeIndex,
    matcher: &dyn CollectionMatcher,
) -> bool {
    let checker = services.type_checker();
    let type_id = checker.type_of_node(node);
    let name = classify_type(checker, type_id);
    let matched = matcher.matches(&name);
    trace!(node = node.0, type_id = type_id.0, name = %name, matched, "collection match");
    matched
}

/// Whether the type of `node` is a `Set<...>`.
pub fn is_set_type(services: &ParserServices<'_>, node: NodeIndex) -> bool {
    is_collection_type(services, node, &RenderedPrefixMatcher::SET)
}

#[cfg(test)]
#[path = "../tests/set_type_tests.rs"]
mod tests;
