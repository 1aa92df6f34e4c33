//! String Interner for identifier and literal deduplication.
//!
//! Type names, type parameter names and string literal values are interned
//! into a pool and passed around as u32 indices (Atoms). Comparisons become
//! integer comparisons instead of string comparisons.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// An interned string identifier.
///
/// Atoms are cheap to copy (just a u32) and can be compared with == in O(1).
/// To get the actual string, use `Interner::resolve(atom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Atom(pub u32);

impl Atom {
    /// A sentinel value representing no atom / empty string.
    pub const NONE: Atom = Atom(0);

    /// Check if this is the empty/none atom.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

const COMMON_STRINGS: &[&str] = &[
    "string",
    "number",
    "boolean",
    "bigint",
    "symbol",
    "object",
    "any",
    "unknown",
    "never",
    "void",
    "null",
    "undefined",
    "Array",
    "ReadonlyArray",
    "Set",
    "ReadonlySet",
    "WeakSet",
    "Map",
    "ReadonlyMap",
    "WeakMap",
    "Promise",
    "Uppercase",
    "Lowercase",
    "Capitalize",
    "Uncapitalize",
];

/// String interner that deduplicates strings and returns Atom handles.
///
/// # Example
/// ```
/// use setlint_common::Interner;
/// let mut interner = Interner::new();
/// let a1 = interner.intern("hello");
/// let a2 = interner.intern("hello");
/// assert_eq!(a1, a2);
/// assert_eq!(interner.resolve(a1), "hello");
/// ```
#[derive(Default)]
pub struct Interner {
    map: FxHashMap<Arc<str>, Atom>,
    /// Index 0 is the empty string.
    strings: Vec<Arc<str>>,
}

impl Interner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let mut interner = Interner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        let empty: Arc<str> = Arc::from("");
        interner.strings.push(empty.clone());
        interner.map.insert(empty, Atom::NONE);
        interner
    }

    /// Intern a string, returning its Atom handle.
    /// If the string was already interned, returns the existing Atom.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.map.get(s) {
            return atom;
        }
        let atom = Atom(self.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        self.strings.push(owned.clone());
        self.map.insert(owned, atom);
        atom
    }

    /// Resolve an Atom back to its string value.
    /// Returns empty string if atom is out of bounds.
    #[inline]
    pub fn resolve(&self, atom: Atom) -> &str {
        self.strings
            .get(atom.0 as usize)
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    /// Resolve an Atom to a shared handle of its string value.
    #[inline]
    pub fn resolve_arc(&self, atom: Atom) -> Option<Arc<str>> {
        self.strings.get(atom.0 as usize).cloned()
    }

    /// Try to resolve an Atom, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, atom: Atom) -> Option<&str> {
        self.strings.get(atom.0 as usize).map(|s| s.as_ref())
    }

    /// Get the number of interned strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the interner is empty (only has the empty string).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }

    /// Pre-intern builtin type names.
    pub fn intern_common(&mut self) {
        for s in COMMON_STRINGS {
            self.intern(s);
        }
    }
}

/// Interner usable through a shared reference.
///
/// The type interner hands out `TypeId`s through `&self`, so the string pool
/// behind it needs interior mutability.
pub struct SyncInterner {
    inner: RwLock<Interner>,
}

impl Default for SyncInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncInterner {
    pub fn new() -> Self {
        let mut interner = Interner::new();
        interner.intern_common();
        SyncInterner {
            inner: RwLock::new(interner),
        }
    }

    /// Intern a string, returning its Atom handle.
    ///
    /// Returns `Atom::NONE` if the lock is poisoned.
    pub fn intern(&self, s: &str) -> Atom {
        if s.is_empty() {
            return Atom::NONE;
        }
        if let Ok(state) = self.inner.read()
            && let Some(&atom) = state.map.get(s)
        {
            return atom;
        }
        match self.inner.write() {
            Ok(mut state) => state.intern(s),
            Err(_) => Atom::NONE,
        }
    }

    /// Resolve an Atom to its string value.
    ///
    /// Unknown atoms and a poisoned lock both resolve to the empty string.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        self.inner
            .read()
            .ok()
            .and_then(|state| state.resolve_arc(atom))
            .unwrap_or_else(|| Arc::from(""))
    }

    /// Look up an already-interned string without inserting it.
    pub fn lookup(&self, s: &str) -> Option<Atom> {
        self.inner.read().ok()?.map.get(s).copied()
    }
}
