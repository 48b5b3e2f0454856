// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifiers for modules in a dependency graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identifier for a module: a (name, version) pair.
///
/// `Ord` is derived in field order (name then version), which gives the lexicographic
/// total order that query results are iterated in -- see the crate-level docs for why
/// that ordering matters for deterministic output.
///
/// [`ModuleKey::root`] is the distinguished key representing the caller's own module. It
/// is always present in a query's result, and is always known to [`crate::query::QueryDriver`]'s
/// `from`/`to` validation regardless of what the input graph actually contains.
/// [`crate::graph::filter_unused`] treats it as never a legal *pinned child of itself*
/// (it's excluded from `from`'s pinning filter so it can't become its own result child).
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[cfg_attr(feature = "proptest1", derive(proptest_derive::Arbitrary))]
pub struct ModuleKey {
    name: Box<str>,
    version: Box<str>,
}

impl ModuleKey {
    /// Creates a new module key from a name and a version string.
    pub fn new(name: impl Into<Box<str>>, version: impl Into<Box<str>>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The distinguished key for the caller's own module.
    ///
    /// Real modules always come out of resolution with a non-empty version, so the
    /// sentinel empty-string pair can't collide with one.
    pub fn root() -> Self {
        Self {
            name: "".into(),
            version: "".into(),
        }
    }

    /// Returns true if this key is [`ModuleKey::root`].
    pub fn is_root(&self) -> bool {
        self.name.is_empty() && self.version.is_empty()
    }

    /// This module's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This module's version.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "<root>")
        } else {
            write!(f, "{}@{}", self.name, self.version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_distinguished() {
        let root = ModuleKey::root();
        assert!(root.is_root());
        assert!(!ModuleKey::new("a", "1.0.0").is_root());
        // An empty-named, non-root-version key is not root (name and version must both be empty).
        assert!(!ModuleKey::new("", "1.0.0").is_root());
    }

    #[test]
    fn ordering_is_lexicographic_by_name_then_version() {
        let mut keys = vec![
            ModuleKey::new("b", "1.0.0"),
            ModuleKey::new("a", "2.0.0"),
            ModuleKey::new("a", "1.0.0"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                ModuleKey::new("a", "1.0.0"),
                ModuleKey::new("a", "2.0.0"),
                ModuleKey::new("b", "1.0.0"),
            ]
        );
    }
}
