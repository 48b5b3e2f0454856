// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Options that shape a query without changing its semantics.

/// Options that control how a query traverses and prunes the module graph.
///
/// `QueryOptions` is a plain struct rather than a file-backed config layer: this crate
/// has nothing that needs to survive a process, so there is no config file to parse.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QueryOptions {
    /// Maximum depth of the result, measured in direct edges from `ROOT`. `0` means
    /// "`ROOT` only". Use [`QueryOptions::unbounded_depth`] for "no limit".
    pub depth: usize,
    /// When true, `deps()` includes modules that version resolution discarded.
    pub include_unused: bool,
    /// When true, cycle back-edges are echoed into the result as `Expanded::False`
    /// stubs rather than silently dropped.
    pub cycles: bool,
}

impl QueryOptions {
    /// The depth value that effectively means "no limit": `tree` and `allPaths` with no
    /// target filter agree when depth is infinite.
    pub const fn unbounded_depth() -> usize {
        usize::MAX
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            depth: Self::unbounded_depth(),
            include_unused: false,
            cycles: false,
        }
    }
}
