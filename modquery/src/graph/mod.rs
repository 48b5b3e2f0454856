// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resolved module dependency graph that queries run over.
//!
//! [`ModuleGraph`] is read-only from the query engine's perspective: nothing in
//! [`crate::query`] ever mutates it. Building one from an actual build tool's manifests
//! is out of scope for this crate -- [`ModuleGraphBuilder`] is the minimal in-memory
//! stand-in a caller (or a test) uses instead.

mod builder;
mod filter;

pub use builder::ModuleGraphBuilder;
pub use filter::filter_unused;

use crate::debug_ignore::DebugIgnore;
use crate::sorted_set::SortedSet;
use crate::ModuleKey;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// A dependency edge, tagged with whether version resolution kept it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DependencyEdge {
    used: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ModuleFlags {
    is_used: bool,
    is_loaded: bool,
}

/// The resolved module dependency graph: nodes are [`ModuleKey`]s, edges are "depends
/// on", annotated with whether resolution kept the edge.
///
/// Constructed through [`ModuleGraphBuilder`].
#[derive(Clone, Debug)]
pub struct ModuleGraph {
    dep_graph: DiGraph<ModuleKey, DependencyEdge>,
    index: HashMap<ModuleKey, NodeIndex>,
    flags: HashMap<ModuleKey, ModuleFlags>,
}

impl ModuleGraph {
    /// Returns true if `key` is a node in this graph (including `ModuleKey::root()`).
    pub fn contains(&self, key: &ModuleKey) -> bool {
        self.index.contains_key(key)
    }

    /// Returns a read-only view of the given module's attributes, or `None` if `key`
    /// isn't a node in this graph.
    ///
    /// Looks the key back up through `self.index` rather than borrowing the caller's
    /// `key` directly, so the returned view's lifetime is tied to `self` alone --
    /// callers are free to pass a `key` whose own borrow is shorter-lived than `self`
    /// (e.g. a BFS frontier's locally owned `ModuleKey`).
    pub fn module(&self, key: &ModuleKey) -> Option<AugmentedModule<'_>> {
        let (canonical_key, &ix) = self.index.get_key_value(key)?;
        Some(AugmentedModule {
            graph: DebugIgnore(self),
            key: canonical_key,
            ix,
        })
    }

    fn node_ix(&self, key: &ModuleKey) -> Option<NodeIndex> {
        self.index.get(key).copied()
    }
}

/// A read-only, borrowed view of one module's place in a [`ModuleGraph`]: its
/// dependencies (used and original), its dependants, and its resolver flags.
///
/// The `graph` backreference is wrapped in [`DebugIgnore`] the same way `guppy`'s own
/// query/resolve views wrap their `&PackageGraph` backreference: printing one of these
/// shouldn't dump the whole graph it was borrowed from.
#[derive(Clone, Copy, Debug)]
pub struct AugmentedModule<'g> {
    graph: DebugIgnore<&'g ModuleGraph>,
    key: &'g ModuleKey,
    ix: NodeIndex,
}

impl<'g> AugmentedModule<'g> {
    /// This module's key.
    pub fn key(&self) -> &'g ModuleKey {
        self.key
    }

    /// This module's direct dependencies.
    ///
    /// When `include_unused` is true, this is the superset that also contains modules
    /// discarded during version resolution. A dependency is discarded if its own edge
    /// was marked unused, or if the target module itself was never kept by resolution
    /// (`is_used() == false`) -- either is sufficient on its own.
    pub fn deps(&self, include_unused: bool) -> SortedSet<ModuleKey> {
        self.graph
            .dep_graph
            .edges_directed(self.ix, Direction::Outgoing)
            .filter(|edge| {
                include_unused
                    || (edge.weight().used && self.graph.flags[&self.graph.dep_graph[edge.target()]].is_used)
            })
            .map(|edge| self.graph.dep_graph[edge.target()].clone())
            .collect()
    }

    /// Reverse edges in the *used* graph: modules that depend on this one, after
    /// resolution.
    pub fn dependants(&self) -> SortedSet<ModuleKey> {
        self.graph
            .dep_graph
            .edges_directed(self.ix, Direction::Incoming)
            .filter(|edge| edge.weight().used)
            .map(|edge| self.graph.dep_graph[edge.source()].clone())
            .collect()
    }

    /// Reverse edges that existed before resolution discarded them: a superset of
    /// [`AugmentedModule::dependants`].
    pub fn original_dependants(&self) -> SortedSet<ModuleKey> {
        self.graph
            .dep_graph
            .edges_directed(self.ix, Direction::Incoming)
            .map(|edge| self.graph.dep_graph[edge.source()].clone())
            .collect()
    }

    /// Whether version resolution kept this module.
    pub fn is_used(&self) -> bool {
        self.graph.flags[self.key].is_used
    }

    /// Whether this module was actually loaded (as opposed to merely named).
    pub fn is_loaded(&self) -> bool {
        self.graph.flags[self.key].is_loaded
    }
}
