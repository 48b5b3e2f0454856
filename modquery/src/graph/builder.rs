// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory assembly of a [`ModuleGraph`].
//!
//! This is a stand-in for a real build-tool manifest reader (out of scope for this
//! crate, see the crate-level docs): it only offers the "turn already-known edges into a
//! graph" half of what a loader does, mirroring `guppy`'s `build.rs`/`build_targets.rs`
//! minus the `cargo_metadata`-specific parsing.

use super::{DependencyEdge, ModuleFlags, ModuleGraph};
use crate::{Error, ModuleKey};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Builds a [`ModuleGraph`] from explicit module and dependency-edge declarations.
///
/// Callers only ever specify forward edges (`add_dep`); [`ModuleGraphBuilder::build`]
/// derives `dependants`/`original_dependants` from them, which keeps the reverse-edge
/// invariant honest by construction: every edge ends up on both sides.
#[derive(Clone, Debug, Default)]
pub struct ModuleGraphBuilder {
    modules: HashMap<ModuleKey, ModuleFlags>,
    order: Vec<ModuleKey>,
    edges: Vec<(ModuleKey, ModuleKey, bool)>,
}

impl ModuleGraphBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a module. Declaring the same key twice is a builder error surfaced at
    /// [`ModuleGraphBuilder::build`] time.
    pub fn add_module(&mut self, key: ModuleKey, is_used: bool, is_loaded: bool) -> &mut Self {
        self.order.push(key.clone());
        self.modules.insert(key, ModuleFlags { is_used, is_loaded });
        self
    }

    /// Declares a direct dependency edge `from -> to`. `used = false` means resolution
    /// discarded this edge (it still shows up in `deps(true)` and in
    /// `to.original_dependants()`, but not in `deps(false)` or `to.dependants()`).
    pub fn add_dep(&mut self, from: ModuleKey, to: ModuleKey, used: bool) -> &mut Self {
        self.edges.push((from, to, used));
        self
    }

    /// Consumes the builder, producing a [`ModuleGraph`].
    ///
    /// Fails if a dependency edge names a module that was never declared via
    /// [`ModuleGraphBuilder::add_module`], or if a module was declared twice.
    pub fn build(self) -> Result<ModuleGraph, Error> {
        let mut seen = HashMap::with_capacity(self.order.len());
        for key in &self.order {
            if seen.insert(key.clone(), ()).is_some() {
                return Err(Error::DuplicateModule(key.clone()));
            }
        }

        let mut dep_graph = DiGraph::new();
        let mut index: HashMap<ModuleKey, NodeIndex> = HashMap::with_capacity(self.order.len());
        for key in &self.order {
            let ix = dep_graph.add_node(key.clone());
            index.insert(key.clone(), ix);
        }

        for (from, to, used) in &self.edges {
            let from_ix = *index
                .get(from)
                .ok_or_else(|| Error::UnknownEdgeEndpoint {
                    from: from.clone(),
                    to: to.clone(),
                })?;
            let to_ix = *index.get(to).ok_or_else(|| Error::UnknownEdgeEndpoint {
                from: from.clone(),
                to: to.clone(),
            })?;
            dep_graph.add_edge(from_ix, to_ix, DependencyEdge { used: *used });
        }

        Ok(ModuleGraph {
            dep_graph,
            index,
            flags: self.modules,
        })
    }
}
