// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three graph queries (`tree`, `path`, `allPaths`) plus the non-core `show` lookup.
//!
//! [`QueryDriver`] is the orchestration point: it validates the caller's `from`/`to` sets,
//! runs [`reverse_coloring::color_reverse_paths_to_root`] to build the admission filter,
//! hands that to [`expansion::expand`] for the forward BFS, and finishes with
//! [`depth_pruner::prune`] for the depth-bounded rewrite.

mod depth_pruner;
mod expansion;
mod reverse_coloring;

use crate::errors::{Diagnostic, RequestedSet};
use crate::graph::ModuleGraph;
use crate::{ModuleKey, QueryOptions, ResultNode};
use std::collections::{HashMap, HashSet};

/// The result of running a query: the result graph plus any diagnostics produced while
/// validating the caller's `from`/`to` sets.
///
/// Mirrors `guppy`'s pattern of returning warnings alongside the data they describe
/// (see `FeatureGraphWarning` in `errors.rs`) rather than routing them through a side
/// logging channel -- no diagnostic here ever aborts a query.
#[derive(Clone, Debug)]
pub struct QueryOutcome {
    result: HashMap<ModuleKey, ResultNode>,
    diagnostics: Vec<Diagnostic>,
}

impl QueryOutcome {
    /// The query's result graph, always keyed at [`ModuleKey::root`].
    pub fn result(&self) -> &HashMap<ModuleKey, ResultNode> {
        &self.result
    }

    /// Diagnostics produced while resolving the query's `from`/`to` sets. Empty for a
    /// query whose inputs were already clean.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// A read-only projection of [`crate::graph::AugmentedModule`] for the `show` query.
///
/// `show` is explicitly not part of the graph algorithm core: it is a direct attribute
/// lookup, never a traversal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleInfo {
    key: ModuleKey,
    is_used: bool,
    is_loaded: bool,
    dep_count: usize,
    unused_dep_count: usize,
    dependant_count: usize,
}

impl ModuleInfo {
    /// The module this info describes.
    pub fn key(&self) -> &ModuleKey {
        &self.key
    }

    /// Whether version resolution kept this module.
    pub fn is_used(&self) -> bool {
        self.is_used
    }

    /// Whether this module was actually loaded.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    /// Number of used direct dependencies.
    pub fn dep_count(&self) -> usize {
        self.dep_count
    }

    /// Number of direct dependencies that exist only when unused modules are included.
    pub fn unused_dep_count(&self) -> usize {
        self.unused_dep_count
    }

    /// Number of modules that directly depend on this one (in the used graph).
    pub fn dependant_count(&self) -> usize {
        self.dependant_count
    }
}

/// Runs the three graph queries (`tree`, `path`, `allPaths`) and the `show` lookup over a
/// borrowed [`ModuleGraph`].
///
/// A `QueryDriver` owns no mutable state beyond what's local to a single call --
/// independent queries against the same graph can run concurrently on separate threads.
#[derive(Clone, Copy, Debug)]
pub struct QueryDriver<'g> {
    graph: &'g ModuleGraph,
}

impl<'g> QueryDriver<'g> {
    /// Creates a driver over the given graph.
    pub fn new(graph: &'g ModuleGraph) -> Self {
        Self { graph }
    }

    /// `tree(T)`: the structured rendering of the graph rooted at `from`, with no target
    /// filter.
    pub fn tree(&self, from: &HashSet<ModuleKey>, options: &QueryOptions) -> QueryOutcome {
        self.expand_and_prune(from, &HashSet::new(), false, options)
    }

    /// `path(F -> T)`: a single witness path from `from` to `to`.
    pub fn path(
        &self,
        from: &HashSet<ModuleKey>,
        to: &HashSet<ModuleKey>,
        options: &QueryOptions,
    ) -> QueryOutcome {
        self.expand_and_prune(from, to, true, options)
    }

    /// `allPaths(F -> T)`: the sub-DAG of every node lying on some path from `from` to
    /// `to`.
    pub fn all_paths(
        &self,
        from: &HashSet<ModuleKey>,
        to: &HashSet<ModuleKey>,
        options: &QueryOptions,
    ) -> QueryOutcome {
        self.expand_and_prune(from, to, false, options)
    }

    /// `show(k)`: a direct attribute lookup, not a traversal. Returns `None` for a key
    /// this graph doesn't contain -- never an error.
    pub fn show(&self, key: &ModuleKey) -> Option<ModuleInfo> {
        let module = self.graph.module(key)?;
        let used_deps = module.deps(false);
        let all_deps = module.deps(true);
        Some(ModuleInfo {
            key: key.clone(),
            is_used: module.is_used(),
            is_loaded: module.is_loaded(),
            dep_count: used_deps.len(),
            unused_dep_count: all_deps.len().saturating_sub(used_deps.len()),
            dependant_count: module.dependants().len(),
        })
    }

    fn expand_and_prune(
        &self,
        from: &HashSet<ModuleKey>,
        to: &HashSet<ModuleKey>,
        single_path: bool,
        options: &QueryOptions,
    ) -> QueryOutcome {
        let mut diagnostics = Vec::new();

        let from = self.validate_set(from, RequestedSet::From, &mut diagnostics);
        let to = self.validate_set(to, RequestedSet::To, &mut diagnostics);

        if from.is_empty() {
            diagnostics.push(Diagnostic::EmptyFrontier);
            let mut result = HashMap::new();
            result.insert(ModuleKey::root(), crate::ResultNodeBuilder::new().build());
            return QueryOutcome {
                result,
                diagnostics,
            };
        }

        let colored = reverse_coloring::color_reverse_paths_to_root(self.graph, &to, options);
        let unpruned = expansion::expand(self.graph, &from, &to, single_path, &colored, options);
        let result = depth_pruner::prune(&unpruned, options, !to.is_empty());

        QueryOutcome {
            result,
            diagnostics,
        }
    }

    /// Drops keys unknown to this graph (`Diagnostic::UnknownModule`), and notes -- but
    /// does not drop -- keys that are known but not loaded (`Diagnostic::UnloadedOrUnused`).
    ///
    /// `ModuleKey::root()` is always considered known regardless of `from`/`to`: it's the
    /// caller's own module and need not appear in the graph as a node.
    ///
    /// Tolerating rather than dropping unloaded keys matches pinning's
    /// `allowNotLoaded = true` behavior for `from`, and the fact that the forward BFS
    /// never re-filters `to` by loaded status at all -- both sets are "tolerated", the
    /// diagnostic is purely informational, not a drop decision.
    fn validate_set(
        &self,
        keys: &HashSet<ModuleKey>,
        which: RequestedSet,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> HashSet<ModuleKey> {
        keys.iter()
            .filter_map(|key| {
                if key.is_root() {
                    return Some(key.clone());
                }
                match self.graph.module(key) {
                    None => {
                        diagnostics.push(Diagnostic::UnknownModule {
                            set: which,
                            key: key.clone(),
                        });
                        None
                    }
                    Some(module) => {
                        if !module.is_loaded() {
                            diagnostics.push(Diagnostic::UnloadedOrUnused {
                                set: which,
                                key: key.clone(),
                            });
                        }
                        Some(key.clone())
                    }
                }
            })
            .collect()
    }
}
