// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reverse breadth-first coloring: which modules can reach a target set.

use crate::graph::ModuleGraph;
use crate::{MaybeCompleteSet, ModuleKey, QueryOptions};
use std::collections::{HashSet, VecDeque};

/// Computes every ancestor (transitive parent) of any module in `targets`, plus the
/// targets themselves.
///
/// If `targets` is empty, returns [`MaybeCompleteSet::complete`] -- an empty target set
/// means "no filtering", not "nothing reachable". Otherwise this is a breadth-first
/// traversal of the reverse graph seeded with `targets`: each step looks up a module's
/// `dependants` (plus `original_dependants` when `include_unused` is set) and enqueues
/// any not already seen. Each module is visited at most once, so this runs in `O(V+E)`
/// over the reverse subgraph reachable from `targets`.
pub fn color_reverse_paths_to_root(
    graph: &ModuleGraph,
    targets: &HashSet<ModuleKey>,
    options: &QueryOptions,
) -> MaybeCompleteSet<ModuleKey> {
    if targets.is_empty() {
        return MaybeCompleteSet::complete();
    }

    let mut seen: HashSet<ModuleKey> = targets.clone();
    let mut queue: VecDeque<ModuleKey> = targets.iter().cloned().collect();

    while let Some(key) = queue.pop_front() {
        let module = match graph.module(&key) {
            Some(module) => module,
            None => continue,
        };
        let mut parents = module.dependants();
        if options.include_unused {
            parents = parents
                .iter()
                .cloned()
                .chain(module.original_dependants().iter().cloned())
                .collect();
        }
        for parent in parents.iter() {
            if seen.insert(parent.clone()) {
                queue.push_back(parent.clone());
            }
        }
    }

    MaybeCompleteSet::of(seen)
}
