// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Forward breadth-first expansion from the pinned `from` frontier.

use crate::graph::{filter_unused, ModuleGraph};
use crate::result_node::{Expanded, ResultNodeBuilder};
use crate::{MaybeCompleteSet, ModuleKey, QueryOptions, ResultNode};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// Computes the direct children of `ROOT` in the result graph: `from`, filtered via
/// [`filter_unused`] with `allow_not_loaded = true`, unioned with the real direct
/// dependencies of `ROOT` when `from` itself contains `ROOT`.
pub(super) fn pinned_children_of_root(
    graph: &ModuleGraph,
    from: &HashSet<ModuleKey>,
    options: &QueryOptions,
) -> BTreeSet<ModuleKey> {
    let mut pinned: BTreeSet<ModuleKey> = from
        .iter()
        .filter(|key| filter_unused(graph, key, options, true))
        .cloned()
        .collect();

    if from.contains(&ModuleKey::root()) {
        if let Some(root) = graph.module(&ModuleKey::root()) {
            pinned.extend(root.deps(options.include_unused).iter().cloned());
        }
    }

    pinned
}

/// Runs the forward BFS part of `expandAndPrune`: builds the unpruned result map.
///
/// `from`/`to` are the user-supplied sets; `single_path` selects tree-shaped output
/// (`path`) versus a full sub-DAG (`tree`/`allPaths`); `colored` is the admission filter
/// produced by [`super::reverse_coloring::color_reverse_paths_to_root`].
///
/// `single_path` also narrows root's own pinned children to the first colored one --
/// the same one-child-then-stop rule the inner BFS loop below applies at every other
/// level -- so a `from` set pinning multiple roots still yields a single witness path.
pub(super) fn expand(
    graph: &ModuleGraph,
    from: &HashSet<ModuleKey>,
    to: &HashSet<ModuleKey>,
    single_path: bool,
    colored: &MaybeCompleteSet<ModuleKey>,
    options: &QueryOptions,
) -> HashMap<ModuleKey, ResultNode> {
    let pinned = pinned_children_of_root(graph, from, options);
    let root_deps: BTreeSet<ModuleKey> = graph
        .module(&ModuleKey::root())
        .map(|root| root.deps(options.include_unused).iter().cloned().collect())
        .unwrap_or_default();

    let mut result = HashMap::new();
    let mut root_builder = ResultNodeBuilder::new();
    let mut seen: HashSet<ModuleKey> = HashSet::from([ModuleKey::root()]);
    let mut queue: VecDeque<ModuleKey> = VecDeque::new();

    for child in &pinned {
        if !colored.contains(child) {
            continue;
        }
        if root_deps.contains(child) {
            root_builder.add_child(child.clone(), Expanded::True);
        } else {
            root_builder.add_indirect_child(child.clone(), Expanded::True);
        }
        if seen.insert(child.clone()) {
            queue.push_back(child.clone());
        }
        if single_path {
            break;
        }
    }
    result.insert(ModuleKey::root(), root_builder.build());

    while let Some(key) = queue.pop_front() {
        let mut builder = ResultNodeBuilder::new();
        builder.set_target(to.contains(&key));

        if let Some(module) = graph.module(&key) {
            for dep in module.deps(options.include_unused).iter() {
                if !colored.contains(dep) {
                    continue;
                }
                if to.contains(dep) {
                    builder.mark_target_parent();
                }
                if seen.contains(dep) {
                    if !single_path {
                        builder.add_child(dep.clone(), Expanded::False);
                    }
                } else {
                    builder.add_child(dep.clone(), Expanded::True);
                    seen.insert(dep.clone());
                    queue.push_back(dep.clone());
                    if single_path {
                        break;
                    }
                }
            }
        }

        result.insert(key, builder.build());
    }

    result
}
