// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Depth-bounded rewrite of an unpruned result graph, with indirect re-parenting.
//!
//! The dual DFS here -- `visible` inside the depth bound, `detached` past it -- is the
//! load-bearing split described in the crate docs: once depth crosses the cutoff, only
//! targets (and the chain of elided ancestors between them and the last visible node)
//! keep surfacing, via synthetic indirect edges.
//!
//! A node can be reached more than once (two sibling subtrees sharing a descendant is
//! legitimate, not a cycle -- only a hit against the *current* DFS stack is). Builder
//! creation is therefore idempotent (create-on-first-touch, reuse afterwards) and
//! attaching a child to a parent is purely additive, so re-visiting a shared descendant
//! from a second parent can never clobber the subtree a first visit already built.

use crate::result_node::{Expanded, ResultNode, ResultNodeBuilder};
use crate::{ModuleKey, QueryOptions};
use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum EdgeKind {
    Direct,
    Indirect,
}

struct Pruner<'a> {
    unpruned: &'a HashMap<ModuleKey, ResultNode>,
    max_depth: usize,
    with_targets: bool,
    cycles: bool,
    stack: HashSet<ModuleKey>,
    recursed: HashSet<ModuleKey>,
    builders: HashMap<ModuleKey, ResultNodeBuilder>,
}

impl<'a> Pruner<'a> {
    fn ensure_builder(&mut self, key: &ModuleKey) {
        if self.builders.contains_key(key) {
            return;
        }
        let mut builder = ResultNodeBuilder::new();
        if let Some(node) = self.unpruned.get(key) {
            builder.set_target(node.is_target());
            if node.is_target_parent() {
                builder.mark_target_parent();
            }
        }
        self.builders.insert(key.clone(), builder);
    }

    fn attach(&mut self, parent: &ModuleKey, child: ModuleKey, expanded: Expanded, kind: EdgeKind) {
        let builder = self
            .builders
            .get_mut(parent)
            .expect("a node is only attached as a child after its parent has been committed");
        match kind {
            EdgeKind::Direct => {
                builder.add_child(child, expanded);
            }
            EdgeKind::Indirect => {
                builder.add_indirect_child(child, expanded);
            }
        }
    }

    /// Marks `key` as a target-parent even though the target reaching it may be several
    /// elided hops away. This is the carry-up use of `isTargetParent` beyond its
    /// direct-child definition.
    fn carry_up_target_parent(&mut self, key: &ModuleKey) {
        if let Some(builder) = self.builders.get_mut(key) {
            builder.mark_target_parent();
        }
    }

    /// DFS within the depth bound: every node visited here is fully rendered.
    fn visible(&mut self, key: &ModuleKey, depth: usize, parent: &ModuleKey, expanded: Expanded) {
        self.stack.insert(key.clone());
        self.ensure_builder(key);
        if depth > 1 {
            self.attach(parent, key.clone(), expanded, EdgeKind::Direct);
        }

        if expanded == Expanded::False {
            self.stack.remove(key);
            return;
        }

        if self.recursed.insert(key.clone()) {
            if let Some(node) = self.unpruned.get(key).cloned() {
                for (child, child_exp) in node.children().iter() {
                    if self.stack.contains(child) {
                        if self.cycles {
                            self.attach(key, child.clone(), Expanded::False, EdgeKind::Direct);
                        }
                        continue;
                    }
                    if depth < self.max_depth {
                        self.visible(child, depth + 1, key, *child_exp);
                    } else if self.with_targets {
                        self.detached(child, key, key, *child_exp);
                    }
                }
            }
        }

        self.stack.remove(key);
    }

    /// DFS past the depth bound: only targets surface, reparented onto the nearest
    /// visible (or already-committed detached) ancestor via an indirect edge whenever
    /// one or more ancestors in between were elided.
    fn detached(
        &mut self,
        key: &ModuleKey,
        parent: &ModuleKey,
        last_visible_parent: &ModuleKey,
        expanded: Expanded,
    ) {
        self.stack.insert(key.clone());
        let node = self.unpruned.get(key).cloned();
        let is_target = node.as_ref().is_some_and(ResultNode::is_target);
        let mut next_last_visible = last_visible_parent.clone();

        if is_target {
            self.ensure_builder(key);
            let kind = if last_visible_parent == parent {
                EdgeKind::Direct
            } else {
                EdgeKind::Indirect
            };
            self.attach(last_visible_parent, key.clone(), Expanded::True, kind);
            self.carry_up_target_parent(last_visible_parent);
            next_last_visible = key.clone();
        }

        if expanded == Expanded::False {
            self.stack.remove(key);
            return;
        }

        if self.recursed.insert(key.clone()) {
            if let Some(node) = node {
                for (child, child_exp) in node.children().iter() {
                    if self.stack.contains(child) {
                        if self.cycles && is_target {
                            self.attach(key, child.clone(), Expanded::False, EdgeKind::Direct);
                        }
                        continue;
                    }
                    self.detached(child, key, &next_last_visible, *child_exp);
                }
            }
        }

        self.stack.remove(key);
    }

    fn seed_root_child(&mut self, key: &ModuleKey, expanded: Expanded, kind: EdgeKind) {
        if self.max_depth >= 1 {
            self.attach(&ModuleKey::root(), key.clone(), expanded, kind);
            self.visible(key, 1, &ModuleKey::root(), expanded);
        } else if self.with_targets {
            self.detached(key, &ModuleKey::root(), &ModuleKey::root(), expanded);
        }
    }
}

/// Rewrites `unpruned` (the output of [`super::expansion::expand`]) into a depth-bounded
/// presentation graph.
pub(super) fn prune(
    unpruned: &HashMap<ModuleKey, ResultNode>,
    options: &QueryOptions,
    with_targets: bool,
) -> HashMap<ModuleKey, ResultNode> {
    let mut pruner = Pruner {
        unpruned,
        max_depth: options.depth,
        with_targets,
        cycles: options.cycles,
        stack: HashSet::from([ModuleKey::root()]),
        recursed: HashSet::from([ModuleKey::root()]),
        builders: HashMap::new(),
    };
    pruner.ensure_builder(&ModuleKey::root());

    if let Some(root_node) = unpruned.get(&ModuleKey::root()).cloned() {
        for (child, child_exp) in root_node.children().iter() {
            pruner.seed_root_child(child, *child_exp, EdgeKind::Direct);
        }
        for (child, child_exp) in root_node.indirect_children().iter() {
            pruner.seed_root_child(child, *child_exp, EdgeKind::Indirect);
        }
    }

    pruner
        .builders
        .into_iter()
        .map(|(key, builder)| (key, builder.build()))
        .collect()
}
