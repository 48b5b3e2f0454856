// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The output graph a query produces.

use crate::ModuleKey;
use std::collections::BTreeMap;

/// Whether an edge's target carries its own subtree in the result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Expanded {
    /// The child has its own entry in the result map, with its subtree attached.
    True,
    /// The child is a leaf stub: either already visited elsewhere, or a cycle
    /// back-edge. It never contributes an entry of its own.
    False,
}

/// One node of a query's result graph.
///
/// `children` and `indirectChildren` are `BTreeMap`s, not `HashMap`s, specifically so
/// that iterating them walks `ModuleKey`'s total order for free -- the same reason
/// `guppy`'s own `examples/print_by_level.rs` reaches for a `BTreeMap` to keep output
/// deterministic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResultNode {
    is_target: bool,
    is_target_parent: bool,
    children: BTreeMap<ModuleKey, Expanded>,
    indirect_children: BTreeMap<ModuleKey, Expanded>,
}

impl ResultNode {
    /// Whether this node is in the user-supplied `to` set.
    pub fn is_target(&self) -> bool {
        self.is_target
    }

    /// Whether this node has at least one direct child that is a target.
    pub fn is_target_parent(&self) -> bool {
        self.is_target_parent
    }

    /// Direct-edge children, in `ModuleKey` order.
    pub fn children(&self) -> &BTreeMap<ModuleKey, Expanded> {
        &self.children
    }

    /// Synthetic (elided-path) children, in `ModuleKey` order.
    pub fn indirect_children(&self) -> &BTreeMap<ModuleKey, Expanded> {
        &self.indirect_children
    }

    /// Iterates over all children, direct then indirect, without distinguishing them.
    pub fn all_children(&self) -> impl Iterator<Item = (&ModuleKey, Expanded)> {
        self.children
            .iter()
            .chain(self.indirect_children.iter())
            .map(|(k, e)| (k, *e))
    }
}

/// Accumulates a [`ResultNode`] under construction.
///
/// Builders exist so that downstream readers never observe a partially populated
/// adjacency list: a `ResultNode` is only ever produced, complete, by
/// [`ResultNodeBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct ResultNodeBuilder {
    is_target: bool,
    is_target_parent: bool,
    children: BTreeMap<ModuleKey, Expanded>,
    indirect_children: BTreeMap<ModuleKey, Expanded>,
}

impl ResultNodeBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether this node is in the user-supplied `to` set.
    pub fn set_target(&mut self, is_target: bool) -> &mut Self {
        self.is_target = is_target;
        self
    }

    /// Marks this node as having at least one direct target child.
    pub fn mark_target_parent(&mut self) -> &mut Self {
        self.is_target_parent = true;
        self
    }

    /// Whether [`ResultNodeBuilder::mark_target_parent`] has been called.
    pub fn is_target_parent(&self) -> bool {
        self.is_target_parent
    }

    /// Adds a direct-edge child.
    pub fn add_child(&mut self, key: ModuleKey, expanded: Expanded) -> &mut Self {
        self.children.insert(key, expanded);
        self
    }

    /// Adds a synthetic (indirect) child.
    pub fn add_indirect_child(&mut self, key: ModuleKey, expanded: Expanded) -> &mut Self {
        self.indirect_children.insert(key, expanded);
        self
    }

    /// Commits this builder into an immutable [`ResultNode`].
    pub fn build(self) -> ResultNode {
        ResultNode {
            is_target: self.is_target,
            is_target_parent: self.is_target_parent,
            children: self.children,
            indirect_children: self.indirect_children,
        }
    }
}
