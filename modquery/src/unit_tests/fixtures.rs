// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Graphs for Scenarios A-F, shared by [`super::scenario_tests`].

use crate::graph::{ModuleGraph, ModuleGraphBuilder};
use crate::ModuleKey;

pub(super) fn m(name: &str) -> ModuleKey {
    ModuleKey::new(name, "1.0.0")
}

/// Scenario B: `ROOT->A->B`, `ROOT->A->C`, `C->D`.
pub(super) fn scenario_b() -> ModuleGraph {
    let mut builder = ModuleGraphBuilder::new();
    builder
        .add_module(ModuleKey::root(), true, true)
        .add_module(m("a"), true, true)
        .add_module(m("b"), true, true)
        .add_module(m("c"), true, true)
        .add_module(m("d"), true, true)
        .add_dep(ModuleKey::root(), m("a"), true)
        .add_dep(m("a"), m("b"), true)
        .add_dep(m("a"), m("c"), true)
        .add_dep(m("c"), m("d"), true);
    builder.build().expect("fixture graph is well-formed")
}

/// Scenario D: `ROOT->A->B->A` (a cycle back to `A`).
pub(super) fn scenario_d() -> ModuleGraph {
    let mut builder = ModuleGraphBuilder::new();
    builder
        .add_module(ModuleKey::root(), true, true)
        .add_module(m("a"), true, true)
        .add_module(m("b"), true, true)
        .add_dep(ModuleKey::root(), m("a"), true)
        .add_dep(m("a"), m("b"), true)
        .add_dep(m("b"), m("a"), true);
    builder.build().expect("fixture graph is well-formed")
}

/// Scenario E: `ROOT->A->T`, `ROOT->B->T`, `ROOT->C` (C unrelated to the target).
pub(super) fn scenario_e() -> ModuleGraph {
    let mut builder = ModuleGraphBuilder::new();
    builder
        .add_module(ModuleKey::root(), true, true)
        .add_module(m("a"), true, true)
        .add_module(m("b"), true, true)
        .add_module(m("c"), true, true)
        .add_module(m("t"), true, true)
        .add_dep(ModuleKey::root(), m("a"), true)
        .add_dep(ModuleKey::root(), m("b"), true)
        .add_dep(ModuleKey::root(), m("c"), true)
        .add_dep(m("a"), m("t"), true)
        .add_dep(m("b"), m("t"), true);
    builder.build().expect("fixture graph is well-formed")
}

/// Scenario F: the Scenario A chain, but `B` is `is_used=false`.
pub(super) fn scenario_f() -> ModuleGraph {
    let mut builder = ModuleGraphBuilder::new();
    builder
        .add_module(ModuleKey::root(), true, true)
        .add_module(m("a"), true, true)
        .add_module(m("b"), false, true)
        .add_module(m("c"), true, true)
        .add_dep(ModuleKey::root(), m("a"), true)
        .add_dep(m("a"), m("b"), true)
        .add_dep(m("b"), m("c"), true);
    builder.build().expect("fixture graph is well-formed")
}

/// A five-module chain `ROOT->A->B->C->D` used by the depth-limit scenario.
pub(super) fn chain_of_five() -> ModuleGraph {
    let mut builder = ModuleGraphBuilder::new();
    builder
        .add_module(ModuleKey::root(), true, true)
        .add_module(m("a"), true, true)
        .add_module(m("b"), true, true)
        .add_module(m("c"), true, true)
        .add_module(m("d"), true, true)
        .add_dep(ModuleKey::root(), m("a"), true)
        .add_dep(m("a"), m("b"), true)
        .add_dep(m("b"), m("c"), true)
        .add_dep(m("c"), m("d"), true);
    builder.build().expect("fixture graph is well-formed")
}
