// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based determinism check over randomly generated small DAGs, gated behind the
//! `proptest1` feature the same way the rest of this crate gates its proptest support.

use crate::graph::ModuleGraphBuilder;
use crate::{ModuleKey, QueryDriver, QueryOptions};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_module_names() -> impl Strategy<Value = Vec<String>> {
    vec("[a-e]{1,3}", 1..=6).prop_map(|mut names| {
        names.sort();
        names.dedup();
        names
    })
}

proptest! {
    /// For any small DAG, running `tree` twice yields equal result maps, and every
    /// node's children iterate in `ModuleKey` order.
    ///
    /// Edges only ever go from a lower name-index to a higher one, which keeps the
    /// generated graph acyclic -- cycle handling is covered separately by the
    /// `scenario_d_*` tests, this test is only about determinism.
    #[test]
    fn tree_is_deterministic_over_random_dags(
        names in arb_module_names(),
        edge_bits in vec(any::<bool>(), 0..30),
    ) {
        let mut builder = ModuleGraphBuilder::new();
        builder.add_module(ModuleKey::root(), true, true);
        for name in &names {
            builder.add_module(ModuleKey::new(name.clone(), "1.0.0"), true, true);
        }

        let mut bit_iter = edge_bits.into_iter();
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                if bit_iter.next().unwrap_or(false) {
                    builder.add_dep(
                        ModuleKey::new(names[i].clone(), "1.0.0"),
                        ModuleKey::new(names[j].clone(), "1.0.0"),
                        true,
                    );
                }
            }
        }
        if let Some(first_name) = names.first() {
            builder.add_dep(
                ModuleKey::root(),
                ModuleKey::new(first_name.clone(), "1.0.0"),
                true,
            );
        }

        let graph = builder.build().expect("generated graph is well-formed");
        let driver = QueryDriver::new(&graph);
        let from = HashSet::from([ModuleKey::root()]);
        let options = QueryOptions::default();

        let first = driver.tree(&from, &options);
        let second = driver.tree(&from, &options);
        prop_assert_eq!(first.result(), second.result());

        for node in first.result().values() {
            let keys: Vec<_> = node.children().keys().collect();
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(keys, sorted);
        }
    }
}
