// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Crate-level scenario and property tests, run against [`QueryDriver`](crate::QueryDriver)
//! through the public API rather than against individual components -- the unit-level
//! components each carry their own `#[cfg(test)]` module next to their code.

#[cfg(feature = "proptest1")]
mod property_tests;

mod fixtures;
mod scenario_tests;
