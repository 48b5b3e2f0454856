// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inspection queries over a resolved module dependency graph.
//!
//! `modquery` answers three questions about a directed graph of modules (name + version
//! nodes, "depends on" edges):
//!
//! * [`QueryDriver::tree`] -- a structured rendering of the graph from a set of roots,
//!   optionally depth-limited, with duplicated subgraphs marked "unexpanded".
//! * [`QueryDriver::path`] -- a single witness path from any of a `from` set of modules to
//!   any of a `to` set.
//! * [`QueryDriver::all_paths`] -- the sub-DAG of every node lying on some path from
//!   `from` to `to`.
//!
//! The graph itself ([`ModuleGraph`]) is read-only from this crate's perspective: loading
//! one from a real build tool's manifests, parsing command-line options, and rendering a
//! query's result graph to text are all out of scope here and left to callers (see
//! `modquery-cli` for a minimal, JSON-driven stand-in for all three).
//!
//! # Optional features
//!
//! * `proptest1`: property-based testing support for [`ModuleKey`] via
//!   [`proptest`](https://docs.rs/proptest), used by this crate's own determinism tests.
//!
//! # Examples
//!
//! ```
//! use modquery::graph::ModuleGraphBuilder;
//! use modquery::{ModuleKey, QueryDriver, QueryOptions};
//! use std::collections::HashSet;
//!
//! let mut builder = ModuleGraphBuilder::new();
//! builder
//!     .add_module(ModuleKey::root(), true, true)
//!     .add_module(ModuleKey::new("left-pad", "1.0.0"), true, true)
//!     .add_dep(ModuleKey::root(), ModuleKey::new("left-pad", "1.0.0"), true);
//! let graph = builder.build().unwrap();
//!
//! let driver = QueryDriver::new(&graph);
//! let outcome = driver.tree(&HashSet::from([ModuleKey::root()]), &QueryOptions::default());
//! assert!(outcome.result().contains_key(&ModuleKey::root()));
//! ```

#![warn(missing_docs)]

mod debug_ignore;
pub mod errors;
pub mod graph;
mod maybe_complete_set;
mod module_key;
mod options;
pub mod query;
mod result_node;
pub(crate) mod sorted_set;
#[cfg(test)]
mod unit_tests;

pub use errors::Error;
pub use maybe_complete_set::MaybeCompleteSet;
pub use module_key::ModuleKey;
pub use options::QueryOptions;
pub use query::{ModuleInfo, QueryDriver, QueryOutcome};
pub use result_node::{Expanded, ResultNode, ResultNodeBuilder};
