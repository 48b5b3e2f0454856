// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::ModuleGraph;
use crate::{ModuleKey, QueryOptions};

/// Pure predicate over `(key, graph, options)`: returns false ("exclude") iff any of:
///
/// - `key` is `ModuleKey::root()` (`ROOT` is never treated as a listed target).
/// - the module is not used and `options.include_unused` is false.
/// - the module is not loaded and `allow_not_loaded` is false.
///
/// Returns true ("include") for every other candidate, including keys this graph
/// doesn't contain at all -- callers are expected to have already turned "unknown to
/// this graph" into a [`crate::Diagnostic::UnknownModule`] before reaching this
/// function; `filter_unused` itself only encodes the resolver-outcome rules.
pub fn filter_unused(
    graph: &ModuleGraph,
    key: &ModuleKey,
    options: &QueryOptions,
    allow_not_loaded: bool,
) -> bool {
    if key.is_root() {
        return false;
    }
    let module = match graph.module(key) {
        Some(module) => module,
        None => return true,
    };
    if !module.is_used() && !options.include_unused {
        return false;
    }
    if !module.is_loaded() && !allow_not_loaded {
        return false;
    }
    true
}
