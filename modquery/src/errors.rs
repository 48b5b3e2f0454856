// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contains types that describe errors and diagnostics that `modquery` can return.

use crate::ModuleKey;
use std::error;
use std::fmt;

use Error::*;

/// Error type describing the sorts of errors `modquery` can return.
///
/// Every variant here is a construction-time ([`crate::graph::ModuleGraphBuilder`])
/// problem, not a query-time condition: a query never fails outright, it produces
/// diagnostics instead (see [`Diagnostic`]).
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A dependency edge named a module that was never added via `add_module`.
    UnknownEdgeEndpoint {
        /// The module the edge was declared on.
        from: ModuleKey,
        /// The module the edge pointed at, which has no corresponding `add_module` call.
        to: ModuleKey,
    },
    /// The same module was added to the builder more than once.
    DuplicateModule(ModuleKey),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownEdgeEndpoint { from, to } => write!(
                f,
                "dependency edge {} -> {} names a module that was never added",
                from, to,
            ),
            DuplicateModule(key) => write!(f, "module {} was added more than once", key),
        }
    }
}

impl error::Error for Error {}

/// A structured, droppable warning produced while resolving a query's `from`/`to` sets.
///
/// Diagnostics are collected into a [`crate::query::QueryOutcome`] rather than logged: no
/// diagnostic aborts a query, and the engine always produces a valid (possibly trivial)
/// result graph. A renderer or CLI is free to surface these to the user however it likes.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A user-supplied key is absent from the input graph.
    UnknownModule {
        /// Which set (`from` or `to`) the key was requested in.
        set: RequestedSet,
        /// The key that wasn't found.
        key: ModuleKey,
    },
    /// A user-supplied key exists, but [`crate::graph::filter_unused`] filtered it out
    /// (not loaded, or unused without `include_unused`).
    UnloadedOrUnused {
        /// Which set (`from` or `to`) the key was requested in.
        set: RequestedSet,
        /// The key that was filtered out.
        key: ModuleKey,
    },
    /// After filtering, no `from` nodes remained; the result contains only `ROOT`.
    EmptyFrontier,
}

/// Which query-input set a [`Diagnostic`] refers to.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum RequestedSet {
    /// The query's `from` set.
    From,
    /// The query's `to` set.
    To,
}

impl fmt::Display for RequestedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedSet::From => write!(f, "from"),
            RequestedSet::To => write!(f, "to"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownModule { set, key } => {
                write!(f, "unknown module in {} set: {}, dropped", set, key)
            }
            Diagnostic::UnloadedOrUnused { set, key } => write!(
                f,
                "module in {} set is unloaded or unused: {}, kept anyway",
                set, key
            ),
            Diagnostic::EmptyFrontier => {
                write!(f, "no 'from' modules remained after filtering")
            }
        }
    }
}
