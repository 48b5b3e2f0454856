// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The JSON wire format this CLI accepts as a stand-in for a real build tool's
//! manifest/lockfile reader -- out of scope for `modquery` itself (see its crate docs).
//!
//! ```json
//! {
//!   "modules": [
//!     {"name": "a", "version": "1.0.0", "used": true, "loaded": true,
//!      "deps": [{"name": "b", "version": "2.0.0", "used": true}]}
//!   ]
//! }
//! ```
//!
//! The root module is implicit: it is always present, always used and loaded, and its
//! dependencies are whichever top-level `modules` entries are never named as a `deps`
//! target of another entry's `used: true` edge stay reachable only if declared as a dep
//! of `"$root"` -- callers name the root explicitly as `"$root"` in a `deps` entry's
//! `name` field to attach a module directly under it.

use color_eyre::eyre::{eyre, Result};
use modquery::graph::{ModuleGraph, ModuleGraphBuilder};
use modquery::ModuleKey;
use serde::Deserialize;

const ROOT_NAME: &str = "$root";

#[derive(Debug, Deserialize)]
pub struct GraphDocument {
    modules: Vec<ModuleDocument>,
}

#[derive(Debug, Deserialize)]
struct ModuleDocument {
    name: String,
    version: String,
    #[serde(default = "default_true")]
    used: bool,
    #[serde(default = "default_true")]
    loaded: bool,
    #[serde(default)]
    deps: Vec<DepDocument>,
}

#[derive(Debug, Deserialize)]
struct DepDocument {
    name: String,
    version: String,
    #[serde(default = "default_true")]
    used: bool,
}

fn default_true() -> bool {
    true
}

fn key_for(name: &str, version: &str) -> ModuleKey {
    if name == ROOT_NAME {
        ModuleKey::root()
    } else {
        ModuleKey::new(name, version)
    }
}

impl GraphDocument {
    /// Parses a [`GraphDocument`] from JSON text.
    pub fn parse_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| eyre!("invalid graph document: {}", e))
    }

    /// Builds a [`ModuleGraph`] from this document via [`ModuleGraphBuilder`].
    pub fn build(&self) -> Result<ModuleGraph> {
        let mut builder = ModuleGraphBuilder::new();
        builder.add_module(ModuleKey::root(), true, true);

        for module in &self.modules {
            let key = key_for(&module.name, &module.version);
            // The root module is always declared implicitly above; a document entry
            // named "$root" exists only to attach deps under it, not to redeclare it.
            if key.is_root() {
                continue;
            }
            builder.add_module(key, module.used, module.loaded);
        }

        for module in &self.modules {
            let from = key_for(&module.name, &module.version);
            for dep in &module.deps {
                builder.add_dep(from.clone(), key_for(&dep.name, &dep.version), dep.used);
            }
        }

        builder
            .build()
            .map_err(|e| eyre!("malformed graph document: {}", e))
    }
}
