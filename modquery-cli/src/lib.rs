// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A command-line frontend for `modquery`.
//!
//! `modquery-cli` reads a JSON-described module graph (see [`wire`]) and runs one of the
//! three queries `modquery` implements, printing the result as an indented tree (see
//! [`render`]).
//!
//! # Commands
//!
//! * `tree`: structured rendering of the graph from a set of roots
//! * `path`: a single witness path from a `from` set to a `to` set
//! * `all-paths`: the sub-DAG of every node on some path from `from` to `to`
//! * `show`: a direct attribute lookup on one module

pub mod render;
pub mod wire;

use clap::{Args as ClapArgs, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use modquery::{ModuleKey, QueryDriver, QueryOptions};
use render::{Renderer, TextRenderer};
use std::collections::HashSet;
use std::fs;
use wire::GraphDocument;

/// `modquery` command-line options.
#[derive(Debug, Parser)]
#[clap(about = "Inspection queries over a module dependency graph")]
pub struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the dependency tree rooted at the given modules.
    Tree {
        #[clap(flatten)]
        graph: GraphOpts,
        #[clap(flatten)]
        query: QueryOpts,
        /// Modules to root the tree at, as `name@version` (repeatable).
        #[clap(long = "from", required = true)]
        from: Vec<String>,
    },
    /// Print a single witness path from `--from` to `--to`.
    Path {
        #[clap(flatten)]
        graph: GraphOpts,
        #[clap(flatten)]
        query: QueryOpts,
        #[clap(long = "from", required = true)]
        from: Vec<String>,
        #[clap(long = "to", required = true)]
        to: Vec<String>,
    },
    /// Print the sub-DAG of every node on some path from `--from` to `--to`.
    AllPaths {
        #[clap(flatten)]
        graph: GraphOpts,
        #[clap(flatten)]
        query: QueryOpts,
        #[clap(long = "from", required = true)]
        from: Vec<String>,
        #[clap(long = "to", required = true)]
        to: Vec<String>,
    },
    /// Print a single module's attributes.
    Show {
        #[clap(flatten)]
        graph: GraphOpts,
        /// The module to look up, as `name@version`.
        module: String,
    },
}

#[derive(Debug, ClapArgs)]
struct GraphOpts {
    /// Path to a JSON graph document (see `modquery_cli::wire`).
    #[clap(long = "graph")]
    graph: String,
}

#[derive(Debug, ClapArgs)]
struct QueryOpts {
    /// Maximum result depth, measured in direct edges from the root. Unset means
    /// unbounded.
    #[clap(long = "depth")]
    depth: Option<usize>,
    /// Include modules that version resolution discarded.
    #[clap(long = "include-unused")]
    include_unused: bool,
    /// Echo cycle back-edges into the result instead of silently dropping them.
    #[clap(long = "cycles")]
    cycles: bool,
}

impl QueryOpts {
    fn to_options(&self) -> QueryOptions {
        QueryOptions {
            depth: self.depth.unwrap_or_else(QueryOptions::unbounded_depth),
            include_unused: self.include_unused,
            cycles: self.cycles,
        }
    }
}

fn parse_key(spec: &str) -> Result<ModuleKey> {
    if spec == "$root" {
        return Ok(ModuleKey::root());
    }
    let (name, version) = spec
        .split_once('@')
        .ok_or_else(|| eyre!("module spec '{}' is not of the form name@version", spec))?;
    Ok(ModuleKey::new(name, version))
}

fn parse_keys(specs: &[String]) -> Result<HashSet<ModuleKey>> {
    specs.iter().map(|s| parse_key(s)).collect()
}

fn load_graph(opts: &GraphOpts) -> Result<modquery::graph::ModuleGraph> {
    let text = fs::read_to_string(&opts.graph)
        .map_err(|e| eyre!("couldn't read graph document {}: {}", opts.graph, e))?;
    GraphDocument::parse_json(&text)?.build()
}

fn print_diagnostics(outcome: &modquery::QueryOutcome) {
    for diagnostic in outcome.diagnostics() {
        eprintln!("warning: {}", diagnostic);
    }
}

impl Args {
    /// Runs the selected subcommand, printing its result to stdout.
    pub fn exec(&self) -> Result<()> {
        let renderer = TextRenderer;
        match &self.command {
            Command::Tree { graph, query, from } => {
                let graph = load_graph(graph)?;
                let driver = QueryDriver::new(&graph);
                let outcome = driver.tree(&parse_keys(from)?, &query.to_options());
                print_diagnostics(&outcome);
                println!("{}", renderer.render(outcome.result()));
            }
            Command::Path {
                graph,
                query,
                from,
                to,
            } => {
                let graph = load_graph(graph)?;
                let driver = QueryDriver::new(&graph);
                let outcome =
                    driver.path(&parse_keys(from)?, &parse_keys(to)?, &query.to_options());
                print_diagnostics(&outcome);
                println!("{}", renderer.render(outcome.result()));
            }
            Command::AllPaths {
                graph,
                query,
                from,
                to,
            } => {
                let graph = load_graph(graph)?;
                let driver = QueryDriver::new(&graph);
                let outcome =
                    driver.all_paths(&parse_keys(from)?, &parse_keys(to)?, &query.to_options());
                print_diagnostics(&outcome);
                println!("{}", renderer.render(outcome.result()));
            }
            Command::Show { graph, module } => {
                let graph = load_graph(graph)?;
                let driver = QueryDriver::new(&graph);
                let key = parse_key(module)?;
                match driver.show(&key) {
                    Some(info) => println!(
                        "{}: used={} loaded={} deps={} (+{} unused) dependants={}",
                        info.key(),
                        info.is_used(),
                        info.is_loaded(),
                        info.dep_count(),
                        info.unused_dep_count(),
                        info.dependant_count(),
                    ),
                    None => println!("{}: not found", key),
                }
            }
        }
        Ok(())
    }
}
