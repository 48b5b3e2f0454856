// Copyright (c) The cargo-guppy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::eyre::Result;
use modquery_cli::Args;

fn main() -> Result<()> {
    color_eyre::install()?;
    Args::parse().exec()
}
