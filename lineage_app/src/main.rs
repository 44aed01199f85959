// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `lineage` binary entry point.

use clap::Parser;
use lineage_app::cli::Cli;
use lineage_app::commands::execute_command;
use lineage_app::logging::setup_logging;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
