// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Explore the lineage tree of Buddhist schools: render it, read about a school, ask the Sage.
#[derive(Parser, Debug)]
#[command(name = "lineage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(
    after_help = "Maps the historical development of Buddhist schools from the original teachings \
of Shakyamuni Buddha to modern global movements. Use `show` for details about a lineage and \
`ask` or `chat` to put deeper questions to the Sage."
)]
pub struct Cli {
    /// Settings file (default: ./lineage.toml when present)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Dataset JSON replacing the bundled lineages
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Debug output, repeat for more (-d -d -d)
    #[arg(short = 'd', long = "debug", global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Render the tree as an SVG document
    Render {
        /// Output file (default: stdout)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// Width in pixels (overrides settings)
        #[arg(long)]
        width: Option<f64>,
        /// Height in pixels (overrides settings)
        #[arg(long)]
        height: Option<f64>,
    },

    /// Print the detail card of a lineage
    Show {
        /// Name or translation of the lineage (default: the root)
        name: Option<String>,
    },

    /// Ask the Sage one question; without a question, get a short summary
    Ask {
        /// Name or translation of the lineage
        name: String,
        /// The question, as one or more words
        question: Vec<String>,
    },

    /// Talk with the Sage about a lineage (`/quit` to leave)
    Chat {
        /// Name or translation of the lineage
        name: String,
    },

    /// List every lineage as an indented outline
    List,

    /// Print the effective settings
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_and_subcommands_parse() {
        let cli = Cli::try_parse_from([
            "lineage", "-dd", "--data", "x.json", "ask", "禅宗", "Who", "founded", "it?",
        ])
        .unwrap();
        assert_eq!(cli.debug, 2);
        assert_eq!(cli.data, Some(PathBuf::from("x.json")));
        assert_eq!(
            cli.command,
            Commands::Ask {
                name: "禅宗".into(),
                question: vec!["Who".into(), "founded".into(), "it?".into()],
            }
        );

        let cli =
            Cli::try_parse_from(["lineage", "render", "--width", "800", "--config", "c.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(
            cli.command,
            Commands::Render {
                output: None,
                width: Some(800.0),
                height: None,
            }
        );
    }
}
