// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `lineage` command-line shell.
//!
//! Loads the lineage dataset (bundled, or `--data`), then renders it as SVG through
//! `lineage_render`, prints detail cards, or talks to the Sage assistant.
//! Settings are layered defaults, TOML file, and `LINEAGE__*` environment; see
//! [`config`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod logging;

pub use error::{AppError, Result};
