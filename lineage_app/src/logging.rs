// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Map `-d` repetitions to a level. Warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber. `RUST_LOG` directives refine the verbosity level.
///
/// Safe to call more than once; only the first call installs anything.
pub fn setup_logging(verbosity: u8) {
    let level = level_for(verbosity);
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    let installed = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(%level, "logging initialized");
    }
}
