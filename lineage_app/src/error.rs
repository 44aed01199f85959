// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for the shell.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures surfaced to the command line.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// An explicitly requested file is missing.
    #[error("file not found: {path}")]
    MissingFile {
        /// The requested path.
        path: PathBuf,
    },

    /// No node matched the requested name.
    #[error("no lineage named {name:?}")]
    NodeNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The SVG document could not be produced.
    #[error("render error: {message}")]
    Render {
        /// What went wrong.
        message: String,
    },

    /// The assistant client could not be built.
    #[error("assistant error: {0}")]
    Sage(#[from] lineage_sage::SageError),
}

impl AppError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        1
    }

    #[must_use]
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::NodeNotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            AppError::not_found("禅").to_string(),
            r#"no lineage named "禅""#
        );
        let io: AppError = std::io::Error::other("disk").into();
        assert_eq!(io.to_string(), "I/O error: disk");
        assert_eq!(io.exit_code(), 1);
    }
}
