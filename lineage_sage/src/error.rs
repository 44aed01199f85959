// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Result alias for assistant operations.
pub type Result<T> = std::result::Result<T, SageError>;

/// Everything that can go wrong between a question and an answer.
#[derive(Debug, Error)]
pub enum SageError {
    /// Transport failure, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, as text.
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No API key was configured.
    #[error("missing API key")]
    MissingCredentials,

    /// The service answered without any text.
    #[error("empty response")]
    EmptyResponse,
}

impl SageError {
    #[must_use]
    pub(crate) fn status(code: u16, body: impl Into<String>) -> Self {
        Self::Status {
            code,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_code_and_body() {
        let err = SageError::status(503, "overloaded");
        assert_eq!(err.to_string(), "service returned 503: overloaded");
    }

    #[test]
    fn json_errors_convert() {
        let err: SageError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, SageError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
