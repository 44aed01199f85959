// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use lineage_hierarchy::LineageNode;

use crate::client::{GeminiClient, GenerativeClient, SageConfig};
use crate::error::{Result, SageError};
use crate::prompt::{context_for, prompt_for};

/// Shown when no API key is configured.
pub const MISSING_KEY_MESSAGE: &str =
    "API Key is missing. Please check your environment configuration.";
/// Shown when the service answered without text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "No response generated.";
/// Shown for every other failure.
pub const APOLOGY_MESSAGE: &str =
    "I apologize, I cannot access the wisdom archives at this moment. Please try again later.";

/// Answers questions about lineage nodes.
///
/// [`explain`](Self::explain) always returns text for the user; failures are logged
/// and replaced by a fixed message. [`try_explain`](Self::try_explain) exposes the
/// underlying error instead.
#[derive(Debug, Clone)]
pub struct Sage<C = GeminiClient> {
    client: C,
}

impl Sage<GeminiClient> {
    /// A sage backed by Gemini.
    pub fn gemini(config: SageConfig) -> Result<Self> {
        Ok(Self::new(GeminiClient::new(config)?))
    }
}

impl<C: GenerativeClient> Sage<C> {
    /// Wrap any generative client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The wrapped client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Ask about `node`. `None` or a blank question requests a short summary.
    pub fn try_explain(&self, node: &LineageNode, question: Option<&str>) -> Result<String> {
        let context = context_for(node);
        let prompt = prompt_for(node, question);
        let text = self.client.generate(&context, &prompt)?;
        if text.trim().is_empty() {
            return Err(SageError::EmptyResponse);
        }
        Ok(text)
    }

    /// Like [`try_explain`](Self::try_explain), but never fails.
    pub fn explain(&self, node: &LineageNode, question: Option<&str>) -> String {
        match self.try_explain(node, question) {
            Ok(text) => text,
            Err(SageError::MissingCredentials) => {
                tracing::warn!("no API key configured");
                MISSING_KEY_MESSAGE.to_owned()
            }
            Err(SageError::EmptyResponse) => {
                tracing::debug!(node = %node.name, "empty response");
                EMPTY_RESPONSE_MESSAGE.to_owned()
            }
            Err(err) => {
                tracing::error!(node = %node.name, error = %err, "assistant request failed");
                APOLOGY_MESSAGE.to_owned()
            }
        }
    }
}
