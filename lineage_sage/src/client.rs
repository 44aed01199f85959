// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SageError};

/// Public Gemini API root.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection and sampling settings for [`GeminiClient`].
#[derive(Clone, Debug, PartialEq)]
pub struct SageConfig {
    /// API key. `None` or empty means every request fails with
    /// [`SageError::MissingCredentials`].
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// API root, without a trailing slash.
    pub endpoint: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for SageConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            temperature: 0.7,
            max_output_tokens: 2048,
            timeout: Duration::from_secs(30),
        }
    }
}

impl SageConfig {
    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point at a different API root.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Something that turns a context block and a prompt into text.
pub trait GenerativeClient {
    /// Run one generation. Returns the concatenated response text.
    fn generate(&self, context: &str, prompt: &str) -> Result<String>;
}

impl<C: GenerativeClient + ?Sized> GenerativeClient for &C {
    fn generate(&self, context: &str, prompt: &str) -> Result<String> {
        (**self).generate(context, prompt)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 2],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts joined in order.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| {
                c.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Blocking client for the Gemini `generateContent` call.
///
/// Each [`generate`](GenerativeClient::generate) is exactly one POST with no retry.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    config: SageConfig,
}

impl GeminiClient {
    /// Build a client. Fails only if the HTTP stack cannot be initialized.
    pub fn new(config: SageConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// The settings in use.
    pub fn config(&self) -> &SageConfig {
        &self.config
    }
}

impl GenerativeClient for GeminiClient {
    fn generate(&self, context: &str, prompt: &str) -> Result<String> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(SageError::MissingCredentials)?;

        let request = GenerateRequest {
            contents: [
                Content {
                    role: "user",
                    parts: [TextPart { text: context }],
                },
                Content {
                    role: "user",
                    parts: [TextPart { text: prompt }],
                },
            ],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        let url = self.config.url();
        tracing::debug!(%url, model = %self.config.model, "generateContent");
        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", key)
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(SageError::status(status.as_u16(), body));
        }
        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        Ok(parsed.text())
    }
}
