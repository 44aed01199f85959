// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layered settings.
//!
//! Precedence, lowest to highest:
//! 1. Compiled defaults
//! 2. A TOML file: the `--config` path, or `./lineage.toml` if it exists
//! 3. Environment variables: `LINEAGE__` prefix, `__` between sections
//!    (`LINEAGE__VIEWPORT__WIDTH=1600`)
//!
//! The API key is read from `GEMINI_API_KEY` or `API_KEY` unless the
//! file or a `LINEAGE__SAGE__API_KEY` override already sets it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use kurbo::Size;
use lineage_sage::SageConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Settings file looked up in the working directory when `--config` is absent.
pub const LOCAL_CONFIG_FILE: &str = "lineage.toml";
/// Variables checked, in order, for the API key.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Size of the rendered drawing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl ViewportSettings {
    /// As a Kurbo size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Assistant connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SageSettings {
    /// API key. Usually left unset and taken from the environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
    /// API root.
    pub endpoint: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SageSettings {
    fn default() -> Self {
        let base = SageConfig::default();
        Self {
            api_key: None,
            model: base.model,
            endpoint: base.endpoint,
            temperature: base.temperature,
            max_output_tokens: base.max_output_tokens,
            timeout_secs: base.timeout.as_secs(),
        }
    }
}

impl SageSettings {
    /// Client settings.
    pub fn to_sage_config(&self) -> SageConfig {
        SageConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Everything the shell can be configured with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dataset to load instead of the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    /// Render size.
    pub viewport: ViewportSettings,
    /// Assistant settings.
    pub sage: SageSettings,
}

impl Settings {
    /// Load from the process environment and the working directory.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) if !path.exists() => {
                return Err(AppError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(LOCAL_CONFIG_FILE)).filter(|p| p.exists()),
        };
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_with(file.as_deref(), &env)
    }

    /// Load with an explicit file and environment map.
    pub fn load_with(file: Option<&Path>, env: &HashMap<String, String>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);
        if let Some(path) = file {
            tracing::debug!(path = %path.display(), "loading settings file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        let prefixed: HashMap<String, String> = env
            .iter()
            .filter(|(k, _)| k.starts_with("LINEAGE__"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        builder = builder.add_source(
            Environment::with_prefix("LINEAGE")
                .separator("__")
                .try_parsing(true)
                .source(Some(prefixed)),
        );

        let mut settings: Self = builder.build()?.try_deserialize()?;
        if settings.sage.api_key.as_deref().is_none_or(str::is_empty) {
            settings.sage.api_key = api_key_from(|var| env.get(var).cloned());
        }
        Ok(settings)
    }

    /// Human-readable dump with the API key redacted.
    pub fn describe(&self) -> String {
        let mut redacted = self.clone();
        if redacted.sage.api_key.is_some() {
            redacted.sage.api_key = Some("<set>".to_owned());
        }
        format!("{redacted:#?}")
    }
}

/// First non-empty value of [`API_KEY_VARS`].
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn defaults_without_any_source() {
        let settings = Settings::load_with(None, &HashMap::new()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.viewport.size(), Size::new(1200.0, 800.0));
        assert_eq!(settings.sage.model, "gemini-2.5-flash");
        assert_eq!(settings.sage.max_output_tokens, 2048);
    }

    #[test]
    fn file_overrides_defaults_and_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[viewport]\nwidth = 1600\nheight = 900\n\n[sage]\nmodel = \"gemini-pro\"\ntemperature = 0.2\n"
        )
        .unwrap();

        let settings = Settings::load_with(
            Some(file.path()),
            &env(&[("LINEAGE__VIEWPORT__HEIGHT", "1000"), ("UNRELATED", "x")]),
        )
        .unwrap();
        assert_eq!(settings.viewport.width, 1600.0);
        assert_eq!(settings.viewport.height, 1000.0);
        assert_eq!(settings.sage.model, "gemini-pro");
        assert_eq!(settings.sage.temperature, 0.2);
        // Untouched keys keep their defaults.
        assert_eq!(settings.sage.timeout_secs, 30);
    }

    #[test]
    fn api_key_falls_back_through_the_environment() {
        let settings =
            Settings::load_with(None, &env(&[("GEMINI_API_KEY", ""), ("API_KEY", "k2")])).unwrap();
        assert_eq!(settings.sage.api_key.as_deref(), Some("k2"));

        let settings =
            Settings::load_with(None, &env(&[("GEMINI_API_KEY", "k1"), ("API_KEY", "k2")])).unwrap();
        assert_eq!(settings.sage.api_key.as_deref(), Some("k1"));

        let settings = Settings::load_with(
            None,
            &env(&[("LINEAGE__SAGE__API_KEY", "k0"), ("GEMINI_API_KEY", "k1")]),
        )
        .unwrap();
        assert_eq!(settings.sage.api_key.as_deref(), Some("k0"));
        assert!(!settings.describe().contains("k0"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Settings::load(Some(&missing)),
            Err(AppError::MissingFile { .. })
        ));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[viewport\nwidth = ").unwrap();
        assert!(matches!(
            Settings::load_with(Some(file.path()), &HashMap::new()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn sage_config_carries_every_field() {
        let mut settings = SageSettings::default();
        settings.api_key = Some("key".into());
        settings.timeout_secs = 7;
        let config = settings.to_sage_config();
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.endpoint, lineage_sage::DEFAULT_ENDPOINT);
    }
}
