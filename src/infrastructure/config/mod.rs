//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "./conf.yaml";

const DEFAULT_SOURCE_LANG: &str = "auto";
const DEFAULT_TARGET_LANG: &str = "en";

/// Bot settings, immutable once loaded
#[derive(Clone, Serialize)]
pub struct Settings {
    pub token: String,
    pub source_lang: String,
    pub target_lang: String,
    pub start_message: String,
}

/// On-disk shape of the config file. Every field is optional here so that a
/// missing token can be told apart from a malformed document.
#[derive(Debug, Deserialize)]
struct RawSettings {
    token: Option<String>,
    source_lang: Option<String>,
    target_lang: Option<String>,
    start_message: Option<String>,
    #[serde(flatten)]
    unknown: BTreeMap<String, serde_yaml::Value>,
}

impl Settings {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Unreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document has nothing in it, token included
        if content.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        let raw: RawSettings = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;

        for key in raw.unknown.keys() {
            tracing::warn!("Ignoring unknown config key: {}", key);
        }

        let token = raw.token.ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            token,
            source_lang: raw.source_lang.unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string()),
            target_lang: raw.target_lang.unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string()),
            start_message: raw.start_message.unwrap_or_default(),
        })
    }

    /// Template written by `init-config`
    pub fn sample() -> Self {
        Self {
            token: "123456789:REPLACE-WITH-YOUR-BOT-TOKEN".to_string(),
            source_lang: DEFAULT_SOURCE_LANG.to_string(),
            target_lang: DEFAULT_TARGET_LANG.to_string(),
            start_message: "Send /t <text> and I will translate it.".to_string(),
        }
    }

    /// Token prefix that is safe to put in logs
    pub fn token_hint(&self) -> String {
        let prefix: String = self.token.chars().take(8).collect();
        format!("{}...", prefix)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("token", &self.token_hint())
            .field("source_lang", &self.source_lang)
            .field("target_lang", &self.target_lang)
            .field("start_message", &self.start_message)
            .finish()
    }
}
