//! Settings for the web-search operations.
//!
//! Stored as TOML. Every key is optional; an empty document yields the
//! defaults, which produce exactly the fixed `'simple'` / `rank` SQL.
//!
//! ```toml
//! text_search_config = "simple"
//! rank_alias = "rank"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_TEXT_SEARCH_CONFIG: &str = "simple";
pub const DEFAULT_RANK_ALIAS: &str = "rank";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSearchConfig {
    /// PostgreSQL text search configuration passed to `websearch_to_tsquery`.
    pub text_search_config: String,
    /// Alias used by `selectWebSearchRank` when the caller gives none.
    pub rank_alias: String,
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            text_search_config: DEFAULT_TEXT_SEARCH_CONFIG.into(),
            rank_alias: DEFAULT_RANK_ALIAS.into(),
        }
    }
}

impl WebSearchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Inlined into SQL as a quoted literal, so keep it to regconfig names.
        let valid_part = |s: &str| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        };
        let parts: Vec<&str> = self.text_search_config.split('.').collect();
        if parts.len() > 2 || !parts.iter().all(|p| valid_part(p)) {
            return Err(ConfigError::Validation(format!(
                "text_search_config '{}' must be a lowercase regconfig name, optionally schema-qualified",
                self.text_search_config
            )));
        }

        if self.rank_alias.trim().is_empty() {
            return Err(ConfigError::Validation("rank_alias cannot be empty".into()));
        }

        Ok(())
    }

    /// The configuration as it appears in generated SQL, e.g. `'simple'`.
    pub fn text_search_config_literal(&self) -> String {
        format!("'{}'", self.text_search_config)
    }
}
