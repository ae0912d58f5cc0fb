//! Feed configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! base_url = "https://stooq.com"
//! output = "public/data/markets.json"
//! timeout_secs = 20
//! ```

use crate::data::FeedError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://stooq.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; GithubActionsDashboard/1.0)";
pub const DEFAULT_OUTPUT: &str = "data/markets.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Scheme and host of the CSV provider.
    pub base_url: String,
    pub user_agent: String,
    /// Output file, relative to the working directory unless absolute.
    pub output: PathBuf,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout_secs: None,
        }
    }
}

impl FeedConfig {
    /// Load from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, FeedError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FeedError::Config(format!("read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, FeedError> {
        toml::from_str(content).map_err(|e| FeedError::Config(format!("parse config TOML: {e}")))
    }
}
