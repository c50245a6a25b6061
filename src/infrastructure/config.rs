//! Configuration management

use crate::domain::CategorySet;
use crate::error::{HitokotoError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_HITOKOTO_ENDPOINT: &str = "https://v1.hitokoto.cn";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings as they may appear in the optional TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub category: Option<String>,
    pub file_name: Option<String>,
    pub gh_token: Option<String>,
    pub gist_id: Option<String>,
    pub hitokoto_endpoint: Option<String>,
    pub github_api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            HitokotoError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(toml::from_str(&contents)?)
    }
}

/// Resolved settings for one run
#[derive(Clone)]
pub struct Config {
    pub categories: CategorySet,
    pub file_name: String,
    pub gh_token: String,
    pub gist_id: String,
    pub hitokoto_endpoint: String,
    pub github_api_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("categories", &self.categories)
            .field("file_name", &self.file_name)
            .field("gh_token", &"<redacted>")
            .field("gist_id", &self.gist_id)
            .field("hitokoto_endpoint", &self.hitokoto_endpoint)
            .field("github_api_url", &self.github_api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Load config from an optional TOML file, then apply the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge file settings with variables from `lookup`; variables win.
    ///
    /// Values are trimmed and blank values count as unset.
    pub fn resolve<F>(file: FileConfig, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, fallback: Option<String>| -> Option<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .or_else(|| fallback.map(|v| v.trim().to_string()))
                .filter(|v| !v.is_empty())
        };

        let gh_token = pick("GH_TOKEN", file.gh_token).ok_or_else(|| {
            HitokotoError::Config("GH_TOKEN is not set. Please add GH_TOKEN environment.".to_string())
        })?;

        let gist_id = pick("GIST_ID", file.gist_id)
            .ok_or_else(|| HitokotoError::Config("GIST_ID is not set".to_string()))?;

        let timeout_secs = match lookup("HTTP_TIMEOUT_SECS").map(|v| v.trim().to_string()) {
            Some(raw) if !raw.is_empty() => raw.parse::<u64>().map_err(|_| {
                HitokotoError::Config(format!(
                    "Invalid HTTP_TIMEOUT_SECS: '{}'. Expected a whole number of seconds",
                    raw
                ))
            })?,
            _ => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };
        if timeout_secs == 0 {
            return Err(HitokotoError::Config(
                "HTTP timeout must be at least one second".to_string(),
            ));
        }

        Ok(Config {
            categories: CategorySet::parse(&pick("CATEGORY", file.category).unwrap_or_default()),
            file_name: pick("FILE_NAME", file.file_name).unwrap_or_default(),
            gh_token,
            gist_id,
            hitokoto_endpoint: pick("HITOKOTO_ENDPOINT", file.hitokoto_endpoint)
                .unwrap_or_else(|| DEFAULT_HITOKOTO_ENDPOINT.to_string()),
            github_api_url: pick("GITHUB_API_URL", file.github_api_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
