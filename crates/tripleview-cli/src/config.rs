//! CLI configuration

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tripleview_core::limits::{validate_limit, DEFAULT_RESULT_LIMIT, OVERVIEW_SAMPLE_LIMIT};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TRIPLEVIEW_CONFIG";

/// Dataset document looked up when nothing else is configured
pub const DEFAULT_DATASET: &str = "kg_triples_validated.json";

/// Config path set through `TRIPLEVIEW_CONFIG`, if any
pub fn config_override() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}

/// Get the config file path
pub fn config_file_path() -> PathBuf {
    if let Some(path) = config_override() {
        return path;
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripleview")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset file path or URL
    pub dataset: String,

    /// Maximum triples returned by a query
    pub limit: usize,

    /// Triples sampled for overview, node and find commands
    pub overview_limit: usize,

    /// Default output format: table or json
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            limit: DEFAULT_RESULT_LIMIT,
            overview_limit: OVERVIEW_SAMPLE_LIMIT,
            format: "table".to_string(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it is missing
    /// or unreadable
    pub fn load() -> Self {
        let path = config_file_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the config file, creating its directory if needed
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["dataset", "limit", "overview_limit", "format"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "dataset" => Some(self.dataset.clone()),
            "limit" => Some(self.limit.to_string()),
            "overview_limit" => Some(self.overview_limit.to_string()),
            "format" => Some(self.format.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "dataset" => self.dataset = value.to_string(),
            "limit" => self.limit = parse_limit(value)?,
            "overview_limit" => self.overview_limit = parse_limit(value)?,
            "format" => match value {
                "table" | "json" => self.format = value.to_string(),
                _ => anyhow::bail!("Invalid format '{}'. Use table or json.", value),
            },
            _ => anyhow::bail!(
                "Unknown config key: {}. Available keys: {}",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}

fn parse_limit(value: &str) -> anyhow::Result<usize> {
    let limit: usize = value
        .parse()
        .with_context(|| format!("Invalid limit: {}", value))?;
    validate_limit(limit)?;
    Ok(limit)
}
