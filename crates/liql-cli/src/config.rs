//! Config and filter file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use liql::{Filter, FormatOptions};
use serde::Deserialize;
use tracing::debug;

/// Settings read from the `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// API v2 base URL used for `query --url`.
    pub base_url: Option<String>,
    /// Defaults for query string formatting.
    pub format: FormatOptions,
}

impl Config {
    /// Reads a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Loads the file if one was given, otherwise returns the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Config::default()), Config::load)
    }
}

/// Reads a filter from a JSON file (`.json`) or a YAML file (anything else).
pub fn load_filter(path: &Path) -> Result<Filter> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read filter {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let json: serde_json::Value = if is_json {
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse JSON filter {}", path.display()))?
    } else {
        serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse YAML filter {}", path.display()))?
    };
    debug!(path = %path.display(), "loaded filter");
    Ok(Filter::from_json(&json)?)
}

/// Parses an inline JSON filter.
pub fn parse_filter(text: &str) -> Result<Filter> {
    let json: serde_json::Value =
        serde_json::from_str(text).context("--filter is not valid JSON")?;
    Ok(Filter::from_json(&json)?)
}
