//! Run configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tag_series_reader::ReaderConfig;

/// Main run configuration (loaded from a TOML file)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub parsing: ReaderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub tags: Vec<TagConfig>,
}

/// One tag: source path (without `.csv`) and unit instruction
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagConfig {
    pub path: String,
    #[serde(default)]
    pub unit: String,
}

/// Optional time window, both bounds as `dd.mm.yyyy HH:MM:SS` strings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WindowConfig {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Destination file; stdout when absent
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Load a run configuration from a TOML file
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: RunConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
