use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Paths (can override CLI)
    pub input: Option<String>,
    pub output: Option<String>,

    // Site header
    pub site_title: Option<String>,
    pub site_description: Option<String>,

    pub metadata: Option<MetadataConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct MetadataConfig {
    pub youtube_api_version: Option<String>,
    pub cache_duration_secs: Option<u64>,
    pub update_frequency: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
