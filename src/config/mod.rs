mod file_config;

pub use file_config::{FileConfig, MetadataConfig};

use crate::catalog::{PublishingHints, SiteInfo};
use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_INPUT_FILE: &str = "Classes.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "data.json";
pub const DEFAULT_SITE_TITLE: &str = "Brahma Vidya Mandir";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Learning Portal";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub site_title: String,
    pub site_description: String,
    pub publishing: PublishingHints,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let input_path = file
            .input
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.input.clone());
        let output_path = file
            .output
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.output.clone());

        if output_path == input_path {
            bail!("Output path must differ from input path: {:?}", input_path);
        }
        if output_path.is_dir() {
            bail!("Output path is a directory: {:?}", output_path);
        }

        let defaults = PublishingHints::default();
        let md = file.metadata.unwrap_or_default();
        let publishing = PublishingHints {
            youtube_api_version: md
                .youtube_api_version
                .unwrap_or(defaults.youtube_api_version),
            cache_duration: md.cache_duration_secs.unwrap_or(defaults.cache_duration),
            update_frequency: md.update_frequency.unwrap_or(defaults.update_frequency),
        };

        Ok(Self {
            input_path,
            output_path,
            site_title: file
                .site_title
                .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string()),
            site_description: file
                .site_description
                .unwrap_or_else(|| DEFAULT_SITE_DESCRIPTION.to_string()),
            publishing,
        })
    }

    pub fn site_info(&self, last_updated: String) -> SiteInfo {
        SiteInfo {
            title: self.site_title.clone(),
            description: self.site_description.clone(),
            last_updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults() {
        let config = AppConfig::resolve(&CliConfig::default(), None).unwrap();

        assert_eq!(config.input_path, PathBuf::from("Classes.csv"));
        assert_eq!(config.output_path, PathBuf::from("data.json"));
        assert_eq!(config.site_title, "Brahma Vidya Mandir");
        assert_eq!(config.site_description, "Learning Portal");
        assert_eq!(config.publishing, PublishingHints::default());
    }

    #[test]
    fn test_resolve_cli_only() {
        let cli = CliConfig {
            input: PathBuf::from("/exports/classes.csv"),
            output: PathBuf::from("/site/data.json"),
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.input_path, PathBuf::from("/exports/classes.csv"));
        assert_eq!(config.output_path, PathBuf::from("/site/data.json"));
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let cli = CliConfig {
            input: PathBuf::from("cli.csv"),
            output: PathBuf::from("cli.json"),
        };
        let file_config = FileConfig {
            output: Some("toml.json".to_string()),
            site_description: Some("Video archive".to_string()),
            metadata: Some(MetadataConfig {
                cache_duration_secs: Some(60),
                ..Default::default()
            }),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, Some(file_config)).unwrap();

        // TOML values should override CLI
        assert_eq!(config.output_path, PathBuf::from("toml.json"));
        assert_eq!(config.site_description, "Video archive");
        assert_eq!(config.publishing.cache_duration, 60);
        // CLI value / defaults used when TOML doesn't specify
        assert_eq!(config.input_path, PathBuf::from("cli.csv"));
        assert_eq!(config.site_title, "Brahma Vidya Mandir");
        assert_eq!(config.publishing.youtube_api_version, "v3");
        assert_eq!(config.publishing.update_frequency, "daily");
    }

    #[test]
    fn test_resolve_same_input_and_output_error() {
        let cli = CliConfig {
            input: PathBuf::from("Classes.csv"),
            output: PathBuf::from("Classes.csv"),
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.unwrap_err().to_string().contains("must differ"));
    }

    #[test]
    fn test_resolve_output_is_directory_error() {
        let temp_dir = TempDir::new().unwrap();
        let cli = CliConfig {
            output: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.unwrap_err().to_string().contains("is a directory"));
    }

    #[test]
    fn test_site_info() {
        let config = AppConfig::resolve(&CliConfig::default(), None).unwrap();
        let info = config.site_info("2026-10-19".to_string());
        assert_eq!(info.title, "Brahma Vidya Mandir");
        assert_eq!(info.description, "Learning Portal");
        assert_eq!(info.last_updated, "2026-10-19");
    }
}
