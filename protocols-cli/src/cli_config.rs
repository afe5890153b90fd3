//! Optional user configuration for the protocols CLI
//!
//! Read from `--config <path>` or `config.yaml` in the platform config
//! directory. A missing default file means "use defaults"; a missing
//! explicit file is an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use protocols_core::catalog::{ResourceTier, SortDirection, SortKey};

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliConfig {
    /// Tier selected when `--tier` is not given
    pub default_tier: ResourceTier,

    /// Sort key selected when `--sort` is not given
    pub default_sort: SortKey,

    /// Explicit direction; `None` uses the sort key's natural direction
    pub default_direction: Option<SortDirection>,

    /// Catalog YAML to use instead of the embedded catalog
    pub catalog_path: Option<PathBuf>,

    /// Prefix for printed detail links
    pub route_prefix: Option<String>,
}

impl CliConfig {
    /// Load from an explicit path, or from the default location if present
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Self::load_from_path(path);
        }

        match Self::default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path, defaulting when it is absent
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty file parses as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(content).context("Invalid config YAML")
    }

    /// Get the default config file path
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "protocols", "protocols")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("protocols")))
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.default_tier, ResourceTier::Max);
        assert_eq!(config.default_sort, SortKey::Importance);
        assert_eq!(config.default_direction, None);
        assert!(config.catalog_path.is_none());
        assert!(config.route_prefix.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = CliConfig::from_yaml(
            r#"
defaultTier: average
defaultDirection: asc
routePrefix: https://example.org/protocols/
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            CliConfig {
                default_tier: ResourceTier::Average,
                default_sort: SortKey::Importance,
                default_direction: Some(SortDirection::Ascending),
                catalog_path: None,
                route_prefix: Some("https://example.org/protocols/".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CliConfig::from_yaml("").unwrap(), CliConfig::default());
        assert_eq!(CliConfig::from_yaml("\n  \n").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(CliConfig::from_yaml("defaultTier: premium").is_err());
        assert!(CliConfig::from_yaml("defaultSort: price").is_err());
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        // Absent file falls back to defaults
        assert_eq!(CliConfig::load_from_path(&path).unwrap(), CliConfig::default());

        std::fs::write(&path, "defaultSort: ease\ncatalogPath: /tmp/catalog.yaml\n").unwrap();
        let config = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(config.default_sort, SortKey::Ease);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.yaml")));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.yaml");

        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
