//! Place Atlas
//!
//! Retrieves structured facts about historically significant places
//! (prisons, police offices, field offices, memorials, …) from the Wikidata
//! SPARQL endpoint and reshapes the result set into per-category collections
//! suitable for rendering as map markers.
//!
//! Pipeline: query text → [`wikidata::WikidataClient`] → normalization →
//! [`places::PlaceClassifier`], composed by [`places::PlacesService`].

pub mod places;
pub mod wikidata;

#[cfg(test)]
pub(crate) mod test_helpers;

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub wikidata: WikidataYamlConfig,
}

/// Wikidata endpoint configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WikidataYamlConfig {
    pub url: String,
    pub user_agent: String,
}

impl Default for WikidataYamlConfig {
    fn default() -> Self {
        Self {
            url: "https://query.wikidata.org/sparql".into(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    // The Wikimedia endpoints reject requests without an identifying agent.
    format!("place-atlas/{}", env!("CARGO_PKG_VERSION"))
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub wikidata_url: String,
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables only.
    /// Equivalent to from_yaml_and_env(None).
    pub fn from_env() -> Result<Self> {
        Self::from_yaml_and_env(None)
    }

    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "config.yaml" in CWD. If the file doesn't
    /// exist, falls back to pure env var / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        let yaml = Self::load_yaml(yaml_path);

        Ok(Self {
            wikidata_url: std::env::var("WIKIDATA_URL").unwrap_or(yaml.wikidata.url),
            user_agent: std::env::var("WIKIDATA_USER_AGENT").unwrap_or(yaml.wikidata.user_agent),
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("config.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_yaml_config_loading() {
        let yaml = r#"
wikidata:
  url: https://sparql.example.org/query
  user_agent: "atlas-test/0.0"
"#;
        let config: YamlConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.wikidata.url, "https://sparql.example.org/query");
        assert_eq!(config.wikidata.user_agent, "atlas-test/0.0");
    }

    #[test]
    fn test_yaml_defaults() {
        let config = YamlConfig::default();
        assert_eq!(config.wikidata.url, "https://query.wikidata.org/sparql");
        assert!(config.wikidata.user_agent.starts_with("place-atlas/"));
    }

    /// Combined test for YAML file loading and env var overrides.
    /// Runs as a single test to avoid parallel env var race conditions.
    #[test]
    fn test_yaml_and_env_lifecycle() {
        fn clear_env() {
            std::env::remove_var("WIKIDATA_URL");
            std::env::remove_var("WIKIDATA_USER_AGENT");
        }

        // --- Phase 1: YAML values loaded correctly ---
        let yaml = r#"
wikidata:
  url: https://yaml-host/sparql
"#;
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        clear_env();

        let config = Config::from_yaml_and_env(Some(&file_path)).unwrap();
        assert_eq!(config.wikidata_url, "https://yaml-host/sparql");
        // Default kept where the YAML is silent
        assert!(config.user_agent.starts_with("place-atlas/"));

        // --- Phase 2: Env vars override YAML ---
        std::env::set_var("WIKIDATA_URL", "https://env-host/sparql");
        std::env::set_var("WIKIDATA_USER_AGENT", "env-agent/1.0");

        let config = Config::from_yaml_and_env(Some(&file_path)).unwrap();
        assert_eq!(config.wikidata_url, "https://env-host/sparql");
        assert_eq!(config.user_agent, "env-agent/1.0");

        clear_env();

        // --- Phase 3: No YAML file → defaults ---
        let nonexistent = Path::new("/tmp/nonexistent-config-12345.yaml");
        let config = Config::from_yaml_and_env(Some(nonexistent)).unwrap();
        assert_eq!(config.wikidata_url, "https://query.wikidata.org/sparql");
    }
}
