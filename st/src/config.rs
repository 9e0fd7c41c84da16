//! Configuration for stencil

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::validate::DEFAULT_RESERVED;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory searched for template files
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Default author for generated file headers
    #[serde(default)]
    pub author: String,

    /// Default namespace for generated types
    #[serde(default)]
    pub namespace: String,

    /// Output file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// External link for generated file headers
    #[serde(default)]
    pub link: String,

    /// Words rejected as type names (case-insensitive)
    #[serde(default = "default_reserved_words")]
    pub reserved_words: Vec<String>,
}

fn default_templates_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stencil")
        .join("templates")
}

fn default_extension() -> String {
    crate::DEFAULT_EXTENSION.to_string()
}

fn default_reserved_words() -> Vec<String> {
    DEFAULT_RESERVED.iter().map(|w| w.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            author: String::new(),
            namespace: String::new(),
            extension: default_extension(),
            link: String::new(),
            reserved_words: default_reserved_words(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("stencil").join("config.yml")),
            Some(PathBuf::from("stencil.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.extension, "cs");
        assert!(config.author.is_empty());
        assert!(config.link.is_empty());
        assert!(config.reserved_words.iter().any(|w| w == "class"));
    }

    #[test]
    fn test_partial_yaml_fills_in_defaults() {
        let config: Config = serde_yaml::from_str("author: Ada\n").unwrap();
        assert_eq!(config.author, "Ada");
        assert_eq!(config.extension, "cs");
        assert!(!config.reserved_words.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");

        let mut config = Config::default();
        config.author = "Ada".to_string();
        config.namespace = "Proj".to_string();
        config.templates_dir = temp.path().join("templates");
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.author, "Ada");
        assert_eq!(loaded.namespace, "Proj");
        assert_eq!(loaded.templates_dir, temp.path().join("templates"));
    }
}
