use std::{fs, path::Path, path::PathBuf};

use chroma_common::{palette::standard_options, ChromaError, ColorOption, Palette, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// JSON-lines vote file. Votes are kept in memory when set to `null`.
    #[serde(default = "default_store_path")]
    pub store_path: Option<PathBuf>,
    #[serde(default = "standard_options")]
    pub palette: Vec<ColorOption>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// File receiving vote/rejection events only.
    #[serde(default)]
    pub audit_log: Option<PathBuf>,
}

fn default_store_path() -> Option<PathBuf> {
    Some(PathBuf::from("data/votes.jsonl"))
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            palette: standard_options(),
            log_filter: default_log_filter(),
            audit_log: None,
        }
    }
}

impl NodeConfig {
    /// Builds the palette, which also validates it.
    pub fn palette(&self) -> Result<Palette> {
        Palette::new(self.palette.clone())
    }

    pub fn validate(&self) -> Result<()> {
        self.palette()?;
        if self.log_filter.trim().is_empty() {
            return Err(ChromaError::Config("log_filter is empty".into()));
        }
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ChromaError::Config(e.to_string()))?;
        if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref())?;
        let parsed = serde_json::from_str::<NodeConfig>(&data).map_err(|e| {
            ChromaError::Config(format!("{}: {}", path.as_ref().display(), e))
        })?;
        parsed.validate()?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = NodeConfig {
            store_path: None,
            palette: vec![
                ColorOption::new("Red", "#ef4444"),
                ColorOption::new("Blue", "#3b82f6"),
            ],
            log_filter: "info".into(),
            audit_log: Some(PathBuf::from("logs/votes.log")),
        };
        config.save_to_file(&path).unwrap();

        let loaded = NodeConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.palette().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let loaded = NodeConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, NodeConfig::default());
        assert_eq!(loaded.store_path, Some(PathBuf::from("data/votes.jsonl")));
        assert_eq!(loaded.palette().unwrap(), Palette::standard());
        assert_eq!(loaded.log_filter, "warn");
    }

    #[test]
    fn test_null_store_path_means_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"store_path":null}"#).unwrap();

        let loaded = NodeConfig::load_from_file(&path).unwrap();
        assert!(loaded.store_path.is_none());
    }

    #[test]
    fn test_rejects_bad_palette() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r##"{"palette":[{"name":"Red","color_value":"#f00"},{"name":"Red","color_value":"#e00"}]}"##,
        )
        .unwrap();

        assert!(matches!(
            NodeConfig::load_from_file(&path),
            Err(ChromaError::InvalidPalette(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            NodeConfig::load_from_file(&path),
            Err(ChromaError::Config(_))
        ));
    }
}
