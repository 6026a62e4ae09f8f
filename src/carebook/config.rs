use crate::error::{CarebookError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "carebook.json";

/// Configuration for carebook, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarebookConfig {
    /// Where patient data is saved. Relative paths are resolved against the
    /// directory the config was loaded from.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for CarebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl CarebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CarebookError::Io)?;
        let config: CarebookConfig =
            serde_json::from_str(&content).map_err(CarebookError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CarebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CarebookError::Serialization)?;
        fs::write(config_path, content).map_err(CarebookError::Io)?;
        Ok(())
    }

    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            config_dir.as_ref().join(&self.data_file)
        }
    }
}

/// The platform config directory, e.g. `~/.config/carebook` on Linux.
pub fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "carebook", "carebook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CarebookError::Config("Could not determine config dir".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = CarebookConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, CarebookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let config = CarebookConfig {
            data_file: PathBuf::from("clinic.json"),
        };
        config.save(dir.path()).unwrap();

        let loaded = CarebookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_key_uses_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();
        let loaded = CarebookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_data_path_resolution() {
        let dir = tempdir().unwrap();
        let relative = CarebookConfig::default();
        assert_eq!(relative.data_path(dir.path()), dir.path().join("carebook.json"));

        let absolute = CarebookConfig {
            data_file: dir.path().join("elsewhere.json"),
        };
        assert_eq!(
            absolute.data_path("/ignored"),
            dir.path().join("elsewhere.json")
        );
    }
}
