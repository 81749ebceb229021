use crate::error::{BookopediaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for bookopedia, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Address book file, relative to the data dir unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Log filter used when `RUST_LOG` is not set (e.g. "warn", "bookopedia=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookopediaError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(BookopediaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookopediaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(BookopediaError::Serialization)?;
        fs::write(config_path, content).map_err(BookopediaError::Io)?;
        Ok(())
    }

    /// Where the address book lives for a given data dir.
    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        let file = Path::new(&self.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.as_ref().join(file)
        }
    }
}
