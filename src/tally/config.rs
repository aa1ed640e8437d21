use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "products.txt";

/// Configuration for tally, stored as config.json next to the data file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallyConfig {
    /// Name of the catalog data file inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl TallyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TallyError::Io)?;
        let config: TallyConfig =
            serde_json::from_str(&content).map_err(TallyError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TallyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TallyError::Serialization)?;
        fs::write(config_path, content).map_err(TallyError::Io)?;
        Ok(())
    }

    pub fn set_data_file(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() || name.contains(std::path::is_separator) {
            return Err(TallyError::InvalidInput(
                "Data file must be a bare file name".to_string(),
            ));
        }
        self.data_file = name.to_string();
        Ok(())
    }
}
