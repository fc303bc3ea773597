use crate::commands::list::DEFAULT_PAGE_SIZE;
use crate::error::{PhoneBookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE: &str = "default.csv";

/// Configuration for phonebook, stored in `config.json` in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhoneBookConfig {
    /// File opened when the user just presses Enter at the file prompt
    #[serde(default = "default_file")]
    pub default_file: String,

    /// Rows per page when listing; 0 lists everything without pausing
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_file() -> String {
    DEFAULT_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PhoneBookConfig {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            page_size: default_page_size(),
        }
    }
}

impl PhoneBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhoneBookError::Io)?;
        let config: PhoneBookConfig =
            serde_json::from_str(&content).map_err(PhoneBookError::Serialization)?;
        Ok(config)
    }
}
