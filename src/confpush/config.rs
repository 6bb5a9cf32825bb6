use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::tool::DEFAULT_BIN;

/// Directory the config file lives in, relative to the working directory.
pub const CONFIG_DIR: &str = ".confpush";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ENV_FILE: &str = ".env";

/// Configuration for confpush, stored in .confpush/config.json.
///
/// The file is optional and hand-edited; a missing file means defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfpushConfig {
    /// Binary to invoke for each setting (e.g. "firebase")
    #[serde(default = "default_tool_bin")]
    pub tool_bin: String,

    /// Env file to read when none is given on the command line
    #[serde(default = "default_env_file")]
    pub env_file: String,
}

fn default_tool_bin() -> String {
    DEFAULT_BIN.to_string()
}

fn default_env_file() -> String {
    DEFAULT_ENV_FILE.to_string()
}

impl Default for ConfpushConfig {
    fn default() -> Self {
        Self {
            tool_bin: default_tool_bin(),
            env_file: default_env_file(),
        }
    }
}

impl ConfpushConfig {
    /// Load config from the given directory, or return defaults if not found.
    /// A present but malformed file is an error, not a silent default.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ConfpushConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    ///
    /// The binary itself never writes config (the file is hand-edited);
    /// this is here for tooling and test fixtures that set one up.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
