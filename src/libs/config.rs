//! Configuration for the taskcard application.
//!
//! Settings live in `config.json` inside the per-user data directory resolved
//! by [`DataStorage`]. The file is optional: without it every setting takes its
//! default, and keys missing from an existing file are filled in the same way.
//! Command-line flags override whatever the file says.
//!
//! ## Settings
//!
//! - **`date_format`**: chrono strftime pattern for due dates
//!   (default [`DEFAULT_DATE_FORMAT`], e.g. "Jan 1, 2024")
//! - **`derive_overdue`**: recompute overdue flags from today's date instead of
//!   trusting the flag in the task data (default `false`)
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskcard::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.derive_overdue = true;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::formatter::DEFAULT_DATE_FORMAT;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Pattern used to render due dates on task cards.
    pub date_format: String,

    /// Recompute each task's overdue flag against the current date before
    /// rendering. When off, the flag from the task data is used as is.
    pub derive_overdue: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            derive_overdue: false,
        }
    }
}

impl Config {
    /// Location of the configuration file.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid JSON.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = Self::path()?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }
}
