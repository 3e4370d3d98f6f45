use std::fs;
use std::path::PathBuf;

use serde_derive::{Deserialize, Serialize};

use crate::normalizer::Bias;
use crate::util::app_dirs;

const CONFIG_FILE: &str = "config.toml";

#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone)]
#[serde(default)]
pub struct Config {
    /// Bias for words that can't be written in a single charset
    pub bias: Bias,
    /// Reject lowercase and accented input instead of normalizing it
    pub check_input: bool,
    pub no_color: bool,
}

impl Config {
    /// Reads the user's config file, or falls back to defaults when there is none.
    pub fn new() -> Result<Config, String> {
        let config_file = match Self::get_file_path() {
            Some(config_file) => config_file,
            None => return Ok(Config::default()),
        };

        if !config_file.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_file)
            .map_err(|err| format!("{}: {}", config_file.to_string_lossy(), err))?;

        Config::from_toml(&contents)
            .map_err(|err| format!("{}: {}", config_file.to_string_lossy(), err))
    }

    pub fn from_toml(contents: &str) -> Result<Config, String> {
        toml::from_str(contents).map_err(|err| err.to_string())
    }

    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string(self).map_err(|err| err.to_string())
    }

    /// Writes the config file unless one already exists.
    pub fn save(&self) -> Result<(), String> {
        let config_file = match Self::get_file_path() {
            Some(config_file) => config_file,
            None => return Ok(()),
        };

        if config_file.exists() {
            return Ok(());
        }

        if let Some(config_dir) = config_file.parent() {
            fs::create_dir_all(config_dir).map_err(|err| err.to_string())?;
        }

        fs::write(&config_file, self.to_toml()?).map_err(|err| err.to_string())
    }

    fn get_file_path() -> Option<PathBuf> {
        app_dirs::config_file(CONFIG_FILE)
    }
}
