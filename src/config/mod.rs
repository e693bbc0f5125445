use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, resolve_data_file};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// How long `add` waits for another writer to release the data file.
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_notes_width")]
    pub notes_width: usize,
}

fn default_data_file() -> String {
    Config::data_file_default().to_string_lossy().to_string()
}
fn default_lock_timeout_ms() -> u64 {
    2000
}
fn default_chart_width() -> usize {
    40
}
fn default_notes_width() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            lock_timeout_ms: default_lock_timeout_ms(),
            chart_width: default_chart_width(),
            notes_width: default_notes_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rmaintlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rmaintlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmaintlog.conf")
    }

    /// Return the default path of the maintenance data file
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("maintenance_log.csv")
    }

    /// Data file with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize the configuration file and return the resulting config.
    ///
    /// A relative `custom_file` is resolved against the current directory,
    /// as for every other command.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_file: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let data_path = match custom_file {
            Some(name) => resolve_data_file(name)?,
            None => Self::data_file_default(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
