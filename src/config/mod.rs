use crate::errors::{AppError, AppResult};
use crate::models::task_status::TaskStatus;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory holding the per-day files (`~/` is expanded).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
    #[serde(default)]
    pub default_status: TaskStatus,
    #[serde(default = "default_timer_refresh_ms")]
    pub timer_refresh_ms: u64,
}

fn default_data_dir() -> String {
    ".".to_string()
}
fn default_file_extension() -> String {
    "csv".to_string()
}
fn default_timer_refresh_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_extension: default_file_extension(),
            default_status: TaskStatus::default(),
            timer_refresh_ms: default_timer_refresh_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdaylog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rdaylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdaylog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn timer_refresh(&self) -> Duration {
        Duration::from_millis(self.timer_refresh_ms.max(1))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration file (unless `is_test`) and create the data directory.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = self.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let data = self.data_path();
        fs::create_dir_all(&data)?;
        println!("✅ Data dir:    {:?}", data);

        Ok(())
    }
}
