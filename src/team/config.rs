use crate::team::types::Team;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub teams: Vec<Team>,
    pub telemetry_enabled: bool,
    pub log_filter: String,
    pub simulated_latency_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            teams: Vec::new(),
            telemetry_enabled: true,
            log_filter: "info".to_string(),
            simulated_latency_ms: 400,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter configuration written on first launch.
    pub fn example() -> Self {
        Self {
            teams: vec![
                Team::new("VGVhbTox", "platform"),
                Team::new("VGVhbToy", "search").with_parent("VGVhbTox"),
                Team::new("VGVhbToz", "search-ranking").with_parent("VGVhbToy"),
                Team::new("VGVhbTo0", "security"),
            ],
            ..Self::default()
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("teamdesk");
    Ok(app_config_dir.join("config.jsonc"))
}

pub fn load_config() -> Result<AppConfig> {
    load_or_init_config(&get_config_path()?)
}

/// Loads the config, writing the example config first if none exists yet.
pub fn load_or_init_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::example();
        save_config_to(path, &config)?;
        return Ok(config);
    }
    load_config_from(path)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AppConfig = serde_json::from_reader(stripped)?;

    Ok(config)
}

/// Saves the configuration to the given file.
/// Note: Comments in the original file will not be preserved.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
