use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::activity::DesiredActivity;
use crate::error::BookingError;

const CONFIG_DIR_NAME: &str = "feelbook";
const CONFIG_FILE_NAME: &str = "config.toml";
const ACTIVITIES_DIR_NAME: &str = "activities";

/// Disk-backed configuration schema (`config.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub settings: Settings,
    pub urls: Urls,
    /// Opaque header map sent on catalog and booking requests.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub day_offset: i64,
    pub facility: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Urls {
    pub base_url: String,
    pub list: String,
    pub participate: String,
}

impl Urls {
    pub fn list_url(&self) -> String {
        format!("{}{}", self.base_url, self.list)
    }

    /// Booking endpoint for one activity instance. Plain concatenation; the
    /// remote expects the opaque id verbatim, never URL-encoded.
    pub fn participate_url(&self, activity_id: &str) -> String {
        format!("{}{}{}", self.base_url, self.participate, activity_id)
    }
}

/// A declarative activity schedule (`activities/<name>.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySchedule {
    pub activities: Vec<DesiredActivity>,
}

/// Directory holding `config.toml` and the `activities/` schedules.
///
/// `FEELBOOK_CONFIG_DIR` wins when set; otherwise the per-user config
/// directory, falling back to `./config` for checkout-local runs.
pub fn config_directory() -> PathBuf {
    if let Ok(dir) = env::var("FEELBOOK_CONFIG_DIR") {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    if let Some(base) = dirs::config_dir() {
        return base.join(CONFIG_DIR_NAME);
    }
    PathBuf::from("config")
}

pub fn config_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// Load `config.toml` from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, BookingError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    let raw = fs::read_to_string(&path).map_err(|err| {
        BookingError::config(format!("cannot read {}: {err}", path.display()))
    })?;
    Ok(toml::from_str(&raw)?)
}

/// Load an activity schedule.
///
/// `source` is either a path to a TOML file or a bare schedule name resolved
/// under `<config dir>/activities/<name>.toml`.
pub fn load_activities(source: &str) -> Result<ActivitySchedule, BookingError> {
    let direct = Path::new(source);
    let path = if direct.exists() {
        direct.to_path_buf()
    } else {
        config_directory()
            .join(ACTIVITIES_DIR_NAME)
            .join(format!("{source}.toml"))
    };
    let raw = fs::read_to_string(&path).map_err(|err| {
        BookingError::config(format!("cannot read {}: {err}", path.display()))
    })?;
    Ok(toml::from_str(&raw)?)
}
