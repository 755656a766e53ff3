use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration at ~/.config/dashcal/config.toml
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Where events come from: a JSON file or an http(s) URL of the event API
    #[serde(default = "default_events_source")]
    pub events_source: String,

    /// Department list from the API (JSON file or URL)
    pub departments_source: Option<String>,

    /// IANA time zone events are placed in; the system zone if unset
    pub timezone: Option<String>,

    #[serde(default)]
    pub grid: GridStyle,

    /// Where the sidebar preference is stored
    pub preferences_path: Option<String>,
}

/// How many weeks the month view shows
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridStyle {
    /// Always six weeks
    #[default]
    Fixed,
    /// Only the weeks the month touches
    Compact,
}

fn default_events_source() -> String {
    "events.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            events_source: default_events_source(),
            departments_source: None,
            timezone: None,
            grid: GridStyle::default(),
            preferences_path: None,
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    /// Configured zone, else the system zone, else UTC.
    pub fn timezone(&self) -> Result<Tz> {
        if let Some(name) = &self.timezone {
            return name
                .parse::<Tz>()
                .map_err(|e| anyhow::anyhow!("Unknown timezone '{}' in config: {}", name, e));
        }

        Ok(iana_time_zone::get_timezone()
            .ok()
            .and_then(|name| name.parse::<Tz>().ok())
            .unwrap_or(Tz::UTC))
    }

    pub fn preferences_path(&self) -> Result<PathBuf> {
        match &self.preferences_path {
            Some(path) => Ok(expand_path(path)),
            None => Ok(config_dir()?.join("preferences.json")),
        }
    }
}

/// Get the config directory path (~/.config/dashcal)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("dashcal");
    Ok(config_dir)
}

/// Get the config file path (~/.config/dashcal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/dashcal/config.toml, or defaults if there is none
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    Config::from_toml(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
