//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local use.

use std::env;
use std::path::PathBuf;

use crate::models::Coordinates;

/// Zoom level used when centering the map on the user or a workout.
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file backing the key-value store
    pub store_path: PathBuf,
    /// Key the workout collection is stored under
    pub store_key: String,
    /// Map zoom level for centering and panning
    pub map_zoom: u8,
    /// Fixed "current position" (HOME_LAT/HOME_LNG), if configured
    pub home: Option<Coordinates>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("workouts.json"),
            store_key: crate::db::WORKOUTS_KEY.to_string(),
            map_zoom: DEFAULT_MAP_ZOOM,
            home: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let home = match (env::var("HOME_LAT").ok(), env::var("HOME_LNG").ok()) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(
                parse_var("HOME_LAT", &lat)?,
                parse_var("HOME_LNG", &lng)?,
            )),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("HOME_LNG")),
            (None, Some(_)) => return Err(ConfigError::Missing("HOME_LAT")),
        };

        Ok(Self {
            store_path: env::var("WORKOUT_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("workouts.json")),
            store_key: env::var("WORKOUT_STORE_KEY")
                .unwrap_or_else(|_| crate::db::WORKOUTS_KEY.to_string()),
            map_zoom: match env::var("MAP_ZOOM_LEVEL") {
                Ok(raw) => parse_var("MAP_ZOOM_LEVEL", &raw)?,
                Err(_) => DEFAULT_MAP_ZOOM,
            },
            home,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("WORKOUT_STORE_PATH", "/tmp/test-workouts.json");
        env::set_var("MAP_ZOOM_LEVEL", "15");
        env::set_var("HOME_LAT", "51.5");
        env::set_var("HOME_LNG", "-0.12");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.store_path, PathBuf::from("/tmp/test-workouts.json"));
        assert_eq!(config.store_key, "workouts");
        assert_eq!(config.map_zoom, 15);
        assert_eq!(config.home, Some(Coordinates::new(51.5, -0.12)));

        env::set_var("MAP_ZOOM_LEVEL", "very close");
        let err = Config::from_env().expect_err("Malformed zoom should fail");
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "MAP_ZOOM_LEVEL",
                ..
            }
        ));

        env::remove_var("MAP_ZOOM_LEVEL");
        env::remove_var("HOME_LNG");
        let err = Config::from_env().expect_err("Half a home position should fail");
        assert!(matches!(err, ConfigError::Missing("HOME_LNG")));

        env::remove_var("HOME_LAT");
        env::remove_var("WORKOUT_STORE_PATH");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.map_zoom, 13);
        assert_eq!(config.store_key, "workouts");
        assert!(config.home.is_none());
    }
}
