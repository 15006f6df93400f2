use std::{env, fmt, path::PathBuf, str::FromStr, time::Duration};

use places_client::ServiceConfig;
use region_search::{Coordinate, ALL_CATEGORIES};

const INITIAL_LAT: f64 = 35.6892;
const INITIAL_LON: f64 = 51.3890;
const INITIAL_ZOOM: f64 = 12.;
const LOG_DIR: &str = "logs";

/// Startup settings of the map, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub initial_center: Coordinate,
    pub initial_zoom: f64,
    pub initial_category: String,
    pub log_dir: PathBuf,
    pub strings_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            initial_center: Coordinate::new(INITIAL_LAT, INITIAL_LON),
            initial_zoom: INITIAL_ZOOM,
            initial_category: ALL_CATEGORIES.to_string(),
            log_dir: PathBuf::from(LOG_DIR),
            strings_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Unset keys keep
    /// their default.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = var("PLACES_API_URL") {
            config.service.api_url = url;
        }
        if let Some(secs) = var("PLACES_TIMEOUT_SECS") {
            config.service.timeout = Duration::from_secs(parse("PLACES_TIMEOUT_SECS", &secs)?);
        }
        if let Some(lat) = var("MAP_INITIAL_LAT") {
            config.initial_center.latitude = parse("MAP_INITIAL_LAT", &lat)?;
        }
        if let Some(lon) = var("MAP_INITIAL_LON") {
            config.initial_center.longitude = parse("MAP_INITIAL_LON", &lon)?;
        }
        if let Some(zoom) = var("MAP_INITIAL_ZOOM") {
            config.initial_zoom = parse("MAP_INITIAL_ZOOM", &zoom)?;
        }
        if let Some(category) = var("INITIAL_CATEGORY") {
            config.initial_category = category;
        }
        if let Some(dir) = var("LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        config.strings_path = var("UI_STRINGS").map(PathBuf::from);

        Ok(config)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { key: String, value: String },
    Strings(String), // The strings file could not be read
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
            ConfigError::Strings(msg) => write!(f, "Invalid strings file: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<csv::Error> for ConfigError {
    fn from(err: csv::Error) -> Self {
        ConfigError::Strings(err.to_string())
    }
}
