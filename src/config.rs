use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the public TheCocktailDB v1 API (test key "1").
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1/";

/// Top-level application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Cocktail API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Favourites store settings
    #[serde(default)]
    pub favourites: FavouritesConfig,
}

/// Configuration for the cocktail API client
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Configuration for the on-disk favourites store
#[derive(Debug, Deserialize, Clone)]
pub struct FavouritesConfig {
    /// Path of the JSON file holding favourites
    #[serde(default = "default_favourites_path")]
    pub path: PathBuf,
}

impl Default for FavouritesConfig {
    fn default() -> Self {
        Self {
            path: default_favourites_path(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_favourites_path() -> PathBuf {
    PathBuf::from("favourites.json")
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with DRINKIT__ prefix
    /// 2. drinkit.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: DRINKIT__API__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("drinkit").required(false))
        // Use double underscore for nested: DRINKIT__FAVOURITES__PATH
        .add_source(
            Environment::with_prefix("DRINKIT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
