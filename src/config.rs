use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::model::SearchMode;
use crate::service::DEFAULT_BASE_URL;

/// Main application configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Remote recipe service settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Where favorites are persisted
    #[serde(default)]
    pub storage: StorageConfig,
    /// Search issued once at startup
    #[serde(default)]
    pub startup: StartupConfig,
}

/// Configuration for the recipe service client
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Configuration for the favorites store
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON file per key
    #[serde(default = "default_storage_dir")]
    pub dir: String,
    /// Key the favorites list is stored under
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StartupConfig {
    #[serde(default = "default_query")]
    pub default_query: String,
    /// Mode label (`ingredient`, `meal` or `category`)
    #[serde(default = "default_mode")]
    pub default_mode: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            default_query: default_query(),
            default_mode: default_mode(),
        }
    }
}

impl StartupConfig {
    pub fn mode(&self) -> SearchMode {
        SearchMode::from_label(&self.default_mode)
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("recipe-finder/{}", env!("CARGO_PKG_VERSION"))
}

fn default_storage_dir() -> String {
    ".recipe-finder".to_string()
}

fn default_storage_key() -> String {
    "favorites".to_string()
}

fn default_query() -> String {
    "chicken".to_string()
}

fn default_mode() -> String {
    "ingredient".to_string()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the priority order.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-finder").required(false))
        // Use double underscore for nested: RECIPE_FINDER__STORAGE__DIR
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
