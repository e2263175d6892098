use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

use crate::i18n::{Locale, Preferences, DEFAULT_DECIMALS};
use crate::table::{PageRequest, DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_PAGE_SIZE};

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "Frontend";
const DEFAULT_INDEX_FILE: &str = "index.html";
const DEFAULT_LOCALE: &str = "en";
const DEFAULT_WINDOW_WIDTH: u32 = 1800;
const DEFAULT_WINDOW_HEIGHT: u32 = 1200;
const CONFIG_DIR: &str = "config";

/// Application configuration structure with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Address the asset server binds to
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,

    /// Directory holding the pre-built UI bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// File served for every path that does not name an asset
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Application environment
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Locale tag used until the user picks another one
    #[serde(default = "default_locale")]
    #[validate(custom = "validate_locale")]
    pub default_locale: String,

    /// Rows per table page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    pub page_size: usize,

    /// Highest inventory still counted as low stock
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Fraction digits used for money
    #[serde(default = "default_currency_decimals")]
    #[validate(range(max = 8))]
    pub currency_decimals: u32,

    /// CORS: comma-separated list of allowed origins; unset allows any origin
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    /// Desktop window geometry
    #[serde(default = "default_window_width")]
    #[validate(range(min = 1))]
    pub window_width: u32,
    #[serde(default = "default_window_height")]
    #[validate(range(min = 1))]
    pub window_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            index_file: default_index_file(),
            environment: default_environment(),
            log_level: default_log_level(),
            log_json: false,
            default_locale: default_locale(),
            page_size: default_page_size(),
            low_stock_threshold: default_low_stock_threshold(),
            currency_decimals: default_currency_decimals(),
            cors_allowed_origins: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Configured CORS origins, empty when any origin is allowed
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL the desktop window loads
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn static_dir(&self) -> &Path {
        Path::new(&self.static_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir().join(&self.index_file)
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.default_locale)
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            currency_decimals: self.currency_decimals,
            ..Preferences::new(self.locale())
        }
    }

    pub fn page_request(&self, page: i64) -> PageRequest {
        PageRequest::new(page, self.page_size)
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_static_dir() -> String {
    DEFAULT_STATIC_DIR.to_string()
}

fn default_index_file() -> String {
    DEFAULT_INDEX_FILE.to_string()
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_currency_decimals() -> u32 {
    DEFAULT_DECIMALS
}

fn default_window_width() -> u32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> u32 {
    DEFAULT_WINDOW_HEIGHT
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

fn validate_locale(tag: &str) -> Result<(), ValidationError> {
    let language = tag.split(['-', '_']).next().unwrap_or_default();
    if language.parse::<Locale>().is_ok() {
        Ok(())
    } else {
        let mut err = ValidationError::new("default_locale");
        err.message = Some("Must be one of: en, de".into());
        Err(err)
    }
}

pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("backoffice_dashboard={},tower_http=debug", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .try_init();
    }
}

/// Loads configuration from `./config` for the `RUN_ENV` environment.
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());

    load_config_from(Path::new(CONFIG_DIR), &run_env)
}

/// Layers built-in defaults, `{dir}/default.toml`, `{dir}/{run_env}.toml`
/// and `APP__*` environment variables, then validates the result.
pub fn load_config_from(dir: &Path, run_env: &str) -> Result<AppConfig, AppConfigError> {
    info!("Loading configuration for environment: {}", run_env);

    if !dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            dir.display()
        );
    }

    let config = Config::builder()
        .set_default("environment", run_env)?
        .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
        .add_source(File::with_name(&dir.join(run_env).to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(app_config)
}
