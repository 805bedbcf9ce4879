pub(crate) mod auth_config;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod log_level;
pub(crate) mod logging_config;
pub(crate) mod preferences_config;
pub(crate) mod storage_kind;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use preferences_config::PreferencesConfig;
pub use storage_kind::StorageKind;

pub const CONFIG_DIR_ENV: &str = "ITSM_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".itsm";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
