//! Application configuration schemas.
//!
//! Configuration is deserialized from a TOML file via the `config` crate
//! and overlaid with `PAGEKIT__*` environment variables.

pub mod logging;
pub mod table;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::table::TableConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sort and pagination settings.
    #[serde(default)]
    pub table: TableConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Environment variables prefixed with `PAGEKIT`
    /// (nested with `__`, e.g. `PAGEKIT__TABLE__DEFAULT_ROWS_PER_PAGE`)
    /// override file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PAGEKIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
