//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a default so an empty file is valid.

pub mod actions;
pub mod hooks;
pub mod logging;
pub mod topo;

use serde::{Deserialize, Serialize};

pub use self::actions::ActionConfig;
pub use self::hooks::HookConfig;
pub use self::logging::LoggingConfig;
pub use self::topo::TopoConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Coordination store settings.
    #[serde(default)]
    pub topo: TopoConfig,
    /// Action queue settings.
    #[serde(default)]
    pub actions: ActionConfig,
    /// Hook invocation settings.
    #[serde(default)]
    pub hooks: HookConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `TABLETMGR__` override file values (e.g. `TABLETMGR__HOOKS__TIMEOUT_SECONDS`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("TABLETMGR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
