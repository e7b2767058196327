//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod auth;
pub mod chat;
pub mod logging;
pub mod notify;
pub mod server;
pub mod session;
pub mod store;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::chat::ChatConfig;
use self::logging::LoggingConfig;
use self::notify::NotifyConfig;
use self::server::ServerConfig;
use self::session::SessionConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Role resolution settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Stock store persistence settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Session registry settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Support chat settings.
    #[serde(default)]
    pub chat: ChatConfig,
    /// Outbound mail settings.
    #[serde(default)]
    pub notify: NotifyConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `STOREFRONT_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("STOREFRONT")
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
