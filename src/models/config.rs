//! Configuration model loaded from external sources.

use std::path::Path;

use config::Config;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(range(min = 1))]
    pub port: u16,
    /// Tera glob, e.g. `templates/**/*`.
    #[validate(length(min = 1))]
    pub templates_dir: String,
    #[validate(length(min = 1))]
    pub assets_dir: String,
    /// JSON file with the vehicle collection. The bundled dataset is used when unset.
    #[serde(default)]
    pub vehicles_file: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Source(#[from] config::ConfigError),

    #[error("invalid settings: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl ServerConfig {
    /// Loads `<dir>/default`, then the optional `<dir>/<app_env>` profile, then
    /// `APP_*` environment variables.
    pub fn load(config_dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(config::File::with_name(
                &config_dir.join("default").to_string_lossy(),
            ))
            .add_source(
                config::File::with_name(&config_dir.join(app_env).to_string_lossy())
                    .required(false),
            )
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        let server_config = settings.try_deserialize::<ServerConfig>()?;
        server_config.validate()?;

        Ok(server_config)
    }
}
