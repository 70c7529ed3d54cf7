use std::path::Path;

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_MAX_INPUT_BYTES, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};
use crate::types::TypeListStyle;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub codec: CodecConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Inputs larger than this many bytes are rejected before parsing.
    pub max_input_bytes: usize,
    /// TYPE rendering used by cards built from user-supplied values.
    pub type_list_style: TypeListStyle,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an
    /// optional TOML file. Environment variables take precedence over the file.
    ///
    /// When `path` is `None` the file `rolodex.toml` in the working directory
    /// is used if it exists.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE).required(false),
        };

        let settings = defaults()?
            // TOML file
            .add_source(file)
            // Env file
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values the deserializer cannot express as types.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for a zero input limit or an
    /// empty log level.
    pub fn validate(&self) -> CoreResult<()> {
        if self.codec.max_input_bytes == 0 {
            return Err(CoreError::InvalidConfiguration(
                "codec.max_input_bytes must be greater than zero".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let max_input_bytes = i64::try_from(DEFAULT_MAX_INPUT_BYTES)?;

    Ok(Config::builder()
        .set_default("logging.level", DEFAULT_LOG_LEVEL)?
        .set_default("codec.max_input_bytes", max_input_bytes)?
        .set_default("codec.type_list_style", TypeListStyle::default().as_str())?)
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables and the
/// optional configuration file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    if let Err(error) = dotenvy::dotenv() {
        tracing::trace!(%error, "no .env file loaded");
    }

    let settings = Settings::load(path)?;
    tracing::debug!(
        level = %settings.logging.level,
        max_input_bytes = settings.codec.max_input_bytes,
        "configuration loaded"
    );
    Ok(settings)
}
