use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;

use crate::codec::inflate::DEFAULT_MAX_INFLATED_BYTES;

/// Application configuration loaded from identity-qr.toml or environment variables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub decoder: DecoderConfig,
    pub output: OutputConfig,
}

/// Limits applied to every decode call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Longest raw payload accepted, in bytes
    pub max_payload_len: usize,
    /// Ceiling on Secure QR inflated output, in bytes
    pub max_inflated_bytes: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_payload_len: 64 * 1024,
            max_inflated_bytes: DEFAULT_MAX_INFLATED_BYTES,
        }
    }
}

/// CLI output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON records
    pub pretty: bool,
    /// Drop the base64 photo from printed records
    pub omit_photo: bool,
}

impl AppConfig {
    /// Load configuration from identity-qr.toml and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let config_file = env::var("IDQR_CONFIG").unwrap_or_else(|_| "identity-qr".to_string());
        Self::load_from(&config_file)
    }

    /// Load using an explicit config file name (extension optional, file may be absent)
    pub fn load_from(config_file: &str) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let config = Config::builder()
            .set_default(
                "decoder.max_payload_len",
                defaults.decoder.max_payload_len as i64,
            )?
            .set_default(
                "decoder.max_inflated_bytes",
                defaults.decoder.max_inflated_bytes as i64,
            )?
            .set_default("output.pretty", defaults.output.pretty)?
            .set_default("output.omit_photo", defaults.output.omit_photo)?
            .add_source(File::with_name(config_file).required(false))
            // IDQR_DECODER__MAX_PAYLOAD_LEN, IDQR_OUTPUT__PRETTY, ...
            .add_source(
                config::Environment::with_prefix("IDQR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.decoder.max_payload_len == 0 {
            return Err(ConfigError::Message(
                "decoder.max_payload_len must be greater than zero".to_string(),
            ));
        }
        if app_config.decoder.max_inflated_bytes == 0 {
            return Err(ConfigError::Message(
                "decoder.max_inflated_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(app_config)
    }
}
