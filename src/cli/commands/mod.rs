//! CLI subcommands
//!
//! Each command is a clap `Args` struct with a `run()` method.

pub mod batch;
pub mod decode;
pub mod detect;
pub mod inspect;
pub mod show_config;

use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::types::IdentityRecord;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Where a single payload comes from: argument, file, or stdin
#[derive(Args, Debug, Clone, Default)]
pub struct PayloadSource {
    /// Payload text (reads stdin when neither this nor --input is given)
    pub payload: Option<String>,

    /// Read the payload from a file
    #[arg(long, short = 'i', conflicts_with = "payload")]
    pub input: Option<PathBuf>,
}

impl PayloadSource {
    pub fn read(&self) -> AppResult<String> {
        let text = match (&self.payload, &self.input) {
            (Some(payload), _) => payload.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        if text.trim().is_empty() {
            return Err(AppError::InvalidInput("empty payload".to_string()));
        }
        Ok(text)
    }
}

/// Load configuration, wrapping failures as a configuration error
pub fn load_config() -> AppResult<AppConfig> {
    AppConfig::load()
        .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))
}

/// Render a record as JSON, applying output settings
pub fn record_json(
    record: &IdentityRecord,
    omit_photo: bool,
    split_name: bool,
) -> AppResult<serde_json::Value> {
    let mut value = serde_json::to_value(record)?;
    if let Some(object) = value.as_object_mut() {
        if omit_photo {
            object.remove("photo");
        }
        if split_name {
            let parts = crate::normalizer::NameParts::split(&record.name);
            object.insert("nameParts".to_string(), serde_json::to_value(parts)?);
        }
    }
    Ok(value)
}
