use crate::cli::commands::{load_config, PayloadSource};
use crate::decoder::debug_display::SecureQrInspection;
use crate::decoder::IdentityDecoder;
use crate::detection::{detect, DetectedFormat};
use crate::errors::{AppError, AppResult};
use clap::Args;

/// Show the byte-level stages of a Secure QR payload
#[derive(Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub source: PayloadSource,

    /// Print the inspection as JSON instead of logging it
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = load_config()?;
        let payload = self.source.read()?;

        let format = detect(&payload);
        if format != DetectedFormat::SecureNumeric {
            return Err(AppError::InvalidInput(format!(
                "inspect only handles Secure QR payloads, got {}",
                format
            )));
        }

        let decoder = IdentityDecoder::new(config.decoder);
        let inspection = SecureQrInspection::from_payload(&decoder, &payload)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&inspection)?);
        } else {
            inspection.log();
            println!(
                "layout={} inflated={} segments={} tail={}",
                inspection.layout_version,
                inspection.inflated_len,
                inspection.segments.len(),
                inspection.tail_len
            );
        }
        Ok(())
    }
}
