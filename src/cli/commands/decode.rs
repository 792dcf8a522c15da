use crate::cli::commands::{load_config, record_json, PayloadSource};
use crate::decoder::IdentityDecoder;
use crate::errors::AppResult;
use clap::Args;
use tracing::info;

/// Decode one payload and print the identity record as JSON
#[derive(Args)]
pub struct DecodeCommand {
    #[command(flatten)]
    pub source: PayloadSource,

    /// Pretty-print the JSON (overrides output.pretty)
    #[arg(long)]
    pub pretty: bool,

    /// Leave the base64 photo out of the output
    #[arg(long)]
    pub omit_photo: bool,

    /// Add first/middle/last name parts to the output
    #[arg(long)]
    pub split_name: bool,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = load_config()?;
        let payload = self.source.read()?;

        let decoder = IdentityDecoder::new(config.decoder);
        let record = decoder.decode(&payload)?;
        info!("Decoded record: {}", record.summary());

        let value = record_json(
            &record,
            self.omit_photo || config.output.omit_photo,
            self.split_name,
        )?;
        if self.pretty || config.output.pretty {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", serde_json::to_string(&value)?);
        }
        Ok(())
    }
}
