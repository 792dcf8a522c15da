use crate::cli::commands::{load_config, record_json};
use crate::decoder::{DecodeError, FailureKind, IdentityDecoder};
use crate::errors::AppResult;
use crate::types::IdentityRecord;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Decode every non-blank line of a file as an independent payload
#[derive(Args)]
pub struct BatchCommand {
    /// File with one payload per line
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Leave the base64 photo out of the output
    #[arg(long)]
    pub omit_photo: bool,
}

/// Failure detail printed for a line that did not decode
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Outcome for one input line (1-based)
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub line: usize,
    pub outcome: Result<IdentityRecord, DecodeError>,
}

impl BatchCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = load_config()?;
        let text = std::fs::read_to_string(&self.input)?;
        info!("Batch decoding {}", self.input.display());

        let decoder = IdentityDecoder::new(config.decoder);
        let entries = decode_lines(&decoder, &text).await?;

        let omit_photo = self.omit_photo || config.output.omit_photo;
        let mut failures = 0usize;
        for entry in &entries {
            let value = match &entry.outcome {
                Ok(record) => serde_json::json!({
                    "line": entry.line,
                    "ok": record_json(record, omit_photo, false)?,
                }),
                Err(e) => {
                    failures += 1;
                    serde_json::json!({
                        "line": entry.line,
                        "error": BatchFailure {
                            kind: e.kind(),
                            message: e.to_string(),
                        },
                    })
                }
            };
            println!("{}", serde_json::to_string(&value)?);
        }

        info!(
            "Batch complete: {} decoded, {} failed",
            entries.len() - failures,
            failures
        );
        if failures > 0 {
            warn!("{} line(s) failed to decode", failures);
        }
        Ok(())
    }
}

/// Decode each non-blank line on the blocking pool, keeping input order
pub async fn decode_lines(decoder: &IdentityDecoder, text: &str) -> AppResult<Vec<BatchEntry>> {
    let tasks = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let decoder = decoder.clone();
            let payload = line.to_string();
            tokio::task::spawn_blocking(move || BatchEntry {
                line: index + 1,
                outcome: decoder.decode(&payload),
            })
        });

    let mut entries = Vec::new();
    for joined in futures::future::join_all(tasks).await {
        entries.push(joined?);
    }
    Ok(entries)
}
