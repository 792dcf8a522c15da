use crate::cli::commands::PayloadSource;
use crate::detection::detect;
use crate::errors::AppResult;
use clap::Args;

/// Print the detected payload format
#[derive(Args)]
pub struct DetectCommand {
    #[command(flatten)]
    pub source: PayloadSource,
}

impl DetectCommand {
    pub fn run(&self) -> AppResult<()> {
        let payload = self.source.read()?;
        println!("{}", detect(&payload));
        Ok(())
    }
}
