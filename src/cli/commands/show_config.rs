use crate::cli::commands::load_config;
use crate::errors::AppResult;
use clap::Args;

/// Print the effective configuration (defaults, file and environment merged) as TOML
#[derive(Args)]
pub struct ShowConfigCommand {}

impl ShowConfigCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = load_config()?;
        print!("{}", toml::to_string_pretty(&config)?);
        Ok(())
    }
}
