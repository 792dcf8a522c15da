use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Identity QR Decoder
#[derive(Parser)]
#[command(name = "identity-qr")]
#[command(about = "Decode national-ID QR payloads into normalised identity records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode one payload (XML, pipe-delimited or Secure QR) and print the record as JSON
    Decode(commands::decode::DecodeCommand),
    /// Print the detected payload format without decoding
    Detect(commands::detect::DetectCommand),
    /// Decode one payload per line from a file, printing one JSON line per payload
    Batch(commands::batch::BatchCommand),
    /// Show the byte-level stages of a Secure QR payload
    Inspect(commands::inspect::InspectCommand),
    /// Print the effective configuration as TOML
    ShowConfig(commands::show_config::ShowConfigCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(command) => command.run(),
        Commands::Detect(command) => command.run(),
        Commands::Batch(command) => command.run().await,
        Commands::Inspect(command) => command.run(),
        Commands::ShowConfig(command) => command.run(),
    }
}
