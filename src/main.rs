#[tokio::main]
async fn main() {
    if let Err(e) = identity_qr_decoder::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
