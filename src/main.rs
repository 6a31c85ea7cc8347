use anyhow::Result;
use clap::Parser;
use fitcalc::{init_logging, serve};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "fitcalc")]
#[command(about = "Fitness formula API server")]
struct Cli {
    #[arg(short, long, default_value = "3000")]
    port: u16,

    #[arg(short = 'b', long, default_value = "0.0.0.0")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    info!("Starting fitness formula API server");
    serve(cli.host, cli.port).await
}
