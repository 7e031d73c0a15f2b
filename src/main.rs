use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dalu_cli::cli::Args;
use dalu_cli::commands;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args = Args::parse();
    debug!("dalu starting");

    commands::run(args).await
}
