// src/main.rs

use anyhow::Result;
use catfiles::cli::CatCli;
use catfiles::run;
use catfiles::Config;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "catfiles=debug".parse().unwrap()
                } else {
                    "catfiles=info".parse().unwrap()
                },
            ),
        )
        .init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Configuration & Execution ---
    let args = CatCli::parse();
    let config = Config::try_from(args)?;
    log::debug!("Configuration built successfully.");

    match run(&config) {
        Ok(report) => {
            eprintln!(
                "Processed {} file(s), skipped {}.",
                report.processed, report.skipped
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
