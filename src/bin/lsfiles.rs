// src/bin/lsfiles.rs

use anyhow::Result;
use catfiles::cli::LsCli;
use catfiles::output::format_path_list;
use catfiles::{discover, Config};
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

    let args = LsCli::parse();
    let config = Config::try_from(args)?;

    match discover(&config) {
        Ok(entries) => {
            println!("{}", format_path_list(&entries));
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
