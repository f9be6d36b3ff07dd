// sevlog - main.rs
// Command-line front end for the severity logger

use clap::Parser;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use sevlog::cli::{run, Cli};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}
