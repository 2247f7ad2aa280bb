//! Sigil command-line binary.
//!
//! # Usage
//!
//! ```bash
//! export SIGIL_ENCRYPTION_KEY=000102030405060708090a0b0c0d0e0f
//! export SIGIL_SIGNING_KEY=736967696c
//!
//! # Payload from stdin, hex blob to stdout
//! echo -n hello | sigil encode --hex > blob.hex
//!
//! # Back again
//! sigil decode --hex --input blob.hex
//! ```

use std::process::ExitCode;

use clap::Parser;
use sigil_cli::{Cli, run};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    // stdout carries command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(kind = ?err.kind(), "{err}");
            ExitCode::FAILURE
        }
    }
}
