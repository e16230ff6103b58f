//! Hashpass CLI - derive reproducible per-domain passwords
//!
//! This is the command-line interface for hashpass. It resolves the master
//! phrase and settings, then hands them to the core library.

mod app;
mod cli;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::errors::CliError;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "hashpass=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = app::run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
