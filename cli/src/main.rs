#![deny(missing_docs)]

//! # swagdoc CLI
//!
//! Renders a Swagger 2.0 JSON document into a static HTML documentation page.
//!
//! Run without arguments to build the page from `SWAGGER_SRC` into `SWAGGER_DST`.
//!
//! Supported Commands:
//! - `fetch`: Downloads a sample document from `SWAGGER_URL` for testing.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::CliResult;

mod build;
mod error;
mod fetch;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Render a Swagger document into a static HTML page"
)]
struct Cli {
    /// Enable verbose logging
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(flatten)]
    build: build::BuildArgs,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download a sample Swagger document for testing.
    Fetch(fetch::FetchArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Fetch(args)) => fetch::execute(args)?,
        None => build::execute(&cli.build)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    // Environment files are optional.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Unable to install log subscriber");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("** FATAL: {} **", e);
            ExitCode::FAILURE
        }
    }
}
