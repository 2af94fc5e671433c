#![deny(missing_docs)]

//! # Build Command
//!
//! Renders the configured Swagger document into the static documentation page.

use std::path::PathBuf;
use swagdoc_core::config::{
    DEFAULT_DESTINATION, DEFAULT_SOURCE, DESTINATION_ENV, FAVICON_ENV, SOURCE_ENV,
};
use swagdoc_core::{build_page, AppResult, PageConfig, RenderOptions};

/// Arguments for the default build command.
///
/// Every option is normally supplied through the environment.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Path to the Swagger JSON document.
    #[clap(long, env = SOURCE_ENV, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Path of the HTML page to write.
    #[clap(long, env = DESTINATION_ENV, default_value = DEFAULT_DESTINATION)]
    pub destination: PathBuf,

    /// Optional favicon href linked from the page.
    #[clap(long, env = FAVICON_ENV)]
    pub favicon: Option<String>,
}

impl BuildArgs {
    /// Converts the arguments into a pipeline config.
    pub fn to_config(&self) -> PageConfig {
        PageConfig {
            source: self.source.clone(),
            destination: self.destination.clone(),
            render: RenderOptions {
                favicon: self.favicon.clone(),
            },
        }
    }
}

/// Executes the page build.
pub fn execute(args: &BuildArgs) -> AppResult<()> {
    let config = args.to_config();
    let report = build_page(&config)?;
    tracing::info!(
        "Wrote {:?} ({} tag sections, {} models, {} bytes)",
        config.destination,
        report.sections,
        report.models,
        report.bytes
    );
    Ok(())
}
