#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use swagdoc_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Download failure.
    #[from(ignore)]
    #[display("Unable to download {}: {}", _0, _1)]
    Http(String, String),

    /// Failure inside the page pipeline.
    #[display("{}", _0)]
    App(AppError),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
