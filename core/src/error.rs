//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// Path-carrying variants are built explicitly so the diagnostic names the file involved.
/// String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// The source document could not be read.
    #[from(ignore)]
    #[display("Unable to read JSON data from {}: {}", _0.display(), _1)]
    Read(PathBuf, std::io::Error),

    /// The source document is not valid JSON (or YAML).
    #[from(ignore)]
    #[display("Unable to parse document {}: {}", _0.display(), _1)]
    Parse(PathBuf, String),

    /// A required field is absent from the document.
    #[from(ignore)]
    #[display("JSON data is missing required data: {_0}")]
    MissingField(&'static str),

    /// Template compilation or rendering failed.
    #[display("Template Error: {_0}")]
    Template(tera::Error),

    /// The output page could not be written.
    #[from(ignore)]
    #[display("Unable to create output destination {}: {}", _0.display(), _1)]
    Write(PathBuf, std::io::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_string_conversion() {
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_missing_field_names_field() {
        let app_err = AppError::MissingField("info.title");
        assert_eq!(
            app_err.to_string(),
            "JSON data is missing required data: info.title"
        );
    }

    #[test]
    fn test_read_error_names_path() {
        let app_err = AppError::Read(
            PathBuf::from("public/swagger.v1.json"),
            Error::new(ErrorKind::NotFound, "not found"),
        );
        let msg = app_err.to_string();
        assert!(msg.contains("public/swagger.v1.json"));
        assert!(msg.contains("not found"));
    }
}
