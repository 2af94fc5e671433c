//! # Document Validation
//!
//! Checks the fields every page needs and converts a [`RawDocument`] into a [`Document`].
//! The first missing field aborts validation.

use crate::document::{Document, Info, RawDocument};
use crate::error::{AppError, AppResult};

/// Validates `raw`, naming the first missing required field on failure.
///
/// Fields are checked in the order `info`, `basePath`, `paths`, `info.title`, `info.version`,
/// `info.description`, `info.license`.
pub fn validate(raw: RawDocument) -> AppResult<Document> {
    let info = raw.info.ok_or(AppError::MissingField("info"))?;
    let base_path = raw.base_path.ok_or(AppError::MissingField("basePath"))?;
    let paths = raw.paths.ok_or(AppError::MissingField("paths"))?;

    let info = Info {
        title: info.title.ok_or(AppError::MissingField("info.title"))?,
        version: info.version.ok_or(AppError::MissingField("info.version"))?,
        description: info
            .description
            .ok_or(AppError::MissingField("info.description"))?,
        license: info.license.ok_or(AppError::MissingField("info.license"))?,
    };

    Ok(Document {
        info,
        base_path,
        paths,
        definitions: raw.definitions.unwrap_or_default(),
        responses: raw.responses.unwrap_or_default(),
        parameters: raw.parameters.unwrap_or_default(),
    })
}
