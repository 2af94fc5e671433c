#![deny(missing_docs)]

//! # swagdoc Core
//!
//! Renders a Swagger 2.0 JSON document into a single static HTML documentation page.

/// Environment names, defaults and build settings.
pub mod config;

/// Swagger document model.
pub mod document;

/// Shared error types.
pub mod error;

/// Source document loading.
pub mod loader;

/// Load, validate, group, render and write in one call.
pub mod pipeline;

/// Local `$ref` resolution.
pub mod refs;

/// HTML page rendering.
pub mod render;

/// Grouping of operations by tag.
pub mod topics;

/// Required-field checks.
pub mod validation;

/// Atomic page output.
pub mod writer;

pub use config::{PageConfig, RenderOptions};
pub use document::{Document, Method, RawDocument};
pub use error::{AppError, AppResult};
pub use loader::load_document;
pub use pipeline::{build_page, BuildReport};
pub use render::{render_page, Renderer};
pub use topics::{group_by_tag, RouteKey, Topics};
pub use validation::validate;
pub use writer::write_page;
