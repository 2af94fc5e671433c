#![deny(missing_docs)]

//! # Configuration
//!
//! Environment variable names, defaults, and the settings consumed by the page pipeline.

use std::path::PathBuf;

/// Environment variable overriding the source document path.
pub const SOURCE_ENV: &str = "SWAGGER_SRC";

/// Environment variable overriding the destination page path.
pub const DESTINATION_ENV: &str = "SWAGGER_DST";

/// Environment variable overriding the sample document URL used by `fetch`.
pub const SAMPLE_URL_ENV: &str = "SWAGGER_URL";

/// Environment variable setting an optional favicon href.
pub const FAVICON_ENV: &str = "SWAGGER_FAVICON";

/// Default source document path.
pub const DEFAULT_SOURCE: &str = "public/swagger.v1.json";

/// Default destination page path.
pub const DEFAULT_DESTINATION: &str = "templates/swagger.tmpl";

/// Default sample document URL.
pub const DEFAULT_SAMPLE_URL: &str = "https://try.gitea.io/swagger.v1.json";

/// Settings for a single page build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Path of the Swagger document to read.
    pub source: PathBuf,
    /// Path of the HTML page to write.
    pub destination: PathBuf,
    /// Options forwarded to the renderer.
    pub render: RenderOptions,
}

impl PageConfig {
    /// Creates a config for the given paths with default render options.
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            render: RenderOptions::default(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_DESTINATION)
    }
}

/// Presentation options that do not come from the document itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Optional href for a `<link rel="icon">` element.
    pub favicon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = PageConfig::default();
        assert_eq!(config.source, PathBuf::from("public/swagger.v1.json"));
        assert_eq!(config.destination, PathBuf::from("templates/swagger.tmpl"));
        assert!(config.render.favicon.is_none());
    }
}
