//! # Document Loader
//!
//! Reads the source document from disk. `.yaml` / `.yml` files are parsed as YAML,
//! everything else as JSON.

use crate::document::RawDocument;
use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Reads and parses the document at `path`.
pub fn load_document(path: &Path) -> AppResult<RawDocument> {
    let content =
        fs::read_to_string(path).map_err(|e| AppError::Read(path.to_path_buf(), e))?;
    tracing::debug!("Read {} bytes from {:?}", content.len(), path);

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    match ext {
        "yaml" | "yml" => parse_yaml(&content)
            .map_err(|e| AppError::Parse(path.to_path_buf(), e)),
        _ => parse_json(&content).map_err(|e| AppError::Parse(path.to_path_buf(), e)),
    }
}

/// Parses a JSON document from a string.
pub fn parse_json(content: &str) -> Result<RawDocument, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}

/// Parses a YAML document from a string.
pub fn parse_yaml(content: &str) -> Result<RawDocument, String> {
    serde_yaml::from_str(content).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Method;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swagger.v1.json");
        fs::File::create(&path)
            .unwrap()
            .write_all(br#"{"basePath": "/api/v1", "paths": {}}"#)
            .unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.base_path.as_deref(), Some("/api/v1"));
        assert!(doc.paths.unwrap().is_empty());
        assert!(doc.info.is_none());
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swagger.yaml");
        let yaml = r##"
info:
  title: Gitea API
  version: "1.1.1"
basePath: /api/v1
paths:
  /version:
    get:
      tags: [miscellaneous]
      responses:
        "200":
          $ref: "#/responses/ServerVersion"
"##;
        fs::write(&path, yaml).unwrap();

        let doc = load_document(&path).unwrap();
        let info = doc.info.unwrap();
        assert_eq!(info.title.as_deref(), Some("Gitea API"));
        assert_eq!(info.version.as_deref(), Some("1.1.1"));

        let paths = doc.paths.unwrap();
        assert_eq!(paths.len(), 1);
        let operation = &paths["/version"].operations[&Method::Get];
        let responses = operation.responses.as_ref().unwrap();
        assert_eq!(
            responses["200"].reference.as_deref(),
            Some("#/responses/ServerVersion")
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match load_document(&path).unwrap_err() {
            AppError::Read(p, _) => assert_eq!(p, path),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, AppError::Parse(..)));
        assert!(err.to_string().contains("broken.json"));
    }
}
