#![deny(missing_docs)]

//! # Fetch Command
//!
//! Downloads a sample Swagger document for local testing. An existing file is never
//! overwritten, and the download is saved atomically so an interrupted write leaves nothing
//! behind.

use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};
use swagdoc_core::config::{DEFAULT_SAMPLE_URL, DEFAULT_SOURCE, SAMPLE_URL_ENV, SOURCE_ENV};
use swagdoc_core::write_page;

/// Arguments for the fetch command.
#[derive(clap::Args, Debug, Clone)]
pub struct FetchArgs {
    /// URL of the sample Swagger document.
    #[clap(long, env = SAMPLE_URL_ENV, default_value = DEFAULT_SAMPLE_URL)]
    pub url: String,

    /// Where to save the document. Defaults to the build source path.
    #[clap(long, env = SOURCE_ENV, default_value = DEFAULT_SOURCE)]
    pub output: PathBuf,
}

/// Interface for retrieving a remote document.
///
/// Abstracted to allow testing without network access.
pub trait Downloader {
    /// Returns the body served at `url`.
    fn download(&self, url: &str) -> CliResult<String>;
}

/// Blocking HTTP downloader backed by `ureq`.
#[cfg(feature = "client")]
pub struct UreqDownloader;

#[cfg(feature = "client")]
impl Downloader for UreqDownloader {
    fn download(&self, url: &str) -> CliResult<String> {
        let http_err = |e: ureq::Error| CliError::Http(url.to_string(), e.to_string());
        let mut response = ureq::get(url).call().map_err(http_err)?;
        response.body_mut().read_to_string().map_err(http_err)
    }
}

/// Outcome of a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The document was downloaded and saved.
    Downloaded,
    /// The output file already existed; nothing was done.
    AlreadyPresent,
}

/// Downloads `url` into `output` unless `output` already exists.
pub fn fetch_sample<D: Downloader>(
    url: &str,
    output: &Path,
    downloader: &D,
) -> CliResult<FetchOutcome> {
    if output.exists() {
        return Ok(FetchOutcome::AlreadyPresent);
    }

    let body = downloader.download(url)?;
    write_page(output, &body)?;
    Ok(FetchOutcome::Downloaded)
}

/// Executes the fetch command with the given downloader.
pub fn execute_with<D: Downloader>(args: &FetchArgs, downloader: &D) -> CliResult<()> {
    match fetch_sample(&args.url, &args.output, downloader)? {
        FetchOutcome::Downloaded => tracing::info!("Saved {} to {:?}", args.url, args.output),
        FetchOutcome::AlreadyPresent => {
            tracing::info!("{:?} already exists, skipping download", args.output)
        }
    }
    Ok(())
}

/// Executes the fetch command over HTTP.
#[cfg(feature = "client")]
pub fn execute(args: &FetchArgs) -> CliResult<()> {
    execute_with(args, &UreqDownloader)
}

/// Executes the fetch command over HTTP.
#[cfg(not(feature = "client"))]
pub fn execute(args: &FetchArgs) -> CliResult<()> {
    Err(CliError::Http(
        args.url.clone(),
        "built without the `client` feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use swagdoc_core::AppError;
    use tempfile::tempdir;

    // Mock downloader recording requested URLs
    struct MockDownloader {
        requested: RefCell<Vec<String>>,
        should_fail: bool,
    }

    impl MockDownloader {
        fn new(should_fail: bool) -> Self {
            Self {
                requested: RefCell::new(Vec::new()),
                should_fail,
            }
        }
    }

    impl Downloader for MockDownloader {
        fn download(&self, url: &str) -> CliResult<String> {
            self.requested.borrow_mut().push(url.to_string());
            if self.should_fail {
                return Err(CliError::Http(url.to_string(), "connection refused".into()));
            }
            Ok(r#"{"swagger":"2.0"}"#.to_string())
        }
    }

    #[test]
    fn test_fetch_downloads_missing_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("public").join("swagger.v1.json");
        let downloader = MockDownloader::new(false);

        let outcome = fetch_sample(DEFAULT_SAMPLE_URL, &output, &downloader).unwrap();

        assert_eq!(outcome, FetchOutcome::Downloaded);
        assert_eq!(fs::read_to_string(&output).unwrap(), r#"{"swagger":"2.0"}"#);
        assert_eq!(
            downloader.requested.borrow().as_slice(),
            &[DEFAULT_SAMPLE_URL.to_string()]
        );
    }

    #[test]
    fn test_fetch_skips_existing_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("swagger.v1.json");
        fs::write(&output, "local copy").unwrap();
        let downloader = MockDownloader::new(false);

        let outcome = fetch_sample(DEFAULT_SAMPLE_URL, &output, &downloader).unwrap();

        assert_eq!(outcome, FetchOutcome::AlreadyPresent);
        assert!(downloader.requested.borrow().is_empty());
        assert_eq!(fs::read_to_string(&output).unwrap(), "local copy");
    }

    #[test]
    fn test_fetch_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("swagger.v1.json");
        let downloader = MockDownloader::new(true);

        let args = FetchArgs {
            url: "http://localhost:1/swagger.v1.json".into(),
            output: output.clone(),
        };
        match execute_with(&args, &downloader).unwrap_err() {
            CliError::Http(url, msg) => {
                assert_eq!(url, "http://localhost:1/swagger.v1.json");
                assert!(msg.contains("connection refused"));
            }
            _ => panic!("Wrong error type"),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_fetch_leaves_no_partial_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("public").join("swagger.v1.json");
        let downloader = MockDownloader::new(false);

        fetch_sample(DEFAULT_SAMPLE_URL, &output, &downloader).unwrap();

        let entries: Vec<_> = fs::read_dir(output.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("swagger.v1.json")]);
    }

    #[test]
    fn test_fetch_unwritable_output_creates_nothing() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("public");
        fs::write(&blocker, "not a directory").unwrap();
        let output = blocker.join("swagger.v1.json");
        let downloader = MockDownloader::new(false);

        match fetch_sample(DEFAULT_SAMPLE_URL, &output, &downloader).unwrap_err() {
            CliError::App(AppError::Write(p, _)) => assert_eq!(p, output),
            _ => panic!("Wrong error type"),
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);

        // A retry still downloads because nothing was left at the output path.
        fs::remove_file(&blocker).unwrap();
        let outcome = fetch_sample(DEFAULT_SAMPLE_URL, &output, &downloader).unwrap();
        assert_eq!(outcome, FetchOutcome::Downloaded);
    }
}
