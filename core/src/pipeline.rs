//! # Page Pipeline
//!
//! Load → Validate → Group → Render → Write. The first failing stage aborts the run, so the
//! destination is only touched once the whole page has been rendered.

use crate::config::PageConfig;
use crate::error::AppResult;
use crate::loader::load_document;
use crate::render::render_page;
use crate::topics::group_by_tag;
use crate::validation::validate;
use crate::writer::write_page;

/// Summary of a successful build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of tag sections rendered.
    pub sections: usize,
    /// Number of models rendered.
    pub models: usize,
    /// Size of the written page in bytes.
    pub bytes: usize,
}

/// Builds the documentation page described by `config`.
pub fn build_page(config: &PageConfig) -> AppResult<BuildReport> {
    tracing::debug!("Loading {:?}", config.source);
    let raw = load_document(&config.source)?;
    let document = validate(raw)?;

    let topics = group_by_tag(&document.paths);
    let html = render_page(&document, &topics, &config.render)?;

    write_page(&config.destination, &html)?;

    Ok(BuildReport {
        sections: topics.len(),
        models: document.definitions.len(),
        bytes: html.len(),
    })
}
