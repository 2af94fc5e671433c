#![deny(missing_docs)]

//! # HTML Rendering
//!
//! Turns a validated document and its tag groups into a single static page.
//!
//! The page template, stylesheet and toggle script are embedded at compile time, so the output
//! has no external dependencies beyond an optional favicon link.

mod view;

use crate::config::RenderOptions;
use crate::document::Document;
use crate::error::AppResult;
use crate::topics::Topics;
use tera::{Context, Tera};

const PAGE_TEMPLATE: &str = "page.html";
const PAGE_SOURCE: &str = include_str!("../../templates/page.html");
const STYLE: &str = include_str!("../../assets/style.css");
const SCRIPT: &str = include_str!("../../assets/toggle.js");

/// Compiled page templates.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Compiles the embedded templates.
    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, PAGE_SOURCE)?;
        tera.set_escape_fn(escape_html);
        Ok(Self { tera })
    }

    /// Renders the full page.
    pub fn render(
        &self,
        document: &Document,
        topics: &Topics,
        options: &RenderOptions,
    ) -> AppResult<String> {
        let view = view::page_view(document, topics, options, STYLE, SCRIPT);
        tracing::debug!(
            "Rendering {} tag sections and {} models",
            view.sections.len(),
            view.models.len()
        );
        let context = Context::from_serialize(&view)?;
        Ok(self.tera.render(PAGE_TEMPLATE, &context)?)
    }
}

/// Renders the full page with a freshly compiled [`Renderer`].
pub fn render_page(
    document: &Document,
    topics: &Topics,
    options: &RenderOptions,
) -> AppResult<String> {
    Renderer::new()?.render(document, topics, options)
}

/// Escapes text for HTML element content and quoted attribute values.
///
/// Unlike tera's default escaper, `/` is left alone so paths stay readable.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
