#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for resolving local `$ref` pointers (`#/definitions/User`, `#/responses/NotFound`,
//! `#/parameters/limit`) against the shared tables of the same document.
//!
//! External documents are never fetched.

use crate::document::{Document, Parameter};
use percent_encoding::percent_decode_str;

/// Extracts the entry name from a `$ref` pointing to `#/{section}/{name}`.
///
/// Returns `None` for external references or pointers into a different section.
pub fn local_name(ref_str: &str, section: &str) -> Option<String> {
    let pointer = ref_str.strip_prefix("#/")?;
    let mut segments = pointer.split('/');

    if segments.next()? != section {
        return None;
    }
    let name = decode_pointer_segment(segments.next()?);
    if segments.next().is_some() || name.is_empty() {
        return None;
    }
    Some(name)
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`, then percent-encoding).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Resolves a response `$ref` to the shared response's description.
pub fn response_description<'a>(document: &'a Document, ref_str: &str) -> Option<&'a str> {
    let name = local_name(ref_str, "responses")?;
    document.responses.get(&name)?.description.as_deref()
}

/// Resolves a parameter `$ref` to the shared parameter.
pub fn shared_parameter<'a>(document: &'a Document, ref_str: &str) -> Option<&'a Parameter> {
    let name = local_name(ref_str, "parameters")?;
    document.parameters.get(&name)
}

/// Returns the model name for a `#/definitions/...` reference, whether or not it exists.
pub fn model_name(ref_str: &str) -> Option<String> {
    local_name(ref_str, "definitions")
}
