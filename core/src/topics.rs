#![deny(missing_docs)]

//! # Topic Grouping
//!
//! Buckets operations by their declared tags.
//!
//! Tags are ordered lexically. Within a tag, routes keep document order (path order, then
//! method order) and each route appears at most once. Operations without tags are skipped.

use crate::document::{Method, Paths};
use indexmap::IndexSet;
use std::collections::BTreeMap;

/// Identifies one operation by its path template and method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    /// Path template, e.g. `/repos/{owner}/{repo}`.
    pub path: String,
    /// HTTP method.
    pub method: Method,
}

impl RouteKey {
    /// Creates a route key.
    pub fn new(path: impl Into<String>, method: Method) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }
}

/// Routes grouped by tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topics {
    groups: BTreeMap<String, IndexSet<RouteKey>>,
}

impl Topics {
    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true when no operation declared a tag.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Routes registered under `tag`.
    pub fn get(&self, tag: &str) -> Option<&IndexSet<RouteKey>> {
        self.groups.get(tag)
    }

    /// Iterates tags in lexical order with their routes.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<RouteKey>)> {
        self.groups.iter().map(|(tag, routes)| (tag.as_str(), routes))
    }
}

/// Groups every tagged operation in `paths` by tag.
pub fn group_by_tag(paths: &Paths) -> Topics {
    let mut groups: BTreeMap<String, IndexSet<RouteKey>> = BTreeMap::new();

    for (path, item) in paths {
        for (method, operation) in &item.operations {
            let Some(tags) = &operation.tags else {
                continue;
            };
            for tag in tags {
                groups
                    .entry(tag.clone())
                    .or_default()
                    .insert(RouteKey::new(path.clone(), *method));
            }
        }
    }

    tracing::debug!("Grouped operations into {} tags", groups.len());
    Topics { groups }
}
