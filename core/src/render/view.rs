//! Template view models built from a validated document.

use crate::config::RenderOptions;
use crate::document::{Document, Model, Operation, ParameterEntry, Property};
use crate::refs;
use crate::topics::{RouteKey, Topics};
use heck::ToKebabCase;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct PageView<'a> {
    pub title: &'a str,
    pub version: &'a str,
    pub base_path: &'a str,
    pub description: &'a str,
    pub license: &'a str,
    pub license_url: Option<&'a str>,
    pub favicon: Option<&'a str>,
    pub sections: Vec<SectionView<'a>>,
    pub models: Vec<ModelView<'a>>,
    pub css: &'static str,
    pub js: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SectionView<'a> {
    pub id: String,
    pub title: &'a str,
    pub routes: Vec<RouteView<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RouteView<'a> {
    pub id: String,
    pub method: &'static str,
    pub method_label: String,
    pub path: &'a str,
    pub summary: Option<&'a str>,
    pub description: Option<&'a str>,
    pub operation_id: Option<&'a str>,
    pub deprecated: bool,
    pub parameters: Option<Vec<ParameterRow<'a>>>,
    pub responses: Vec<ResponseRow<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ParameterRow<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub type_name: &'a str,
    pub description: &'a str,
    pub required: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseRow<'a> {
    pub code: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ModelView<'a> {
    pub id: String,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub properties: Vec<PropertyRow<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PropertyRow<'a> {
    pub name: &'a str,
    pub required: bool,
    pub type_name: String,
    pub is_array: bool,
    pub reference: Option<ModelRef>,
    pub format: &'a str,
    pub description: &'a str,
}

/// Cross-reference to another model. `anchor` is `None` when the target is not defined.
#[derive(Debug, Serialize)]
pub(crate) struct ModelRef {
    pub name: String,
    pub anchor: Option<String>,
}

pub(crate) fn page_view<'a>(
    document: &'a Document,
    topics: &'a Topics,
    options: &'a RenderOptions,
    css: &'static str,
    js: &'static str,
) -> PageView<'a> {
    let sections = topics
        .iter()
        .enumerate()
        .map(|(index, (tag, routes))| SectionView {
            id: format!("section-{}", index),
            title: tag,
            routes: routes
                .iter()
                .enumerate()
                .filter_map(|(pos, key)| route_view(document, key, index, pos))
                .collect(),
        })
        .collect();

    let models = document
        .definitions
        .iter()
        .enumerate()
        .map(|(index, (name, model))| model_view(document, index, name, model))
        .collect();

    PageView {
        title: &document.info.title,
        version: &document.info.version,
        base_path: &document.base_path,
        description: &document.info.description,
        license: document.info.license.name(),
        license_url: document.info.license.url(),
        favicon: options.favicon.as_deref(),
        sections,
        models,
        css,
        js,
    }
}

fn route_view<'a>(
    document: &'a Document,
    key: &'a RouteKey,
    section: usize,
    pos: usize,
) -> Option<RouteView<'a>> {
    let operation = document.operation(&key.path, key.method)?;
    Some(RouteView {
        id: format!("{}-{}-{}", key.method, section, pos),
        method: key.method.as_str(),
        method_label: key.method.as_str().to_uppercase(),
        path: &key.path,
        summary: operation.summary.as_deref(),
        description: operation.description.as_deref(),
        operation_id: operation.operation_id.as_deref(),
        deprecated: operation.deprecated,
        parameters: parameter_rows(document, operation),
        responses: response_rows(document, operation),
    })
}

/// `None` means the operation declares no parameters at all.
fn parameter_rows<'a>(
    document: &'a Document,
    operation: &'a Operation,
) -> Option<Vec<ParameterRow<'a>>> {
    let entries = operation.parameters.as_ref().filter(|p| !p.is_empty())?;

    let rows = entries
        .iter()
        .filter_map(|entry| {
            let param = match entry {
                ParameterEntry::Inline(param) => param,
                ParameterEntry::Ref { reference } => {
                    let resolved = refs::shared_parameter(document, reference);
                    if resolved.is_none() {
                        tracing::warn!("Skipping unresolved parameter reference {}", reference);
                    }
                    resolved?
                }
            };
            Some(ParameterRow {
                name: &param.name,
                location: param.location.as_deref().unwrap_or_default(),
                type_name: param.resolved_type(),
                description: param.description.as_deref().unwrap_or_default(),
                required: param.required,
            })
        })
        .collect();

    Some(rows)
}

fn response_rows<'a>(document: &'a Document, operation: &'a Operation) -> Vec<ResponseRow<'a>> {
    let Some(responses) = &operation.responses else {
        return Vec::new();
    };

    responses
        .iter()
        .map(|(code, entry)| {
            let description = match &entry.reference {
                Some(reference) => refs::response_description(document, reference),
                None => entry.description.as_deref(),
            };
            ResponseRow {
                code,
                description: description.unwrap_or_default(),
            }
        })
        .collect()
}

fn model_view<'a>(
    document: &'a Document,
    index: usize,
    name: &'a str,
    model: &'a Model,
) -> ModelView<'a> {
    let properties = model
        .properties
        .iter()
        .map(|(prop_name, prop)| property_row(document, model, prop_name, prop))
        .collect();

    ModelView {
        id: model_anchor(index, name),
        name,
        description: model.description.as_deref(),
        properties,
    }
}

fn property_row<'a>(
    document: &Document,
    model: &Model,
    name: &'a str,
    prop: &'a Property,
) -> PropertyRow<'a> {
    let item = prop.items.as_deref();
    let is_array = prop.reference.is_none() && item.is_some_and(|i| i.reference.is_some());
    let reference = prop
        .reference
        .as_deref()
        .or_else(|| item?.reference.as_deref())
        .and_then(refs::model_name)
        .map(|target| ModelRef {
            anchor: document
                .definitions
                .get_index_of(&target)
                .map(|index| model_anchor(index, &target)),
            name: target,
        });

    PropertyRow {
        name,
        required: model.required.iter().any(|r| r == name),
        type_name: property_type(prop),
        is_array,
        reference,
        format: prop.format.as_deref().unwrap_or_default(),
        description: prop.description.as_deref().unwrap_or_default(),
    }
}

/// `type`, with arrays shown as `array[<item type>]`, else `undefined`.
fn property_type(prop: &Property) -> String {
    match (prop.type_name.as_deref(), prop.items.as_deref()) {
        (Some("array"), Some(item)) => match item.type_name.as_deref() {
            Some(item_type) => format!("array[{}]", item_type),
            None => "array".to_string(),
        },
        (Some(type_name), _) => type_name.to_string(),
        (None, _) => "undefined".to_string(),
    }
}

/// Position-prefixed so names that differ only in case or separators stay distinct.
pub(crate) fn model_anchor(index: usize, name: &str) -> String {
    format!("model-{}-{}", index, name.to_kebab_case())
}
