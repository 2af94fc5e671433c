#![deny(missing_docs)]

//! # Swagger Document Model
//!
//! Deserialization structures for the subset of a Swagger 2.0 document that the page renders.
//!
//! Parsing happens in two stages: [`RawDocument`] mirrors the input with every field optional,
//! and [`Document`] is the validated form produced by [`crate::validation::validate`].

use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Mapping from path template to its operations, in document order.
pub type Paths = IndexMap<String, PathItem>;

/// Document exactly as parsed, before required fields are checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
    /// API metadata.
    pub info: Option<RawInfo>,
    /// Base path all routes are served under.
    #[serde(rename = "basePath")]
    pub base_path: Option<String>,
    /// Routes keyed by path template.
    pub paths: Option<Paths>,
    /// Shared model schemas.
    pub definitions: Option<IndexMap<String, Model>>,
    /// Shared responses table, the target of `#/responses/...` references.
    pub responses: Option<IndexMap<String, SharedResponse>>,
    /// Shared parameters table, the target of `#/parameters/...` references.
    pub parameters: Option<IndexMap<String, Parameter>>,
}

/// The `info` object before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInfo {
    /// API title.
    pub title: Option<String>,
    /// API version.
    pub version: Option<String>,
    /// Free-text API description.
    pub description: Option<String>,
    /// License declaration.
    pub license: Option<License>,
}

/// Validated document. Required fields are guaranteed present.
#[derive(Debug, Clone)]
pub struct Document {
    /// API metadata.
    pub info: Info,
    /// Base path all routes are served under.
    pub base_path: String,
    /// Routes keyed by path template.
    pub paths: Paths,
    /// Shared model schemas (empty when absent).
    pub definitions: IndexMap<String, Model>,
    /// Shared responses table (empty when absent).
    pub responses: IndexMap<String, SharedResponse>,
    /// Shared parameters table (empty when absent).
    pub parameters: IndexMap<String, Parameter>,
}

impl Document {
    /// Looks up the operation registered for `path` and `method`.
    pub fn operation(&self, path: &str, method: Method) -> Option<&Operation> {
        self.paths.get(path)?.operations.get(&method)
    }
}

/// Validated `info` object.
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// Free-text API description.
    pub description: String,
    /// License declaration.
    pub license: License,
}

/// A license given either as a bare string or as a Swagger License object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum License {
    /// `"license": "MIT"`
    Name(String),
    /// `"license": { "name": "MIT", "url": "..." }`
    Object {
        /// License name.
        name: String,
        /// Optional link to the license text.
        #[serde(default)]
        url: Option<String>,
    },
}

impl License {
    /// The human readable license name.
    pub fn name(&self) -> &str {
        match self {
            License::Name(name) => name,
            License::Object { name, .. } => name,
        }
    }

    /// The license URL, when one was declared.
    pub fn url(&self) -> Option<&str> {
        match self {
            License::Name(_) => None,
            License::Object { url, .. } => url.as_deref(),
        }
    }
}

/// HTTP methods that can carry an operation on a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
}

impl Method {
    /// Parses a path item key. Returns `None` for keys that are not operations.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "get" => Some(Method::Get),
            "put" => Some(Method::Put),
            "post" => Some(Method::Post),
            "delete" => Some(Method::Delete),
            "options" => Some(Method::Options),
            "head" => Some(Method::Head),
            "patch" => Some(Method::Patch),
            _ => None,
        }
    }

    /// Lowercase form, as written in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations of a single path, in document order.
///
/// Keys other than HTTP methods (`parameters`, `$ref`, `x-` extensions) are skipped.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    /// Operations keyed by method.
    pub operations: IndexMap<Method, Operation>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut operations = IndexMap::new();

        for (key, value) in raw {
            let Some(method) = Method::from_key(&key) else {
                continue;
            };
            let operation = serde_json::from_value::<Operation>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse operation '{}': {}", key, e))
            })?;
            operations.insert(method, operation);
        }

        Ok(Self { operations })
    }
}

/// A single API operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Tags the operation is grouped under.
    pub tags: Option<Vec<String>>,
    /// Short summary.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Unique operation identifier.
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    /// Whether the operation is deprecated.
    #[serde(default)]
    pub deprecated: bool,
    /// Parameters in declaration order.
    pub parameters: Option<Vec<ParameterEntry>>,
    /// Responses keyed by status code.
    pub responses: Option<IndexMap<String, ResponseEntry>>,
}

/// A parameter declared inline or referenced from the shared parameters table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ParameterEntry {
    /// `{ "$ref": "#/parameters/limit" }`
    Ref {
        /// The reference string.
        #[serde(rename = "$ref")]
        reference: String,
    },
    /// An inline parameter.
    Inline(Parameter),
}

/// A request parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    #[serde(default)]
    pub name: String,
    /// Location: `path`, `query`, `header`, `body`, or `formData`.
    #[serde(rename = "in")]
    pub location: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Whether the parameter must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Declared primitive type.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Body schema, for `in: body` parameters.
    pub schema: Option<ParameterSchema>,
}

impl Parameter {
    /// Resolves the displayed type: `type`, then `schema.type`, then `undefined`.
    pub fn resolved_type(&self) -> &str {
        self.type_name
            .as_deref()
            .or_else(|| self.schema.as_ref()?.type_name.as_deref())
            .unwrap_or("undefined")
    }
}

/// The part of a body parameter's schema that is displayed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterSchema {
    /// Schema type.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
}

/// A response declared on an operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseEntry {
    /// Inline description.
    pub description: Option<String>,
    /// Reference into the shared responses table.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
}

/// An entry of the shared responses table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SharedResponse {
    /// Response description.
    pub description: Option<String>,
}

/// A model schema from `definitions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Model {
    /// Free-text description.
    pub description: Option<String>,
    /// Names of properties that must be present.
    #[serde(default)]
    pub required: Vec<String>,
    /// Properties in document order.
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
}

/// A model property.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    /// Schema type.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Type format (e.g. `int64`, `date-time`).
    pub format: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Reference to another model.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// Item schema for arrays.
    pub items: Option<Box<Property>>,
}
