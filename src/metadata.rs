//! Project descriptor merge.
//!
//! The template ships a `package.json` with placeholder metadata. Only the
//! fields the caller supplied are overwritten; everything else (scripts,
//! dependencies, build config) passes through untouched and in its
//! original key order.
//!
//! ## Field Rules
//!
//! | Field | Rule |
//! |-------|------|
//! | `name` | Slug of the app name; the existing value is kept as-is when the slug is empty |
//! | `productName` | Overwritten when provided |
//! | `version` | Overwritten when provided (already `v`-stripped) |
//! | `description` | Overwritten when provided |
//! | `author` | Object: only `author.name` changes. Scalar or missing: becomes `{ "name": ... }` |
//!
//! The descriptor is handled as a [`serde_json::Value`] rather than a typed
//! struct so unknown fields survive the round trip.

use crate::inputs::Inputs;
use crate::naming::to_slug;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Cannot read project descriptor {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("Invalid project descriptor {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
    #[error("Project descriptor {0} is not a JSON object")]
    NotAnObject(PathBuf),
    #[error("Cannot serialize project descriptor: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Cannot write project descriptor {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),
}

/// The values that ended up in the descriptor, for progress output.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataSummary {
    pub name: String,
    pub product_name: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
}

/// Load, merge and rewrite the descriptor at `path`.
pub fn apply_metadata(path: &Path, inputs: &Inputs) -> Result<MetadataSummary, MetadataError> {
    let content =
        fs::read_to_string(path).map_err(|e| MetadataError::Read(path.to_path_buf(), e))?;
    let mut descriptor: Value = serde_json::from_str(&content)
        .map_err(|e| MetadataError::Parse(path.to_path_buf(), e))?;
    let pkg = descriptor
        .as_object_mut()
        .ok_or_else(|| MetadataError::NotAnObject(path.to_path_buf()))?;

    merge(pkg, inputs);

    let summary = summarize(pkg);
    let json = serde_json::to_string_pretty(&descriptor).map_err(MetadataError::Serialize)?;
    fs::write(path, format!("{json}\n")).map_err(|e| MetadataError::Write(path.to_path_buf(), e))?;
    Ok(summary)
}

/// Apply the field rules to an already-parsed descriptor.
pub fn merge(pkg: &mut Map<String, Value>, inputs: &Inputs) {
    // An empty slug falls back to whatever `name` already holds, absent included.
    let slug = to_slug(&inputs.app_name, "");
    if !slug.is_empty() {
        pkg.insert("name".to_string(), Value::String(slug));
    }

    set_if_provided(pkg, "productName", &inputs.product_name);
    set_if_provided(pkg, "version", &inputs.version);
    set_if_provided(pkg, "description", &inputs.description);

    if !inputs.author.is_empty() {
        match pkg.get_mut("author") {
            Some(Value::Object(author)) => {
                author.insert("name".to_string(), Value::String(inputs.author.clone()));
            }
            _ => {
                let mut author = Map::new();
                author.insert("name".to_string(), Value::String(inputs.author.clone()));
                pkg.insert("author".to_string(), Value::Object(author));
            }
        }
    }
}

fn set_if_provided(pkg: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        pkg.insert(key.to_string(), Value::String(value.to_string()));
    }
}

/// Text of a scalar JSON value; non-strings use their JSON rendering.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn summarize(pkg: &Map<String, Value>) -> MetadataSummary {
    let text = |key: &str| pkg.get(key).filter(|v| !v.is_null()).map(scalar_text);
    MetadataSummary {
        name: text("name").unwrap_or_default(),
        product_name: text("productName"),
        version: text("version"),
        author: pkg
            .get("author")
            .and_then(|a| a.get("name"))
            .map(scalar_text)
            .filter(|n| !n.is_empty()),
    }
}
