//! Input URL list normalization.

use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::error::{Result, ScrapeError};

/// A URL to process plus the extra keys it was listed with.
#[derive(Debug, Clone, PartialEq)]
pub struct InputItem {
    pub url: String,
    pub meta: Map<String, Value>,
}

impl InputItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            meta: Map::new(),
        }
    }
}

/// Normalize a parsed input file.
///
/// Accepts an array of URL strings or an array of objects with a string
/// `url` key; every other key of such an object becomes metadata. Items of
/// any other shape are skipped with a warning. A non-array root is an error.
pub fn normalize_input(raw: Value) -> Result<Vec<InputItem>> {
    let Value::Array(items) = raw else {
        error!("Input URLs JSON must be a list of strings or objects.");
        return Err(ScrapeError::InputFormat(
            "root must be a list of URL strings or objects".to_string(),
        ));
    };

    let mut normalized = Vec::with_capacity(items.len());

    for item in items {
        match item {
            Value::String(url) => normalized.push(InputItem::new(url)),
            Value::Object(mut obj) => match obj.remove("url") {
                Some(Value::String(url)) => normalized.push(InputItem { url, meta: obj }),
                Some(other) => {
                    obj.insert("url".to_string(), other);
                    let skipped = Value::Object(obj);
                    warn!("Skipping input item with non-string url: {}", skipped);
                }
                None => {
                    let skipped = Value::Object(obj);
                    warn!("Skipping unsupported input item: {}", skipped);
                }
            },
            other => warn!("Skipping unsupported input item: {}", other),
        }
    }

    Ok(normalized)
}
