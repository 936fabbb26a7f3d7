//! JSON-LD candidate extraction.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use tracing::debug;

use super::document::ListingPage;

/// One JSON object taken from a linked-data block.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredCandidate(Map<String, Value>);

impl StructuredCandidate {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Top-level value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value for `key` inside the object stored under `parent`. Returns
    /// `None` when `parent` is missing or is not an object.
    pub fn nested(&self, parent: &str, key: &str) -> Option<&Value> {
        self.0.get(parent)?.as_object()?.get(key)
    }

    /// The `@type` tag normalized to a set. A string becomes a singleton, an
    /// array contributes its string members, anything else is empty.
    pub fn types(&self) -> BTreeSet<&str> {
        match self.0.get("@type") {
            Some(Value::String(s)) if !s.is_empty() => BTreeSet::from([s.as_str()]),
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => BTreeSet::new(),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Parse one block's text. An object yields itself, an array yields its
/// object members; empty, malformed or scalar blocks yield nothing.
pub fn parse_block(text: &str) -> Vec<StructuredCandidate> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(obj)) => vec![StructuredCandidate(obj)],
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(obj) => Some(StructuredCandidate(obj)),
                _ => None,
            })
            .collect(),
        Ok(_) => Vec::new(),
        Err(e) => {
            debug!("Skipping malformed JSON-LD block: {}", e);
            Vec::new()
        }
    }
}

/// All candidates on a page, in document order.
pub fn extract_candidates(page: &ListingPage) -> Vec<StructuredCandidate> {
    page.linked_data_blocks()
        .iter()
        .flat_map(|block| parse_block(block))
        .collect()
}
