//! Decoder implementations

use super::types::ResponseMapper;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// JSON Mapper
// ============================================================================

/// serde-backed JSON mapper with optional record path extraction
///
/// Without a record path the body must be a JSON array of `T`. With one,
/// the array is looked up at that dotted path first (e.g. `$.data.items`).
pub struct JsonMapper<T> {
    /// Dotted path to the element array
    record_path: Option<String>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonMapper<T> {
    /// Create a mapper for a top-level JSON array
    pub fn new() -> Self {
        Self {
            record_path: None,
            _marker: PhantomData,
        }
    }

    /// Create a mapper reading the array found at `path`
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
            _marker: PhantomData,
        }
    }

    /// Configured record path, if any
    pub fn record_path(&self) -> Option<&str> {
        self.record_path.as_deref()
    }
}

impl<T: DeserializeOwned> JsonMapper<T> {
    /// Decode a body holding a single object
    pub fn decode_one(&self, body: &str) -> Result<T> {
        let value = parse_body(body)?;
        let value = self.select(value)?;
        serde_json::from_value(value).map_err(|e| Error::decode(format!("Schema mismatch: {e}")))
    }

    fn select(&self, value: Value) -> Result<Value> {
        match &self.record_path {
            Some(path) => extract_simple_path(&value, path).ok_or_else(|| {
                Error::decode(format!("No value found at record path '{path}'"))
            }),
            None => Ok(value),
        }
    }
}

impl<T> Default for JsonMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonMapper<T> {
    fn clone(&self) -> Self {
        Self {
            record_path: self.record_path.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for JsonMapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonMapper")
            .field("record_path", &self.record_path)
            .finish()
    }
}

impl<T: DeserializeOwned> ResponseMapper<T> for JsonMapper<T> {
    fn decode(&self, body: &str) -> Result<Vec<T>> {
        let value = self.select(parse_body(body)?)?;

        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    serde_json::from_value(item).map_err(|e| {
                        Error::decode(format!("Schema mismatch at element {index}: {e}"))
                    })
                })
                .collect(),
            other => Err(Error::decode(format!(
                "Expected a JSON array, found {}",
                value_kind(&other)
            ))),
        }
    }
}

fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extract a value using a simple dotted path with optional array indices
fn extract_simple_path(value: &Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() || path == "$" {
        return Some(value.clone());
    }

    let mut current = value;
    for part in path.split('.') {
        // Handle array indexing like "data[0]" or "items[-1]"
        if let Some(bracket_pos) = part.find('[') {
            let name = &part[..bracket_pos];
            let index_str = part[bracket_pos + 1..].strip_suffix(']')?;

            if !name.is_empty() {
                current = current.get(name)?;
            }

            let index = index_str.parse::<i64>().ok()?;
            let Value::Array(arr) = current else {
                return None;
            };
            #[allow(clippy::cast_possible_wrap)]
            let idx = if index < 0 {
                usize::try_from(arr.len() as i64 + index).ok()?
            } else {
                usize::try_from(index).ok()?
            };
            current = arr.get(idx)?;
        } else {
            current = current.get(part)?;
        }
    }

    Some(current.clone())
}
