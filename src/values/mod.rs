//! Template value sources and precedence merging.
//!
//! Template values may arrive from three competing sources:
//!
//! - a values file (`--values <path>`), a flat YAML mapping
//! - a base64-encoded payload (`--encoded-values <base64>`) decoding to the
//!   same document shape as the file
//! - inline entries (`--set key=val[,key=val...]`, repeatable)
//!
//! Each source yields a [`Values`] mapping. The assembler overlays them in
//! increasing precedence order (file, then encoded, then inline), so on key
//! collision the documented contract holds: inline > encoded > file.
//!
//! Keys are case-sensitive and must be non-empty; empty keys are rejected at
//! parse time rather than silently dropped.

use crate::error::{RenderError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

#[cfg(test)]
mod tests;

/// A mapping of template variable names to values from a single source.
///
/// Backed by a `BTreeMap` so iteration order (and any serialized form) is
/// deterministic, which keeps assembled contexts reproducible for caching
/// and auditing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Values(BTreeMap<String, String>);

impl Values {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a values document from YAML text.
    ///
    /// The document must be a flat mapping of non-empty string keys to scalar
    /// values; scalars (string, number, bool) are coerced to their string
    /// form and nulls become the empty string. An empty document is valid and
    /// yields an empty mapping.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }

        let doc: serde_yaml::Value = serde_yaml::from_str(text)
            .map_err(|e| RenderError::Parse(e.to_string()))?;

        let mapping = match doc {
            // An empty file deserializes to null; it contributes nothing.
            serde_yaml::Value::Null => return Ok(Self::new()),
            serde_yaml::Value::Mapping(m) => m,
            other => {
                return Err(RenderError::Parse(format!(
                    "expected a mapping of keys to values, got {}",
                    yaml_type_name(&other)
                )));
            }
        };

        let mut values = BTreeMap::new();
        for (key, value) in mapping {
            let key = match key {
                serde_yaml::Value::String(s) => s,
                other => {
                    return Err(RenderError::Parse(format!(
                        "keys must be strings, got {}",
                        yaml_type_name(&other)
                    )));
                }
            };
            if key.is_empty() {
                return Err(RenderError::Parse(
                    "keys must be non-empty".to_string(),
                ));
            }
            let value = match value {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Null => String::new(),
                other => {
                    return Err(RenderError::Parse(format!(
                        "value for key '{}' must be a scalar, got {}",
                        key,
                        yaml_type_name(&other)
                    )));
                }
            };
            values.insert(key, value);
        }

        Ok(Self(values))
    }

    /// Load and parse a values document from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RenderError::SourceRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&content)
    }

    /// Decode a base64 payload into a values document.
    ///
    /// Fails on invalid base64, non-UTF-8 content, or a decoded document
    /// that does not match the values-file shape. A bad payload is always an
    /// error, never a silently-empty mapping.
    pub fn from_base64(payload: &str) -> Result<Self> {
        let bytes = BASE64
            .decode(payload.trim())
            .map_err(|e| RenderError::Decode(e.to_string()))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| RenderError::Decode(e.to_string()))?;
        Self::from_yaml(&text).map_err(|e| match e {
            RenderError::Parse(msg) => RenderError::Decode(msg),
            other => other,
        })
    }

    /// Parse inline `--set` entries into a mapping.
    ///
    /// Each entry is either a single `key=value` pair or a comma-separated
    /// list of such pairs. Segments split on the first `=`, so values may
    /// themselves contain `=`. Later segments override earlier ones on key
    /// collision. A segment without `=` or with an empty key fails, naming
    /// the offending segment.
    pub fn from_set_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let mut values = BTreeMap::new();
        for entry in entries {
            for segment in entry.as_ref().split(',') {
                let (key, value) = segment
                    .split_once('=')
                    .ok_or_else(|| RenderError::MalformedSetEntry(segment.to_string()))?;
                if key.is_empty() {
                    return Err(RenderError::MalformedSetEntry(segment.to_string()));
                }
                values.insert(key.to_string(), value.to_string());
            }
        }
        Ok(Self(values))
    }

    /// Overlay a higher-precedence mapping onto this one.
    ///
    /// Keys from `higher` overwrite keys already present in `self`.
    pub fn overlay(&mut self, higher: Values) {
        self.0.extend(higher.0);
    }

    /// Merge mappings supplied in increasing precedence order.
    pub fn merged<I: IntoIterator<Item = Values>>(tiers: I) -> Values {
        let mut merged = Values::new();
        for tier in tiers {
            merged.overlay(tier);
        }
        merged
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of entries in the mapping.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Values {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Human-readable name of a YAML value's type, for error messages.
fn yaml_type_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
