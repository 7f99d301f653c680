// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior catalog loading and lookup.

use crate::behavior::{Behavior, BehaviorRecord};
use crate::error::{Malformed, ParrotError};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Behaviors keyed by identity, loaded once per invocation
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    behaviors: HashMap<String, Behavior>,
}

impl Catalog {
    /// Read and parse the catalog document at `path`.
    ///
    /// A file that cannot be read is reported as a missing catalog. Bytes
    /// that are not UTF-8 JSON are a malformed one.
    pub fn load(path: &Path) -> Result<Self, ParrotError> {
        let content = std::fs::read(path).map_err(|source| ParrotError::MissingCatalog {
            path: path.to_path_buf(),
            source: Some(source),
        })?;
        Ok(Self::parse(content)?)
    }

    /// Parse a catalog document.
    ///
    /// The document must be a non-empty JSON array of behavior objects. The
    /// first defective element rejects the whole document. When two elements
    /// share an identity the later one wins.
    pub fn parse(content: impl AsRef<[u8]>) -> Result<Self, Malformed> {
        let document: Value =
            serde_json::from_slice(content.as_ref()).map_err(Malformed::Parse)?;
        let elements = match document {
            Value::Array(elements) => elements,
            other => {
                return Err(Malformed::NotAnArray {
                    found: json_type(&other),
                })
            }
        };
        if elements.is_empty() {
            return Err(Malformed::Empty);
        }

        let mut behaviors = HashMap::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            let record: BehaviorRecord = serde_json::from_value(element)
                .map_err(|source| Malformed::Record { index, source })?;
            let behavior = record.into_behavior();
            behaviors.insert(behavior.identity().to_string(), behavior);
        }
        Ok(Self { behaviors })
    }

    /// Look up the behavior recorded for `identity`.
    pub fn resolve(&self, identity: &str) -> Result<&Behavior, ParrotError> {
        self.behaviors
            .get(identity)
            .ok_or_else(|| ParrotError::UnknownBehavior {
                identity: identity.to_string(),
            })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
