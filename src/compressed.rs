//! The prefix-grouped dictionary as it is shipped by the game.
//!
//! ```text
//! { "N": { "<prefix>": "<suffix-run>", ... }, "I": { ... } }
//! ```
//!
//! Word order is defined by the order of prefixes in each mapping, so the
//! groups are kept as ordered lists rather than hash maps.

use serde_json::Value;

use crate::category::Category;
use crate::error::{DecodeError, Result};

/// All words sharing one prefix, with their suffixes concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGroup {
    pub prefix: String,
    pub suffixes: String,
}

impl PrefixGroup {
    pub fn new(prefix: impl Into<String>, suffixes: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffixes: suffixes.into(),
        }
    }
}

/// A parsed compressed dictionary, one ordered group list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompressedDictionary {
    solutions: Vec<PrefixGroup>,
    guesses: Vec<PrefixGroup>,
}

impl CompressedDictionary {
    pub fn new(solutions: Vec<PrefixGroup>, guesses: Vec<PrefixGroup>) -> Self {
        Self { solutions, guesses }
    }

    /// Groups of a category in source order
    pub fn groups(&self, category: Category) -> &[PrefixGroup] {
        match category {
            Category::Solutions => &self.solutions,
            Category::Guesses => &self.guesses,
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value)?)
    }

    /// Validate the shape of an already parsed document.
    ///
    /// Both `N` and `I` must be present and map strings to strings. Other
    /// top-level keys are ignored.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let mut root = match value {
            Value::Object(root) => root,
            other => {
                return Err(DecodeError::Schema {
                    category: None,
                    reason: format!("expected a top-level object, found {}", kind(&other)),
                })
            }
        };

        for key in root.keys() {
            if Category::from_label(key).is_none() {
                log::debug!("Ignoring unknown top-level key '{}'", key);
            }
        }

        let solutions = take_groups(&mut root, Category::Solutions)?;
        let guesses = take_groups(&mut root, Category::Guesses)?;
        Ok(Self { solutions, guesses })
    }
}

fn take_groups(
    root: &mut serde_json::Map<String, Value>,
    category: Category,
) -> Result<Vec<PrefixGroup>, DecodeError> {
    let schema_error = |reason: String| DecodeError::Schema {
        category: Some(category),
        reason,
    };

    let value = root
        .remove(category.label())
        .ok_or_else(|| schema_error(format!("missing category '{}'", category)))?;

    let entries = match value {
        Value::Object(entries) => entries,
        other => {
            return Err(schema_error(format!(
                "category '{}' must be an object, found {}",
                category,
                kind(&other)
            )))
        }
    };

    entries
        .into_iter()
        .map(|(prefix, suffixes)| match suffixes {
            Value::String(suffixes) => Ok(PrefixGroup { prefix, suffixes }),
            other => Err(schema_error(format!(
                "prefix '{}' in category '{}' must map to a string, found {}",
                prefix,
                category,
                kind(&other)
            ))),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
