//! Dataset Decoding
//!
//! Turns a serialized JSON dataset into `Phrase` records. Field names are
//! matched case-insensitively (`Text`, `TEXT` and `text` all land on the same
//! field), unknown fields are ignored and absent or `null` fields keep their
//! defaults.

use super::error::LoadError;
use super::types::Phrase;
use serde_json::{Map, Value};

/// Canonical wire names, as produced by `Phrase`'s serde derive.
const FIELDS: [&str; 7] = [
    "text",
    "category",
    "actualMeaning",
    "afrikaansInfluence",
    "explainLikeImDutch",
    "misunderstandingProbability",
    "confidence",
];

pub fn decode_phrases(bytes: &[u8]) -> Result<Vec<Phrase>, LoadError> {
    let root: Value = serde_json::from_slice(bytes)?;

    let items = match root {
        // An explicit `null` document is an empty dataset, not a failure.
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            return Err(LoadError::Decode(format!(
                "expected an array of phrases, found {}",
                json_kind(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| decode_phrase(position, item))
        .collect()
}

fn decode_phrase(position: usize, item: Value) -> Result<Phrase, LoadError> {
    let fields = match item {
        Value::Object(fields) => fields,
        other => {
            return Err(LoadError::Decode(format!(
                "phrase #{} is {}, expected an object",
                position,
                json_kind(&other)
            )));
        }
    };

    let normalized = normalize_fields(fields);
    serde_json::from_value(Value::Object(normalized))
        .map_err(|e| LoadError::Decode(format!("phrase #{}: {}", position, e)))
}

fn normalize_fields(fields: Map<String, Value>) -> Map<String, Value> {
    let mut normalized = Map::new();
    for (key, value) in fields {
        if value.is_null() {
            continue;
        }
        if let Some(canonical) = FIELDS.iter().find(|name| name.eq_ignore_ascii_case(&key)) {
            normalized.insert(canonical.to_string(), value);
        }
    }
    normalized
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
