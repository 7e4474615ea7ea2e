//! Query-string flattening.
//!
//! Params are arbitrary JSON, so nested values are flattened with bracket
//! notation: `{"filter": {"type": "park"}, "ids": [1, 2]}` becomes
//! `filter[type]=park`, `ids[0]=1`, `ids[1]=2`. `null` renders as an empty
//! value; empty arrays and objects render nothing.

use serde_json::{Map, Value};

/// Flattened `(key, value)` pairs, unencoded, in map order.
pub fn to_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key.clone(), value, false, &mut pairs);
    }
    pairs
}

/// Canonical query string for diagnostics: keys sorted at every level, no
/// percent-encoding. Empty when there are no params.
pub fn stringify_sorted(params: &Map<String, Value>) -> String {
    let mut keys: Vec<&String> = params.keys().collect();
    keys.sort();

    let mut pairs = Vec::new();
    for key in keys {
        flatten(key.clone(), &params[key.as_str()], true, &mut pairs);
    }

    pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn flatten(prefix: String, value: &Value, sorted: bool, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            if sorted {
                keys.sort();
            }
            for key in keys {
                flatten(format!("{prefix}[{key}]"), &map[key.as_str()], sorted, pairs);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(format!("{prefix}[{index}]"), item, sorted, pairs);
            }
        }
        Value::Null => pairs.push((prefix, String::new())),
        Value::String(text) => pairs.push((prefix, text.clone())),
        Value::Bool(_) | Value::Number(_) => pairs.push((prefix, value.to_string())),
    }
}
