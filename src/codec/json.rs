//! JSON object: `{"key": ["value", ...]}`.

use crate::error::StoreError;
use crate::store::{insert_unique, AssociationMap};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Render `map` as a pretty-printed object with sorted keys. Value arrays
/// keep their stored order.
pub fn dump(map: &AssociationMap) -> Result<String, StoreError> {
    let sorted: BTreeMap<&str, &Vec<String>> =
        map.iter().map(|(key, values)| (key.as_str(), values)).collect();
    let mut out = serde_json::to_string_pretty(&sorted)?;
    out.push('\n');
    Ok(out)
}

/// Rebuild a map from a JSON object. Keys are taken verbatim and every value
/// is coerced to a string.
pub fn parse(data: &str) -> Result<AssociationMap, StoreError> {
    let raw: HashMap<String, Vec<Value>> = serde_json::from_str(data)?;
    let mut map = AssociationMap::new();
    for (key, values) in raw {
        for value in values {
            insert_unique(&mut map, &key, &coerce(value));
        }
    }
    Ok(map)
}

fn coerce(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
