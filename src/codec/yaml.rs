//! YAML block mapping: `key:\n- value\n`, each list sorted.
//!
//! Parsing needs the `yaml` feature. Without it, dumping falls back to a small
//! emitter that quotes every scalar.

use crate::error::StoreError;
use crate::store::AssociationMap;
use std::collections::BTreeMap;

type SortedMap<'a> = BTreeMap<&'a str, Vec<&'a str>>;

/// Render `map` with sorted keys and sorted value lists.
pub fn dump(map: &AssociationMap) -> Result<String, StoreError> {
    let sorted: SortedMap<'_> = map
        .iter()
        .map(|(key, values)| {
            let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
            values.sort_unstable();
            (key.as_str(), values)
        })
        .collect();
    render(&sorted)
}

#[cfg(feature = "yaml")]
fn render(sorted: &SortedMap<'_>) -> Result<String, StoreError> {
    Ok(serde_yaml::to_string(sorted)?)
}

#[cfg(not(feature = "yaml"))]
fn render(sorted: &SortedMap<'_>) -> Result<String, StoreError> {
    // JSON string literals are valid YAML double-quoted scalars.
    let mut out = String::new();
    for (key, values) in sorted {
        out.push_str(&serde_json::to_string(key)?);
        out.push_str(":\n");
        for value in values {
            out.push_str("- ");
            out.push_str(&serde_json::to_string(value)?);
            out.push('\n');
        }
    }
    Ok(out)
}

/// Rebuild a map from a YAML mapping of lists. Keys are taken verbatim and
/// scalar values are coerced to strings; null entries are skipped.
#[cfg(feature = "yaml")]
pub fn parse(data: &str) -> Result<AssociationMap, StoreError> {
    use crate::store::insert_unique;
    use serde_yaml::Value;
    use std::collections::HashMap;

    let mut map = AssociationMap::new();
    if data.trim().is_empty() {
        return Ok(map);
    }
    let raw: Option<HashMap<String, Option<Vec<Value>>>> = serde_yaml::from_str(data)?;
    for (key, values) in raw.unwrap_or_default() {
        for value in values.unwrap_or_default() {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => serde_yaml::to_string(&other)?.trim_end().to_string(),
            };
            insert_unique(&mut map, &key, &value);
        }
    }
    Ok(map)
}

#[cfg(not(feature = "yaml"))]
pub fn parse(_data: &str) -> Result<AssociationMap, StoreError> {
    Err(StoreError::UnsupportedFormat(
        "yaml (parsing is not available in this build)".to_string(),
    ))
}

#[cfg(test)]
#[path = "yaml_tests.rs"]
mod tests;
