//! Delimited text: one `TAG<==>FILE` line per edge.
//!
//! The tag column always comes first, whatever the orientation, so a file
//! written under one orientation reads back correctly under the other. Names
//! are not escaped; a name containing the separator or a newline cannot be
//! represented.

use crate::error::StoreError;
use crate::store::{insert_unique, AssociationMap, Orientation};

/// Separates the tag from the file on each line.
pub const SEPARATOR: &str = "<==>";

/// Whether `name` survives a dump and parse unchanged.
#[must_use]
pub fn is_representable(name: &str) -> bool {
    !name.contains(SEPARATOR) && !name.contains(['\n', '\r'])
}

/// Render every edge of `map`.
///
/// With `sorted` the lines are grouped by primary key: keys in order, and
/// values in order within each key. Otherwise they follow the map's
/// iteration order. Either way the tag column comes first.
#[must_use]
pub fn dump(map: &AssociationMap, orientation: Orientation, sorted: bool) -> String {
    let mut edges: Vec<(&str, &str)> = map
        .iter()
        .flat_map(|(key, values)| values.iter().map(move |value| (key.as_str(), value.as_str())))
        .collect();
    if sorted {
        edges.sort_unstable();
    }

    let mut out = String::new();
    for (key, value) in edges {
        let (tag, file) = match orientation {
            Orientation::TagToFile => (key, value),
            Orientation::FileToTag => (value, key),
        };
        out.push_str(tag);
        out.push_str(SEPARATOR);
        out.push_str(file);
        out.push('\n');
    }
    out
}

/// Build a map from `TAG<==>FILE` lines, keyed per `orientation`.
///
/// Blank lines are skipped and both `\n` and `\r\n` endings are accepted. The
/// line is split at the first separator.
pub fn parse(data: &str, orientation: Orientation) -> Result<AssociationMap, StoreError> {
    let mut map = AssociationMap::new();
    for (index, line) in data.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let Some((tag, file)) = line.split_once(SEPARATOR) else {
            return Err(StoreError::MalformedLine {
                line: index.saturating_add(1),
                content: line.to_string(),
            });
        };
        let (key, value) = orientation.key_value(file, tag);
        insert_unique(&mut map, key, value);
    }
    Ok(map)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
