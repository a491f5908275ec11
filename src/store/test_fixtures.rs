//! Stores seeded with the same four tags and three files, one per orientation.

use super::{AssociationMap, AssociationStore, Orientation};
use std::collections::BTreeMap;
use std::path::Path;

fn owned(entries: &[(&str, &[&str])]) -> AssociationMap {
    entries
        .iter()
        .map(|(key, values)| {
            (
                (*key).to_string(),
                values.iter().map(|v| (*v).to_string()).collect(),
            )
        })
        .collect()
}

/// A store whose probe reports that every path exists.
pub(crate) fn empty_store(orientation: Orientation) -> AssociationStore {
    AssociationStore::with_probe(orientation, |_: &Path| true)
}

pub(crate) fn tags_have_files() -> AssociationStore {
    let mut store = empty_store(Orientation::TagToFile);
    store.merge(owned(&[
        ("Tag A", &["file_1"]),
        ("Tag B", &["file_2", "file_3"]),
        ("Tag C", &["file_2", "file_3"]),
        ("Tag D", &["file_3"]),
    ]));
    store
}

pub(crate) fn files_have_tags() -> AssociationStore {
    let mut store = empty_store(Orientation::FileToTag);
    store.merge(owned(&[
        ("file_1", &["Tag A"]),
        ("file_2", &["Tag B", "Tag C"]),
        ("file_3", &["Tag B", "Tag C", "Tag D"]),
    ]));
    store
}

/// `entries` as a sorted snapshot, for comparing against [`AssociationStore::snapshot`].
pub(crate) fn snapshot_of(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(key, values)| {
            let mut values: Vec<String> = values.iter().map(|v| (*v).to_string()).collect();
            values.sort();
            ((*key).to_string(), values)
        })
        .collect()
}
