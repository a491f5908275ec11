use super::*;
use crate::store::test_fixtures::{empty_store, files_have_tags, tags_have_files};
use crate::store::Orientation;

#[test]
fn test_query_by_primary() {
    let store = tags_have_files();
    assert_eq!(store.query_by("Tag C", Side::Primary), vec!["file_2", "file_3"]);
}

#[test]
fn test_query_by_secondary() {
    let store = tags_have_files();
    assert_eq!(
        store.query_by("file_3", Side::Secondary),
        vec!["Tag B", "Tag C", "Tag D"]
    );
}

#[test]
fn test_query_by_unknown_key_is_empty() {
    let store = files_have_tags();
    assert!(store.query_by("nope", Side::Primary).is_empty());
    assert!(store.query_by("nope", Side::Secondary).is_empty());
}

#[test]
fn test_query_by_primary_sorts_output() {
    let mut store = empty_store(Orientation::TagToFile);
    store.add_associations(["z", "a", "m"], "Tag", false);
    assert_eq!(store.query_by("Tag", Side::Primary), vec!["a", "m", "z"]);
}

#[test]
fn test_list_files_by_tag_in_both_orientations() {
    assert_eq!(tags_have_files().list_files_by_tag("Tag B"), vec!["file_2", "file_3"]);
    assert_eq!(files_have_tags().list_files_by_tag("Tag B"), vec!["file_2", "file_3"]);
}

#[test]
fn test_list_tags_by_file_in_both_orientations() {
    let expected = vec!["Tag B", "Tag C", "Tag D"];
    assert_eq!(tags_have_files().list_tags_by_file("file_3"), expected);
    assert_eq!(files_have_tags().list_tags_by_file("file_3"), expected);
}

#[test]
fn test_list_tags_in_both_orientations() {
    let expected = vec!["Tag A", "Tag B", "Tag C", "Tag D"];
    assert_eq!(tags_have_files().list_tags(), expected);
    assert_eq!(files_have_tags().list_tags(), expected);
}

#[test]
fn test_list_files_in_both_orientations() {
    let expected = vec!["file_1", "file_2", "file_3"];
    assert_eq!(tags_have_files().list_files(), expected);
    assert_eq!(files_have_tags().list_files(), expected);
}

#[test]
fn test_all_primary_keys_and_secondary_values() {
    let store = files_have_tags();
    assert_eq!(store.all_primary_keys(), vec!["file_1", "file_2", "file_3"]);
    assert_eq!(
        store.all_secondary_values(),
        vec!["Tag A", "Tag B", "Tag C", "Tag D"]
    );
}

#[test]
fn test_queries_on_empty_store() {
    let store = empty_store(Orientation::FileToTag);
    assert!(store.list_tags().is_empty());
    assert!(store.list_files().is_empty());
    assert!(store.list_files_by_tag("Tag A").is_empty());
}

#[test]
fn test_scenario_built_from_scratch() {
    let mut store = empty_store(Orientation::TagToFile);
    for (file, tag) in [
        ("file_1", "TagA"),
        ("file_2", "TagB"),
        ("file_2", "TagC"),
        ("file_3", "TagB"),
        ("file_3", "TagC"),
        ("file_3", "TagD"),
    ] {
        store.add_association(file, tag, false).unwrap();
    }

    assert_eq!(store.query_by("TagC", Side::Primary), vec!["file_2", "file_3"]);
    assert_eq!(store.list_tags_by_file("file_3"), vec!["TagB", "TagC", "TagD"]);
    assert_eq!(store.all_primary_keys(), vec!["TagA", "TagB", "TagC", "TagD"]);

    store.remove_association("file_3", "TagD");
    assert_eq!(store.len(), 3);
    assert!(!store.mapping().contains_key("TagD"));
}
