//! Tagging, untagging and renaming.

use super::{AssociationStore, Names, Role, Side};
use crate::error::StoreError;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// A file/tag pair that could not be added during a bulk operation.
#[derive(Debug)]
pub struct AssociationFailure {
    pub file: String,
    pub tag: String,
    pub error: StoreError,
}

/// Every `(file, tag)` pair of the cross product, looping over the longer
/// list on the outside.
fn cross_product<'a>(files: &'a [String], tags: &'a [String]) -> Vec<(&'a str, &'a str)> {
    let mut pairs = Vec::with_capacity(files.len().saturating_mul(tags.len()));
    if files.len() >= tags.len() {
        for file in files {
            for tag in tags {
                pairs.push((file.as_str(), tag.as_str()));
            }
        }
    } else {
        for tag in tags {
            for file in files {
                pairs.push((file.as_str(), tag.as_str()));
            }
        }
    }
    pairs
}

impl AssociationStore {
    /// Tag `file` with `tag`.
    ///
    /// With `assert_exists`, fails with [`StoreError::NotFound`] and leaves
    /// the store untouched when `file` does not exist. Adding an edge that is
    /// already present is a no-op.
    pub fn add_association(
        &mut self,
        file: &str,
        tag: &str,
        assert_exists: bool,
    ) -> Result<(), StoreError> {
        if assert_exists && !self.probe.exists(Path::new(file)) {
            error!(file, "File \"{}\" not found!", file);
            return Err(StoreError::NotFound(PathBuf::from(file)));
        }
        let (key, value) = self.orientation.key_value(file, tag);
        if self.insert_pair(key, value) {
            debug!(file, tag, orientation = %self.orientation, "Tagged");
        }
        Ok(())
    }

    /// Tag every file in `files` with every tag in `tags`.
    ///
    /// Pairs that fail (only possible with `assert_exists`) are logged and
    /// returned; the remaining pairs are still applied.
    pub fn add_associations(
        &mut self,
        files: impl Into<Names>,
        tags: impl Into<Names>,
        assert_exists: bool,
    ) -> Vec<AssociationFailure> {
        let files = files.into().into_vec();
        let tags = tags.into().into_vec();
        debug!(
            files = files.len(),
            tags = tags.len(),
            "Using {} memory mapping.",
            self.orientation
        );

        let mut failures = Vec::new();
        for (file, tag) in cross_product(&files, &tags) {
            if let Err(error) = self.add_association(file, tag, assert_exists) {
                warn!(file, tag, %error, "Skipping association");
                failures.push(AssociationFailure {
                    file: file.to_string(),
                    tag: tag.to_string(),
                    error,
                });
            }
        }
        failures
    }

    /// Remove the tag `tag` from `file`. Missing edges are ignored.
    pub fn remove_association(&mut self, file: &str, tag: &str) {
        let (key, value) = self.orientation.key_value(file, tag);
        if self.remove_pair(key, value) {
            debug!(file, tag, orientation = %self.orientation, "Untagged");
        }
    }

    /// Remove every tag in `tags` from every file in `files`.
    pub fn remove_associations(&mut self, files: impl Into<Names>, tags: impl Into<Names>) {
        let files = files.into().into_vec();
        let tags = tags.into().into_vec();
        debug!(
            files = files.len(),
            tags = tags.len(),
            "Using {} memory mapping.",
            self.orientation
        );

        for (file, tag) in cross_product(&files, &tags) {
            self.remove_association(file, tag);
        }
    }

    /// Rename a primary key under the current orientation.
    pub fn rename_key(&mut self, old: &str, new: &str) {
        self.rename(self.orientation.primary_role(), old, new);
    }

    pub fn rename_tag(&mut self, old: &str, new: &str) {
        self.rename(Role::Tag, old, new);
    }

    pub fn rename_file(&mut self, old: &str, new: &str) {
        self.rename(Role::File, old, new);
    }

    /// Re-point every edge of the `role` name `old` to `new`.
    ///
    /// Unknown names are ignored. When `new` already has edges the two sets
    /// are merged, so no association is lost.
    pub fn rename(&mut self, role: Role, old: &str, new: &str) {
        debug!(?role, old, new, "Using {} memory mapping.", self.orientation);
        if old == new {
            return;
        }
        match self.orientation.side_of(role) {
            Side::Primary => self.rename_primary(old, new),
            Side::Secondary => {
                info!(
                    "{:?} rename operations may be slow for {} maps...",
                    role, self.orientation
                );
                self.rename_secondary(old, new);
            }
        }
    }

    fn rename_primary(&mut self, old: &str, new: &str) {
        let Some(moved) = self.mapping.remove(old) else {
            return;
        };
        match self.mapping.entry(new.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(moved);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                for value in moved {
                    if !existing.contains(&value) {
                        existing.push(value);
                    }
                }
            }
        }
    }

    fn rename_secondary(&mut self, old: &str, new: &str) {
        for values in self.mapping.values_mut() {
            let Some(pos) = values.iter().position(|v| v == old) else {
                continue;
            };
            if values.iter().any(|v| v == new) {
                values.remove(pos);
            } else if let Some(slot) = values.get_mut(pos) {
                *slot = new.to_string();
            }
        }
    }
}

#[cfg(test)]
#[path = "mutate_tests.rs"]
mod tests;
