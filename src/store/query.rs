//! Read-only lookups. Every result is sorted.

use super::{AssociationStore, Role, Side};
use std::collections::BTreeSet;
use tracing::{debug, info};

impl AssociationStore {
    /// Names associated with `key`.
    ///
    /// `side` says whether `key` is a map key ([`Side::Primary`], a direct
    /// lookup) or a value name ([`Side::Secondary`], a scan over every key).
    /// Unknown names yield an empty list.
    #[must_use]
    pub fn query_by(&self, key: &str, side: Side) -> Vec<String> {
        let mut found: Vec<String> = match side {
            Side::Primary => self.mapping.get(key).cloned().unwrap_or_default(),
            Side::Secondary => self
                .mapping
                .iter()
                .filter(|(_, values)| values.iter().any(|v| v == key))
                .map(|(primary, _)| primary.clone())
                .collect(),
        };
        found.sort();
        found
    }

    /// Every map key.
    #[must_use]
    pub fn all_primary_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.mapping.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Every name found in any value list, deduplicated.
    #[must_use]
    pub fn all_secondary_values(&self) -> Vec<String> {
        self.mapping
            .values()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Files tagged with `tag`.
    #[must_use]
    pub fn list_files_by_tag(&self, tag: &str) -> Vec<String> {
        self.lookup(Role::Tag, tag)
    }

    /// Tags attached to `file`.
    #[must_use]
    pub fn list_tags_by_file(&self, file: &str) -> Vec<String> {
        self.lookup(Role::File, file)
    }

    /// Every tag in use.
    #[must_use]
    pub fn list_tags(&self) -> Vec<String> {
        self.all_of(Role::Tag)
    }

    /// Every tagged file.
    #[must_use]
    pub fn list_files(&self) -> Vec<String> {
        self.all_of(Role::File)
    }

    fn lookup(&self, role: Role, name: &str) -> Vec<String> {
        let side = self.orientation.side_of(role);
        debug!(?role, name, "Using {} memory mapping.", self.orientation);
        if side == Side::Secondary {
            info!(
                "Queries by {:?} may be slow for {} maps...",
                role, self.orientation
            );
        }
        self.query_by(name, side)
    }

    fn all_of(&self, role: Role) -> Vec<String> {
        debug!(?role, "Using {} memory mapping.", self.orientation);
        match self.orientation.side_of(role) {
            Side::Primary => self.all_primary_keys(),
            Side::Secondary => {
                info!(
                    "Exhaustive {:?} listing may be slow for {} maps...",
                    role, self.orientation
                );
                self.all_secondary_values()
            }
        }
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
