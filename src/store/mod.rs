//! The in-memory file/tag association store.
//!
//! One adjacency map holds every edge. Its orientation decides whether tags
//! or files are the keys; both query directions work under either
//! orientation, one of them by scanning.

mod mutate;
mod names;
mod orientation;
mod persist;
mod query;
mod remap;

pub use mutate::AssociationFailure;
pub use names::Names;
pub use orientation::{Orientation, Role, Side, UnknownOrientation};
pub use persist::{LoadOptions, SaveOptions};

use crate::codec::{Capabilities, Codec};
use crate::probe::{PathProbe, RealFs};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Primary key to its associated secondary names.
///
/// Every key has at least one value and no value repeats within a key.
pub type AssociationMap = HashMap<String, Vec<String>>;

/// Add `value` under `key` unless it is already there.
///
/// Returns whether the map changed.
pub(crate) fn insert_unique(map: &mut AssociationMap, key: &str, value: &str) -> bool {
    if let Some(values) = map.get_mut(key) {
        if values.iter().any(|v| v == value) {
            return false;
        }
        values.push(value.to_string());
    } else {
        map.insert(key.to_string(), vec![value.to_string()]);
    }
    true
}

/// Owns the association map and the orientation it is stored in.
pub struct AssociationStore {
    mapping: AssociationMap,
    orientation: Orientation,
    probe: Box<dyn PathProbe>,
    codec: Codec,
}

impl fmt::Debug for AssociationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssociationStore")
            .field("orientation", &self.orientation)
            .field("mapping", &self.mapping)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl Default for AssociationStore {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl AssociationStore {
    /// An empty store checking file existence against the real filesystem.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self::with_probe(orientation, RealFs)
    }

    /// An empty store using `probe` for every existence check.
    #[must_use]
    pub fn with_probe(orientation: Orientation, probe: impl PathProbe + 'static) -> Self {
        Self {
            mapping: AssociationMap::new(),
            orientation,
            probe: Box::new(probe),
            codec: Codec::default(),
        }
    }

    /// A store seeded with `mapping`, whose keys are taken to be primary
    /// under `orientation`. Duplicate values and empty lists are dropped.
    #[must_use]
    pub fn from_mapping(orientation: Orientation, mapping: AssociationMap) -> Self {
        let mut store = Self::new(orientation);
        store.merge(mapping);
        store
    }

    /// Replace the codec capabilities.
    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.codec = Codec::new(capabilities);
        self
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn mapping(&self) -> &AssociationMap {
        &self.mapping
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.codec.capabilities()
    }

    /// Number of primary keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Number of file/tag edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.mapping.values().map(Vec::len).sum()
    }

    /// Whether `file` is tagged with `tag`.
    #[must_use]
    pub fn contains(&self, file: &str, tag: &str) -> bool {
        let (key, value) = self.orientation.key_value(file, tag);
        self.mapping
            .get(key)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Every edge as `(file, tag)`, independent of orientation.
    #[must_use]
    pub fn edges(&self) -> BTreeSet<(String, String)> {
        self.mapping
            .iter()
            .flat_map(|(key, values)| {
                values.iter().map(move |value| match self.orientation {
                    Orientation::TagToFile => (value.clone(), key.clone()),
                    Orientation::FileToTag => (key.clone(), value.clone()),
                })
            })
            .collect()
    }

    /// The mapping with keys and value lists sorted.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Vec<String>> {
        self.mapping
            .iter()
            .map(|(key, values)| {
                let mut values = values.clone();
                values.sort();
                (key.clone(), values)
            })
            .collect()
    }

    /// Drop every association. The orientation is kept.
    pub fn clear(&mut self) {
        self.mapping.clear();
    }

    /// Union `mapping` into the store, key for key.
    pub(crate) fn merge(&mut self, mapping: AssociationMap) {
        for (key, values) in mapping {
            for value in values {
                insert_unique(&mut self.mapping, &key, &value);
            }
        }
    }

    pub(crate) fn insert_pair(&mut self, key: &str, value: &str) -> bool {
        insert_unique(&mut self.mapping, key, value)
    }

    /// Remove `value` from `key`, deleting the key once it has no values left.
    pub(crate) fn remove_pair(&mut self, key: &str, value: &str) -> bool {
        let Some(values) = self.mapping.get_mut(key) else {
            return false;
        };
        let before = values.len();
        values.retain(|v| v != value);
        let removed = values.len() != before;
        if values.is_empty() {
            self.mapping.remove(key);
        }
        removed
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

#[cfg(test)]
pub(crate) mod test_fixtures;
