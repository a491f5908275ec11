//! Loading and saving the store, from strings or files.

use super::{AssociationFailure, AssociationMap, AssociationStore, Orientation};
use crate::codec::{text, Format};
use crate::error::StoreError;
use crate::utils::atomic_write;
use std::path::Path;
use tracing::{error, info, warn};

/// Options for [`AssociationStore::save`].
#[derive(Debug, Clone, Copy)]
pub struct SaveOptions {
    /// Replace an existing file. When false an existing target is an error.
    pub overwrite: bool,
    /// Format override. Inferred from the extension when `None`.
    pub format: Option<Format>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            format: None,
        }
    }
}

/// Options for [`AssociationStore::load`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Discard the current associations before merging the loaded ones.
    pub overwrite: bool,
    /// Format override. Inferred from the extension when `None`.
    pub format: Option<Format>,
    /// Check every loaded file with the probe and skip the missing ones.
    pub assert_exists: bool,
}

impl AssociationStore {
    /// Render the store in `format`.
    pub fn dump(&self, format: Format) -> Result<String, StoreError> {
        self.codec.dump(format, &self.mapping, self.orientation)
    }

    /// Render the store as `TAG<==>FILE` lines.
    ///
    /// Sorted output is canonical: the same edges always give the same text.
    /// Unsorted output follows the map's iteration order.
    #[must_use]
    pub fn dump_text(&self, sorted: bool) -> String {
        text::dump(&self.mapping, self.orientation, sorted)
    }

    /// Parse `data` under the current orientation without touching the store.
    pub fn parse(&self, data: &str, format: Format) -> Result<AssociationMap, StoreError> {
        self.codec.parse(format, data, self.orientation)
    }

    /// Parse `data` and merge it in. With `overwrite` the current associations
    /// are replaced instead. Nothing changes if parsing fails.
    pub fn ingest(&mut self, data: &str, format: Format, overwrite: bool) -> Result<(), StoreError> {
        let parsed = self.parse(data, format)?;
        if overwrite {
            self.mapping.clear();
        }
        self.merge(parsed);
        Ok(())
    }

    /// Write the store to `path`.
    ///
    /// The file is written through a temporary sibling and renamed into place.
    pub fn save(&self, path: impl AsRef<Path>, options: SaveOptions) -> Result<(), StoreError> {
        let path = path.as_ref();
        if !options.overwrite && self.probe.exists(path) {
            error!("File \"{}\" already exists!", path.display());
            return Err(StoreError::AlreadyExists(path.to_path_buf()));
        }

        let format = Format::resolve(options.format, path);
        let content = self.dump(format)?;
        atomic_write(path, &content)?;

        info!(
            path = %path.display(),
            %format,
            orientation = %self.orientation,
            edges = self.edge_count(),
            "Saved associations"
        );
        Ok(())
    }

    /// Read associations from `path` and merge them in.
    ///
    /// With `overwrite` the current associations are replaced. With
    /// `assert_exists` each loaded edge goes through the same existence check
    /// as [`Self::add_association`]; edges naming a missing file are skipped
    /// and returned, the rest are kept.
    pub fn load(
        &mut self,
        path: impl AsRef<Path>,
        options: LoadOptions,
    ) -> Result<Vec<AssociationFailure>, StoreError> {
        let path = path.as_ref();
        if !self.probe.exists(path) {
            error!("File \"{}\" not found!", path.display());
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let format = Format::resolve(options.format, path);
        let content = std::fs::read_to_string(path)?;
        let parsed = self.parse(&content, format)?;
        if options.overwrite {
            self.mapping.clear();
        }
        let failures = if options.assert_exists {
            self.merge_existing(parsed)
        } else {
            self.merge(parsed);
            Vec::new()
        };

        info!(
            path = %path.display(),
            %format,
            orientation = %self.orientation,
            edges = self.edge_count(),
            skipped = failures.len(),
            "Loaded associations"
        );
        Ok(failures)
    }

    /// Merge `parsed`, keeping only edges whose file exists.
    fn merge_existing(&mut self, parsed: AssociationMap) -> Vec<AssociationFailure> {
        let mut failures = Vec::new();
        for (key, values) in parsed {
            for value in values {
                let (file, tag) = match self.orientation {
                    Orientation::TagToFile => (value.as_str(), key.as_str()),
                    Orientation::FileToTag => (key.as_str(), value.as_str()),
                };
                if let Err(error) = self.add_association(file, tag, true) {
                    warn!(file, tag, %error, "Skipping loaded association");
                    failures.push(AssociationFailure {
                        file: file.to_string(),
                        tag: tag.to_string(),
                        error,
                    });
                }
            }
        }
        failures
    }
}

#[cfg(test)]
#[path = "persist_tests.rs"]
mod tests;
