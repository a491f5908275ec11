//! Switching the store between orientations.

use super::{AssociationStore, Orientation};
use crate::codec::text;
use crate::error::StoreError;
use tracing::{debug, error, info, warn};

impl AssociationStore {
    /// Flip to the other orientation, keeping the same edges.
    pub fn remap(&mut self) -> Result<(), StoreError> {
        self.remap_to(self.orientation.flipped()).map(|_| ())
    }

    /// Switch to `target`. Returns whether anything changed.
    ///
    /// The map is dumped as text under the current orientation and parsed back
    /// under `target`; the text parser already knows which column becomes the
    /// key. A name holding the separator or a line break would come back
    /// split differently, so such a store is refused with
    /// [`StoreError::Unrepresentable`] and left as it was.
    pub fn remap_to(&mut self, target: Orientation) -> Result<bool, StoreError> {
        if target == self.orientation {
            debug!(orientation = %target, "Already using requested memory mapping");
            return Ok(false);
        }
        if let Some(name) = self
            .mapping
            .iter()
            .flat_map(|(key, values)| std::iter::once(key).chain(values))
            .find(|name| !text::is_representable(name))
        {
            error!(name = %name, "Cannot remap: name does not fit a TAG<==>FILE line");
            return Err(StoreError::Unrepresentable(name.clone()));
        }

        let dumped = text::dump(&self.mapping, self.orientation, true);
        let remapped = text::parse(&dumped, target)?;

        info!(from = %self.orientation, to = %target, keys = remapped.len(), "Remapped associations");
        self.mapping = remapped;
        self.orientation = target;
        Ok(true)
    }

    /// Like [`Self::remap_to`] but takes an orientation token such as
    /// `file-->tag`. Unrecognized tokens leave the store untouched.
    pub fn remap_token(&mut self, token: &str) -> Result<bool, StoreError> {
        match token.parse::<Orientation>() {
            Ok(target) => self.remap_to(target),
            Err(e) => {
                warn!("Ignoring remap request: {e}");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
#[path = "remap_tests.rs"]
mod tests;
