//! Serialization of the association map.
//!
//! Three formats share one contract: dump the map as text, and parse text back
//! into a map. Only the delimited text format cares about orientation; JSON and
//! YAML keys are whatever was primary when the data was dumped.

pub mod json;
pub mod text;
pub mod yaml;

use crate::error::StoreError;
use crate::store::{AssociationMap, Orientation};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// On-disk representation of the association map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One `TAG<==>FILE` line per edge.
    #[default]
    #[serde(alias = "txt")]
    Text,
    Json,
    #[serde(alias = "yml")]
    Yaml,
}

impl Format {
    /// Infer the format from a file extension. Unknown extensions are text.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => Self::Json,
            "yml" | "yaml" => Self::Yaml,
            _ => Self::Text,
        }
    }

    /// Infer the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(OsStr::to_str)
            .map_or(Self::Text, Self::from_extension)
    }

    /// An explicit format wins over the path's extension.
    #[must_use]
    pub fn resolve(explicit: Option<Self>, path: &Path) -> Self {
        explicit.unwrap_or_else(|| Self::from_path(path))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(StoreError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Optional codec features available at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// YAML documents can be parsed. Dumping YAML is always possible.
    pub yaml_parse: bool,
}

impl Capabilities {
    /// Capabilities compiled into this build.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            yaml_parse: cfg!(feature = "yaml"),
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

/// Dispatches dump/parse calls to the per-format codecs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec {
    capabilities: Capabilities,
}

impl Codec {
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Render `map` in `format`. Text output is sorted.
    pub fn dump(
        &self,
        format: Format,
        map: &AssociationMap,
        orientation: Orientation,
    ) -> Result<String, StoreError> {
        debug!(%format, %orientation, keys = map.len(), "Dumping associations");
        match format {
            Format::Text => Ok(text::dump(map, orientation, true)),
            Format::Json => json::dump(map),
            Format::Yaml => yaml::dump(map),
        }
    }

    /// Parse `data` written in `format`.
    ///
    /// `orientation` only affects the text format, whose columns are mapped to
    /// key and value according to the orientation active now.
    pub fn parse(
        &self,
        format: Format,
        data: &str,
        orientation: Orientation,
    ) -> Result<AssociationMap, StoreError> {
        debug!(%format, %orientation, bytes = data.len(), "Parsing associations");
        match format {
            Format::Text => text::parse(data, orientation),
            Format::Json => json::parse(data),
            Format::Yaml if !self.capabilities.yaml_parse => Err(StoreError::UnsupportedFormat(
                "yaml (parsing is not available in this build)".to_string(),
            )),
            Format::Yaml => yaml::parse(data),
        }
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
