//! Which side of the file/tag relation is the map's key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which kind of name keys the association map.
///
/// Pick the orientation that matches the dominant query: looking up files by
/// tag is cheap under [`Orientation::TagToFile`], looking up tags by file is
/// cheap under [`Orientation::FileToTag`]. The other direction always costs a
/// full scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Keys are tag names, values are file names.
    #[default]
    TagToFile,
    /// Keys are file names, values are tag names.
    FileToTag,
}

/// The kind of name on one side of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Tag,
    File,
}

/// Position of a name within the map under the active orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The name is a map key.
    Primary,
    /// The name appears inside value lists.
    Secondary,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::TagToFile => Self::FileToTag,
            Self::FileToTag => Self::TagToFile,
        }
    }

    /// The role of the map's keys.
    #[must_use]
    pub fn primary_role(self) -> Role {
        match self {
            Self::TagToFile => Role::Tag,
            Self::FileToTag => Role::File,
        }
    }

    /// Where names of `role` live under this orientation.
    #[must_use]
    pub fn side_of(self, role: Role) -> Side {
        if self.primary_role() == role {
            Side::Primary
        } else {
            Side::Secondary
        }
    }

    /// Order an edge as `(primary, secondary)` for this orientation.
    #[must_use]
    pub fn key_value<'a>(self, file: &'a str, tag: &'a str) -> (&'a str, &'a str) {
        match self {
            Self::TagToFile => (tag, file),
            Self::FileToTag => (file, tag),
        }
    }

    /// Canonical token, e.g. `tag-->file`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TagToFile => "tag-->file",
            Self::FileToTag => "file-->tag",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an orientation token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrientation(pub String);

impl fmt::Display for UnknownOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown orientation '{}'", self.0)
    }
}

impl std::error::Error for UnknownOrientation {}

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tag-->file" | "tag-to-file" | "tag_to_file" | "tagtofile" | "ttf" => {
                Ok(Self::TagToFile)
            }
            "file-->tag" | "file-to-tag" | "file_to_tag" | "filetotag" | "ftt" => {
                Ok(Self::FileToTag)
            }
            _ => Err(UnknownOrientation(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "orientation_tests.rs"]
mod tests;
