mod atomic;

pub use atomic::atomic_write;

use std::path::PathBuf;

/// The name of the per-user taggart folder
pub const TAGGART_FOLDER: &str = ".taggart";

/// Get the path to `~/.taggart`, if a home directory is known
#[must_use]
pub fn get_taggart_home() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(TAGGART_FOLDER))
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
