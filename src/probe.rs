//! Filesystem existence checks.
//!
//! The store only ever asks one question of the filesystem: does this path
//! exist? Keeping that behind a trait lets tests answer it without touching
//! disk.

use std::path::Path;

/// Answers whether a path exists.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl PathProbe for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<F> PathProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
