//! One-or-many name arguments for the bulk operations.

/// A single name or a list of names.
///
/// Bulk operations take `impl Into<Names>` so callers can pass `"a.txt"`,
/// `vec!["a.txt", "b.txt"]` or `&["a.txt"][..]` interchangeably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Names {
    Single(String),
    Many(Vec<String>),
}

impl Names {
    /// Normalize to a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(name) => vec![name],
            Self::Many(names) => names,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(names) => names.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Names {
    fn from(name: &str) -> Self {
        Self::Single(name.to_string())
    }
}

impl From<String> for Names {
    fn from(name: String) -> Self {
        Self::Single(name)
    }
}

impl From<&String> for Names {
    fn from(name: &String) -> Self {
        Self::Single(name.clone())
    }
}

impl From<Vec<String>> for Names {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl From<Vec<&str>> for Names {
    fn from(names: Vec<&str>) -> Self {
        Self::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Names {
    fn from(names: &[&str]) -> Self {
        Self::Many(names.iter().map(|n| (*n).to_string()).collect())
    }
}

impl From<&[String]> for Names {
    fn from(names: &[String]) -> Self {
        Self::Many(names.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Names {
    fn from(names: [&str; N]) -> Self {
        Self::Many(names.iter().map(|n| (*n).to_string()).collect())
    }
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;
