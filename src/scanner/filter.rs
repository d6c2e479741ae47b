use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CMakeLintError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Keeps every path not matched by an exclude glob.
#[derive(Debug)]
pub struct ExcludeFilter {
    exclude_patterns: GlobSet,
}

impl ExcludeFilter {
    /// Create a filter from exclude glob patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| CMakeLintError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|source| CMakeLintError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source,
            })?;

        Ok(Self { exclude_patterns })
    }
}

impl FileFilter for ExcludeFilter {
    fn should_include(&self, path: &Path) -> bool {
        !self.exclude_patterns.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
