//! File discovery: expand CLI paths into the list of CMake listfiles to
//! lint. Directories are walked recursively for `CMakeLists.txt` and
//! `*.cmake` files; explicit files with other names are skipped with a
//! notice by the driver.

mod filter;

pub use filter::{ExcludeFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Whether a file name follows the CMake listfile conventions.
#[must_use]
pub fn is_listfile(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.eq_ignore_ascii_case("cmakelists.txt")
        || Path::new(name).extension().is_some_and(|ext| ext == "cmake")
}

/// Trait for scanning directories and finding listfiles.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct ListfileScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> ListfileScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| is_listfile(p) && self.filter.should_include(p))
            .collect();
        files.sort();
        files
    }
}

impl<F: FileFilter> FileScanner for ListfileScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

/// Result of expanding the CLI path arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedPaths {
    /// Files to lint, in argument order (directory scans sorted).
    pub files: Vec<PathBuf>,
    /// Explicit files whose names match neither listfile convention.
    pub skipped: Vec<PathBuf>,
}

/// Expand files and directories from the command line into lintable files.
///
/// # Errors
/// Returns an error if a directory scan fails.
pub fn expand_paths<S: FileScanner>(paths: &[PathBuf], scanner: &S) -> Result<ExpandedPaths> {
    let mut expanded = ExpandedPaths::default();
    for path in paths {
        if path.is_dir() {
            expanded.files.extend(scanner.scan(path)?);
        } else if is_listfile(path) {
            expanded.files.push(path.clone());
        } else {
            expanded.skipped.push(path.clone());
        }
    }
    Ok(expanded)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
