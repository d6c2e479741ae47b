//! `.cmakelintrc` configuration: a line-oriented `key=value` file resolved
//! from the working directory, the platform config directory, or the home
//! directory, in that order.

mod filesystem;

pub use filesystem::{FileSystem, RealFileSystem};

use std::path::{Path, PathBuf};

use crate::error::{CMakeLintError, Result};

/// File name looked up in the working directory and the home directory.
pub const RC_FILE_NAME: &str = ".cmakelintrc";
/// File name looked up in the platform config directory (no leading dot).
pub const CONFIG_DIR_FILE_NAME: &str = "cmakelintrc";

/// Parsed configuration. Every field is optional so CLI flags can override
/// only what the file actually set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcConfig {
    /// Raw `filter=` spec; validated where it is layered.
    pub filter: Option<String>,
    pub spaces: Option<usize>,
    pub linelength: Option<usize>,
    pub quiet: bool,
}

/// Parse a configuration file's contents.
///
/// Blank lines and `#` comments are ignored, as are unrecognized keys.
///
/// # Errors
/// Returns a usage error when a numeric value does not parse.
pub fn parse_rc(contents: &str) -> Result<RcConfig> {
    let mut config = RcConfig::default();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(value) = line.strip_prefix("filter=") {
            config.filter = Some(value.to_string());
        } else if let Some(value) = line.strip_prefix("spaces=") {
            config.spaces = Some(parse_number("spaces", value)?);
        } else if let Some(value) = line.strip_prefix("linelength=") {
            config.linelength = Some(parse_number("linelength", value)?);
        } else if line == "quiet" {
            config.quiet = true;
        }
    }
    Ok(config)
}

fn parse_number(key: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| {
        CMakeLintError::Usage(format!("Invalid {key} value in configuration: {value}"))
    })
}

/// Resolves and loads the effective configuration file.
pub struct RcResolver<FS> {
    fs: FS,
}

impl<FS: FileSystem> RcResolver<FS> {
    #[must_use]
    pub const fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Search order: `$PWD/.cmakelintrc`, `<config dir>/cmakelintrc`,
    /// `~/.cmakelintrc`. Returns the first existing candidate.
    #[must_use]
    pub fn resolve(&self) -> Option<PathBuf> {
        if let Ok(cwd) = self.fs.current_dir() {
            let candidate = cwd.join(RC_FILE_NAME);
            if self.fs.exists(&candidate) {
                return Some(candidate);
            }
        }
        if let Some(dir) = self.fs.config_dir() {
            let candidate = dir.join(CONFIG_DIR_FILE_NAME);
            if self.fs.exists(&candidate) {
                return Some(candidate);
            }
        }
        if let Some(home) = self.fs.home_dir() {
            let candidate = home.join(RC_FILE_NAME);
            if self.fs.exists(&candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Load an explicit configuration file, or the resolved default one.
    /// With no explicit path and nothing resolved, there is no configuration.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or parsed; an explicit
    /// path that does not exist is an error, a missing default is not.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Option<RcConfig>> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match self.resolve() {
                Some(path) => path,
                None => return Ok(None),
            },
        };
        let contents = self
            .fs
            .read_to_string(&path)
            .map_err(|source| CMakeLintError::FileRead {
                path: path.clone(),
                source,
            })?;
        parse_rc(&contents).map(Some)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
