//! File-name convention checks: `Find<PKG>.cmake` modules must use an
//! uppercase package name, and the default listfile must be spelled
//! `CMakeLists.txt`.

use std::sync::OnceLock;

use regex::Regex;

use super::{Category, CheckContext};
use crate::verdict::Violation;

fn find_module_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Find(.*)\.cmake$").expect("Invalid regex"))
}

/// Extract the package part of a `Find<pkg>.cmake` basename.
pub(super) fn find_module_package(basename: &str) -> Option<&str> {
    find_module_re()
        .captures(basename)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
}

pub(super) fn check_filename(ctx: &CheckContext) -> Vec<Violation> {
    let Some(basename) = ctx.path.file_name().and_then(|n| n.to_str()) else {
        return Vec::new();
    };
    if let Some(package) = find_module_package(basename) {
        if !is_all_upper(package) {
            return vec![Violation::new(
                Category::ConventionFilename,
                0,
                format!(
                    "Find modules should use uppercase names; consider using Find{}.cmake",
                    package.to_uppercase()
                ),
            )];
        }
    } else if basename.eq_ignore_ascii_case("cmakelists.txt") && basename != "CMakeLists.txt" {
        return vec![Violation::new(
            Category::ConventionFilename,
            0,
            "File should be called CMakeLists.txt",
        )];
    }
    Vec::new()
}

fn is_all_upper(package: &str) -> bool {
    let mut has_alpha = false;
    for c in package.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_alphabetic() {
            has_alpha = true;
        }
    }
    has_alpha
}

#[cfg(test)]
#[path = "convention_tests.rs"]
mod tests;
