//! Consistency checks for `Find*.cmake` package modules: the module must
//! include `FindPackageHandleStandardArgs`, call it, and pass it the
//! variable named after the module.

use super::{convention, Category, CheckContext};
use crate::lexer::{Command, TokenKind};
use crate::verdict::Violation;

const STDARGS_MODULE: &str = "FindPackageHandleStandardArgs";

pub(super) fn check_package(ctx: &CheckContext) -> Vec<Violation> {
    let Some(basename) = ctx.path.file_name().and_then(|n| n.to_str()) else {
        return Vec::new();
    };
    let Some(package) = convention::find_module_package(basename) else {
        return Vec::new();
    };
    let expected = package.to_uppercase();

    let mut have_included = false;
    let mut have_used = false;
    let mut violations = Vec::new();

    for cmd in ctx.commands {
        match cmd.name_lower.as_str() {
            "include" => {
                if first_identifier(cmd) == Some(STDARGS_MODULE) {
                    have_included = true;
                }
            }
            "find_package_handle_standard_args" => {
                have_used = true;
                if let Some(var) = first_identifier(cmd) {
                    if var != expected {
                        violations.push(Violation::new(
                            Category::PackageConsistency,
                            cmd.start_line,
                            format!(
                                "Weird variable passed to std args, should be {expected} not {var}"
                            ),
                        ));
                    }
                }
            }
            _ => {}
        }
    }

    if !have_included {
        violations.push(Violation::new(
            Category::PackageConsistency,
            0,
            format!("Package should include {STDARGS_MODULE}"),
        ));
    }
    if !have_used {
        violations.push(Violation::new(
            Category::PackageConsistency,
            0,
            "Package should use FIND_PACKAGE_HANDLE_STANDARD_ARGS",
        ));
    }
    violations
}

fn first_identifier(cmd: &Command) -> Option<&str> {
    cmd.arguments
        .iter()
        .find(|token| token.kind == TokenKind::Identifier)
        .map(|token| token.text.as_str())
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;
