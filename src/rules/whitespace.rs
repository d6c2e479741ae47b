//! The whitespace/* checks: line-level (tabs, eol, indent, newline) and
//! command-level (extra, mismatch) spacing problems.

use super::{Category, CheckContext};
use crate::verdict::Violation;

pub(super) fn check_tabs(ctx: &CheckContext) -> Vec<Violation> {
    ctx.lines
        .iter()
        .filter(|line| line.has_tab)
        .map(|line| {
            Violation::new(
                Category::WhitespaceTabs,
                line.index,
                "Tab found; please use spaces",
            )
        })
        .collect()
}

pub(super) fn check_eol(ctx: &CheckContext) -> Vec<Violation> {
    ctx.lines
        .iter()
        .filter(|line| line.has_trailing_whitespace)
        .map(|line| {
            Violation::new(
                Category::WhitespaceEol,
                line.index,
                "Line ends in whitespace",
            )
        })
        .collect()
}

/// One whole-file violation when any line carried a `\r\n` ending.
pub(super) fn check_newline(ctx: &CheckContext) -> Vec<Violation> {
    if ctx.had_carriage_return {
        vec![Violation::new(
            Category::WhitespaceNewline,
            0,
            "Unexpected carriage return found; better to use only \\n",
        )]
    } else {
        Vec::new()
    }
}

pub(super) fn check_indent(ctx: &CheckContext) -> Vec<Violation> {
    let unit = ctx.options.spaces;
    let mut violations = Vec::new();
    for line in ctx.lines {
        let initial_spaces = line.raw.chars().take_while(|&c| c == ' ').count();
        if unit > 0 && initial_spaces % unit != 0 {
            violations.push(Violation::new(
                Category::WhitespaceIndent,
                line.index,
                format!("Weird indentation; use {unit} spaces"),
            ));
        }
        let leading: String = line.raw.chars().take_while(|c| c.is_whitespace()).collect();
        if leading.contains(' ') && leading.contains('\t') {
            violations.push(Violation::new(
                Category::WhitespaceIndent,
                line.index,
                "Mixed tabs and spaces in indentation",
            ));
        }
    }
    violations
}

pub(super) fn check_extra(ctx: &CheckContext) -> Vec<Violation> {
    ctx.commands
        .iter()
        .filter(|cmd| cmd.spaces_before_paren > 0)
        .map(|cmd| {
            Violation::new(
                Category::WhitespaceExtra,
                cmd.start_line,
                format!("Extra spaces between '{}' and its ()", cmd.name),
            )
        })
        .collect()
}

pub(super) fn check_mismatch(ctx: &CheckContext) -> Vec<Violation> {
    ctx.commands
        .iter()
        .filter(|cmd| cmd.spaces_after_open != cmd.spaces_before_close)
        .map(|cmd| {
            Violation::new(
                Category::WhitespaceMismatch,
                cmd.start_line,
                "Mismatching spaces inside () after command",
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
