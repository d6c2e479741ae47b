//! The readability/* checks: command-name casing consistency and logic
//! repeated inside block terminators.

use super::{Category, CheckContext};
use crate::verdict::Violation;

const LOGIC_COMMANDS: [&str; 6] = [
    "else",
    "endforeach",
    "endfunction",
    "endif",
    "endmacro",
    "endwhile",
];

fn is_mixed_case(name: &str) -> bool {
    name != name.to_lowercase() && name != name.to_uppercase()
}

fn is_upper_case(name: &str) -> bool {
    name == name.to_uppercase()
}

pub(super) fn check_wonky_case(ctx: &CheckContext) -> Vec<Violation> {
    ctx.commands
        .iter()
        .filter(|cmd| is_mixed_case(&cmd.name))
        .map(|cmd| {
            Violation::new(
                Category::ReadabilityWonkyCase,
                cmd.start_line,
                "Do not use mixed case commands",
            )
        })
        .collect()
}

/// The first command with a clean (all-lower or all-upper) name fixes the
/// file's style; later commands disagreeing with it are flagged. Wonky names
/// neither set nor consult the style.
pub(super) fn check_mixed_case(ctx: &CheckContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen_upper: Option<bool> = None;
    for cmd in ctx.commands {
        if is_mixed_case(&cmd.name) {
            continue;
        }
        let is_upper = is_upper_case(&cmd.name);
        match seen_upper {
            None => seen_upper = Some(is_upper),
            Some(style) if style != is_upper => violations.push(Violation::new(
                Category::ReadabilityMixedCase,
                cmd.start_line,
                "Do not mix upper and lower case commands",
            )),
            Some(_) => {}
        }
    }
    violations
}

/// Block terminators like `endif()` should not repeat the condition.
pub(super) fn check_repeat_logic(ctx: &CheckContext) -> Vec<Violation> {
    ctx.commands
        .iter()
        .filter(|cmd| {
            LOGIC_COMMANDS.contains(&cmd.name_lower.as_str()) && !cmd.arguments.is_empty()
        })
        .map(|cmd| {
            Violation::new(
                Category::ReadabilityLogic,
                cmd.start_line,
                format!(
                    "Expression repeated inside {}; better to use only {}()",
                    cmd.name_lower, cmd.name
                ),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "readability_tests.rs"]
mod tests;
