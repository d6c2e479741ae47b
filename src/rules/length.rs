use super::{Category, CheckContext};
use crate::verdict::Violation;

/// Flag every line whose character count exceeds the configured limit.
pub(super) fn check_line_length(ctx: &CheckContext) -> Vec<Violation> {
    let limit = ctx.options.linelength;
    ctx.lines
        .iter()
        .filter(|line| line.raw.chars().count() > limit)
        .map(|line| {
            Violation::new(
                Category::LineLength,
                line.index,
                format!("Lines should be <= {limit} characters long"),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "length_tests.rs"]
mod tests;
