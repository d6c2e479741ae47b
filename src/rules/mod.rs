//! Rule engine: a fixed closed set of check categories, each a pure function
//! from the classified/tokenized model to violations. Checks never mutate
//! shared state and never abort the rest of the pipeline, so any subset can
//! be disabled without side effects.

mod convention;
mod length;
mod package;
mod readability;
mod syntax;
mod whitespace;

use std::fmt;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::filter::FilterSet;
use crate::lexer::{Anomaly, Command, SourceLine};
use crate::linter::LintOptions;
use crate::verdict::Violation;

/// The closed set of check categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ConventionFilename,
    LineLength,
    PackageConsistency,
    ReadabilityLogic,
    ReadabilityMixedCase,
    ReadabilityWonkyCase,
    Syntax,
    WhitespaceEol,
    WhitespaceExtra,
    WhitespaceIndent,
    WhitespaceMismatch,
    WhitespaceNewline,
    WhitespaceTabs,
}

impl Category {
    /// Every category, in reporting-name order.
    pub const ALL: [Self; 13] = [
        Self::ConventionFilename,
        Self::LineLength,
        Self::PackageConsistency,
        Self::ReadabilityLogic,
        Self::ReadabilityMixedCase,
        Self::ReadabilityWonkyCase,
        Self::Syntax,
        Self::WhitespaceEol,
        Self::WhitespaceExtra,
        Self::WhitespaceIndent,
        Self::WhitespaceMismatch,
        Self::WhitespaceNewline,
        Self::WhitespaceTabs,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConventionFilename => "convention/filename",
            Self::LineLength => "linelength",
            Self::PackageConsistency => "package/consistency",
            Self::ReadabilityLogic => "readability/logic",
            Self::ReadabilityMixedCase => "readability/mixedcase",
            Self::ReadabilityWonkyCase => "readability/wonkycase",
            Self::Syntax => "syntax",
            Self::WhitespaceEol => "whitespace/eol",
            Self::WhitespaceExtra => "whitespace/extra",
            Self::WhitespaceIndent => "whitespace/indent",
            Self::WhitespaceMismatch => "whitespace/mismatch",
            Self::WhitespaceNewline => "whitespace/newline",
            Self::WhitespaceTabs => "whitespace/tabs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Everything a check may consult. Borrowed from the per-file analysis
/// context; checks read it and return violations, nothing more.
pub struct CheckContext<'a> {
    pub path: &'a Path,
    pub lines: &'a [SourceLine],
    pub commands: &'a [Command],
    pub anomalies: &'a [Anomaly],
    pub had_carriage_return: bool,
    pub options: &'a LintOptions,
}

/// Run every enabled category over the model and return the violations,
/// stably ordered by line (whole-file violations at line 0 come first).
#[must_use]
pub fn run_checks(ctx: &CheckContext, filters: &FilterSet) -> Vec<Violation> {
    let mut violations: Vec<Violation> = Vec::new();
    for category in Category::ALL {
        if filters.is_enabled(category) {
            violations.extend(run_category(category, ctx));
        }
    }
    violations.sort_by_key(|v| v.line);
    violations
}

fn run_category(category: Category, ctx: &CheckContext) -> Vec<Violation> {
    match category {
        Category::ConventionFilename => convention::check_filename(ctx),
        Category::LineLength => length::check_line_length(ctx),
        Category::PackageConsistency => package::check_package(ctx),
        Category::ReadabilityLogic => readability::check_repeat_logic(ctx),
        Category::ReadabilityMixedCase => readability::check_mixed_case(ctx),
        Category::ReadabilityWonkyCase => readability::check_wonky_case(ctx),
        Category::Syntax => syntax::check_anomalies(ctx),
        Category::WhitespaceEol => whitespace::check_eol(ctx),
        Category::WhitespaceExtra => whitespace::check_extra(ctx),
        Category::WhitespaceIndent => whitespace::check_indent(ctx),
        Category::WhitespaceMismatch => whitespace::check_mismatch(ctx),
        Category::WhitespaceNewline => whitespace::check_newline(ctx),
        Category::WhitespaceTabs => whitespace::check_tabs(ctx),
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
