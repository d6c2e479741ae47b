//! Violations, per-file reports and the run verdict that decides the exit
//! code.

use std::path::PathBuf;

use serde::Serialize;

use crate::rules::Category;
use crate::{EXIT_SUCCESS, EXIT_USAGE_ERROR, EXIT_VIOLATIONS_FOUND};

/// One reported problem. Pure value; ordering within a report is stable by
/// (line, discovery order within line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub category: Category,
    /// 1-based source line; 0 marks a whole-file violation.
    pub line: usize,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(category: Category, line: usize, message: impl Into<String>) -> Self {
        Self {
            category,
            line,
            message: message.into(),
        }
    }
}

/// Ordered violations for one linted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}

impl FileReport {
    #[must_use]
    pub const fn new(path: PathBuf, violations: Vec<Violation>) -> Self {
        Self { path, violations }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Aggregate outcome of one run. Created empty, fed one report per processed
/// file, read once at the end to compute the exit code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    reports: Vec<FileReport>,
    usage_error: bool,
}

impl Verdict {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_report(&mut self, report: FileReport) {
        self.reports.push(report);
    }

    /// Record a usage-level problem (unreadable input, bad filter, ...).
    /// Usage errors dominate the exit code regardless of violations.
    pub fn record_usage_error(&mut self) {
        self.usage_error = true;
    }

    #[must_use]
    pub fn reports(&self) -> &[FileReport] {
        &self.reports
    }

    #[must_use]
    pub fn total_errors(&self) -> usize {
        self.reports.iter().map(|r| r.violations.len()).sum()
    }

    #[must_use]
    pub const fn has_usage_error(&self) -> bool {
        self.usage_error
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.usage_error {
            EXIT_USAGE_ERROR
        } else if self.total_errors() > 0 {
            EXIT_VIOLATIONS_FOUND
        } else {
            EXIT_SUCCESS
        }
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
