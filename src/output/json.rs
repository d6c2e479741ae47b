use serde::Serialize;

use crate::error::Result;
use crate::verdict::{FileReport, Violation};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    total_errors: usize,
    files: Vec<JsonFile<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    violations: &'a [Violation],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let total_errors = reports.iter().map(|r| r.violations.len()).sum();
        let output = JsonOutput {
            total_errors,
            files: reports
                .iter()
                .map(|report| JsonFile {
                    path: report.path.display().to_string(),
                    violations: &report.violations,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
