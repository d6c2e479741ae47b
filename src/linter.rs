//! Per-file pipeline orchestration: split lines, classify, collect inline
//! pragmas, freeze the filter set, tokenize, run the enabled checks.
//!
//! The pipeline is a pure, deterministic function of the input text plus the
//! resolved options and filter layers; a `Linter` can lint any number of
//! files concurrently.

use std::path::Path;

use crate::filter::{parse_directives, Directive, FilterSet};
use crate::lexer::{classify, tokenize, Anomaly, AnomalyKind, SourceLine};
use crate::rules::{run_checks, CheckContext};
use crate::verdict::FileReport;

/// Marker for in-source filter overrides, matched at column 0.
pub const PRAGMA_MARKER: &str = "# lint_cmake: ";

/// Tunable lint parameters shared by every file in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintOptions {
    /// Indentation unit for whitespace/indent.
    pub spaces: usize,
    /// Character limit for linelength.
    pub linelength: usize,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            spaces: 2,
            linelength: 80,
        }
    }
}

/// A configured linter. Filter layers are applied in the order they were
/// added (config before CLI); the inline pragma layer of each file is folded
/// in last and never leaks into other files.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    options: LintOptions,
    base_layers: Vec<Vec<Directive>>,
}

impl Linter {
    #[must_use]
    pub fn new(options: LintOptions) -> Self {
        Self {
            options,
            base_layers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_filter_layer(mut self, layer: Vec<Directive>) -> Self {
        self.base_layers.push(layer);
        self
    }

    /// Lint one file's text. Never fails: structural problems become
    /// `syntax` violations inside the report.
    #[must_use]
    pub fn lint_text(&self, path: &Path, text: &str) -> FileReport {
        let classified = classify(text);
        let (pragma_layer, pragma_anomalies) = collect_pragmas(&classified.lines);
        let (commands, tokenizer_anomalies) = tokenize(&classified.lines);

        let mut anomalies = classified.anomalies;
        anomalies.extend(tokenizer_anomalies);
        anomalies.extend(pragma_anomalies);

        let mut layers = self.base_layers.clone();
        layers.push(pragma_layer);
        let filters = FilterSet::resolve(&layers);

        let ctx = CheckContext {
            path,
            lines: &classified.lines,
            commands: &commands,
            anomalies: &anomalies,
            had_carriage_return: classified.had_carriage_return,
            options: &self.options,
        };
        FileReport::new(path.to_path_buf(), run_checks(&ctx, &filters))
    }
}

/// Gather `# lint_cmake:` pragma directives from anywhere in the file. An
/// invalid pragma contributes a syntax anomaly instead of directives.
fn collect_pragmas(lines: &[SourceLine]) -> (Vec<Directive>, Vec<Anomaly>) {
    let mut directives = Vec::new();
    let mut anomalies = Vec::new();
    for line in lines {
        let Some(spec) = line.raw.strip_prefix(PRAGMA_MARKER) else {
            continue;
        };
        match parse_directives(spec) {
            Ok(parsed) => directives.extend(parsed),
            Err(err) => anomalies.push(Anomaly {
                line: line.index,
                kind: AnomalyKind::InvalidPragma(err.to_string()),
            }),
        }
    }
    (directives, anomalies)
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
