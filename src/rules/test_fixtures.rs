//! Shared fixtures for the per-rule test modules: run the lexer over a text
//! snippet and hand the checks a ready `CheckContext`.

use std::path::PathBuf;

use crate::lexer::{classify, tokenize, Anomaly, ClassifiedFile, Command};
use crate::linter::LintOptions;

use super::CheckContext;

pub(crate) struct Fixture {
    path: PathBuf,
    file: ClassifiedFile,
    commands: Vec<Command>,
    anomalies: Vec<Anomaly>,
    pub(crate) options: LintOptions,
}

impl Fixture {
    pub(crate) fn new(path: &str, text: &str) -> Self {
        let file = classify(text);
        let (commands, tokenizer_anomalies) = tokenize(&file.lines);
        let mut anomalies = file.anomalies.clone();
        anomalies.extend(tokenizer_anomalies);
        Self {
            path: PathBuf::from(path),
            file,
            commands,
            anomalies,
            options: LintOptions::default(),
        }
    }

    pub(crate) fn listfile(text: &str) -> Self {
        Self::new("CMakeLists.txt", text)
    }

    pub(crate) fn ctx(&self) -> CheckContext<'_> {
        CheckContext {
            path: &self.path,
            lines: &self.file.lines,
            commands: &self.commands,
            anomalies: &self.anomalies,
            had_carriage_return: self.file.had_carriage_return,
            options: &self.options,
        }
    }
}
