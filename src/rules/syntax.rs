//! Surfaces structural anomalies recorded by the classifier and tokenizer
//! (and invalid inline pragmas) as `syntax` violations.

use super::{Category, CheckContext};
use crate::lexer::AnomalyKind;
use crate::verdict::Violation;

pub(super) fn check_anomalies(ctx: &CheckContext) -> Vec<Violation> {
    ctx.anomalies
        .iter()
        .map(|anomaly| Violation::new(Category::Syntax, anomaly.line, describe(&anomaly.kind)))
        .collect()
}

fn describe(kind: &AnomalyKind) -> String {
    match kind {
        AnomalyKind::UnterminatedCommand => "Unable to find the end of this command".to_string(),
        AnomalyKind::UnmatchedCloseParen => "Unmatched close parenthesis".to_string(),
        AnomalyKind::UnterminatedBlockComment => "Unterminated block comment".to_string(),
        AnomalyKind::UnterminatedBracketString => "Unterminated bracket string".to_string(),
        AnomalyKind::UnterminatedQuote => "Unterminated quoted string".to_string(),
        AnomalyKind::InvalidPragma(message) => message.clone(),
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
