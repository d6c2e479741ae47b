use super::*;
use crate::rules::test_fixtures::Fixture;

#[test]
fn line_at_limit_passes() {
    let line = format!("# {}", "x".repeat(78));
    assert_eq!(line.chars().count(), 80);
    let fixture = Fixture::listfile(&line);
    assert!(check_line_length(&fixture.ctx()).is_empty());
}

#[test]
fn line_one_over_limit_is_flagged_once() {
    let line = format!("# {}", "x".repeat(79));
    assert_eq!(line.chars().count(), 81);
    let fixture = Fixture::listfile(&line);
    let violations = check_line_length(&fixture.ctx());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 1);
    assert_eq!(violations[0].category, Category::LineLength);
    assert_eq!(violations[0].message, "Lines should be <= 80 characters long");
}

#[test]
fn custom_limit_is_honored() {
    let mut fixture = Fixture::listfile("# this comment is longer than forty characters total");
    fixture.options.linelength = 40;
    let violations = check_line_length(&fixture.ctx());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].message, "Lines should be <= 40 characters long");
}

#[test]
fn every_long_line_is_flagged() {
    let long = format!("# {}", "y".repeat(90));
    let text = format!("{long}\nset(x 1)\n{long}");
    let fixture = Fixture::listfile(&text);
    let violations = check_line_length(&fixture.ctx());
    let lines: Vec<_> = violations.iter().map(|v| v.line).collect();
    assert_eq!(lines, vec![1, 3]);
}
