use super::*;
use crate::rules::test_fixtures::Fixture;

#[test]
fn wonky_case_command_is_flagged() {
    let fixture = Fixture::listfile("Set(x 1)");
    let violations = check_wonky_case(&fixture.ctx());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 1);
    assert_eq!(violations[0].message, "Do not use mixed case commands");
}

#[test]
fn all_lower_and_all_upper_are_not_wonky() {
    let fixture = Fixture::listfile("set(x 1)");
    assert!(check_wonky_case(&fixture.ctx()).is_empty());
    let fixture = Fixture::listfile("SET(x 1)");
    assert!(check_wonky_case(&fixture.ctx()).is_empty());
}

#[test]
fn minority_style_is_flagged_at_its_occurrence_only() {
    let fixture = Fixture::listfile("set(a 1)\nset(b 2)\nSET(c 3)\nset(d 4)");
    let violations = check_mixed_case(&fixture.ctx());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 3);
    assert_eq!(
        violations[0].message,
        "Do not mix upper and lower case commands"
    );
}

#[test]
fn first_clean_occurrence_fixes_the_style() {
    // First command is upper case, so the lower-case ones are flagged.
    let fixture = Fixture::listfile("SET(a 1)\nset(b 2)\nset(c 3)");
    let violations = check_mixed_case(&fixture.ctx());
    let lines: Vec<_> = violations.iter().map(|v| v.line).collect();
    assert_eq!(lines, vec![2, 3]);
}

#[test]
fn wonky_names_do_not_set_or_consult_the_style() {
    let fixture = Fixture::listfile("Set(a 1)\nset(b 2)\nset(c 3)");
    assert!(check_mixed_case(&fixture.ctx()).is_empty());
}

#[test]
fn consistent_files_produce_no_case_violations() {
    let fixture = Fixture::listfile("set(a 1)\nset(b 2)");
    assert!(check_mixed_case(&fixture.ctx()).is_empty());
    assert!(check_wonky_case(&fixture.ctx()).is_empty());
}

#[test]
fn logic_command_with_arguments_is_flagged() {
    let fixture = Fixture::listfile("if(FOO)\nendif(FOO)");
    let violations = check_repeat_logic(&fixture.ctx());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 2);
    assert_eq!(
        violations[0].message,
        "Expression repeated inside endif; better to use only endif()"
    );
}

#[test]
fn logic_command_message_preserves_original_case() {
    let fixture = Fixture::listfile("IF(FOO)\nENDIF(FOO)");
    let violations = check_repeat_logic(&fixture.ctx());
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].message,
        "Expression repeated inside endif; better to use only ENDIF()"
    );
}

#[test]
fn bare_logic_commands_pass() {
    let fixture = Fixture::listfile("if(FOO)\nelse()\nendif()\nendmacro()\nendwhile()");
    assert!(check_repeat_logic(&fixture.ctx()).is_empty());
}

#[test]
fn single_character_argument_is_still_flagged() {
    let fixture = Fixture::listfile("endif(x)");
    assert_eq!(check_repeat_logic(&fixture.ctx()).len(), 1);
}

#[test]
fn non_logic_commands_with_arguments_pass() {
    let fixture = Fixture::listfile("if(FOO)\nforeach(item a b)\nendforeach()\nendif()");
    assert!(check_repeat_logic(&fixture.ctx()).is_empty());
}
