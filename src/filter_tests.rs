use super::*;
use crate::rules::Category;

#[test]
fn parse_simple_directives() {
    let directives = parse_directives("-linelength,+syntax").unwrap();
    assert_eq!(
        directives,
        vec![
            Directive {
                enabled: false,
                prefix: "linelength".to_string(),
            },
            Directive {
                enabled: true,
                prefix: "syntax".to_string(),
            },
        ]
    );
}

#[test]
fn parse_skips_empty_entries_and_trims() {
    let directives = parse_directives(" -linelength , ,+syntax, ").unwrap();
    assert_eq!(directives.len(), 2);
}

#[test]
fn directive_without_sign_is_rejected() {
    let err = parse_directives("linelength").unwrap_err();
    assert_eq!(err, FilterParseError::MissingSign);
    assert_eq!(err.to_string(), "Filter should start with - or +");
}

#[test]
fn unknown_category_is_rejected_with_the_full_token() {
    let err = parse_directives("-bogus").unwrap_err();
    assert_eq!(err, FilterParseError::UnknownCategory("-bogus".to_string()));
    assert_eq!(err.to_string(), "Filter not allowed: -bogus");
}

#[test]
fn prefix_must_match_a_known_category() {
    assert!(parse_directives("-whitespace").is_ok());
    assert!(parse_directives("-whitespace/e").is_ok());
    assert!(parse_directives("-whitespace/z").is_err());
}

#[test]
fn defaults_enable_every_category() {
    let set = FilterSet::all_enabled();
    for category in Category::ALL {
        assert!(set.is_enabled(category));
    }
}

#[test]
fn directive_flips_every_matching_prefix() {
    let set = FilterSet::resolve(&[parse_directives("-whitespace").unwrap()]);
    assert!(!set.is_enabled(Category::WhitespaceTabs));
    assert!(!set.is_enabled(Category::WhitespaceEol));
    assert!(!set.is_enabled(Category::WhitespaceIndent));
    assert!(set.is_enabled(Category::Syntax));
    assert!(set.is_enabled(Category::LineLength));
}

#[test]
fn bare_sign_flips_everything() {
    let set = FilterSet::resolve(&[parse_directives("-").unwrap()]);
    for category in Category::ALL {
        assert!(!set.is_enabled(category));
    }
}

#[test]
fn later_layers_override_earlier_ones() {
    // config disables, CLI re-enables: CLI wins.
    let layers = vec![
        parse_directives("-linelength").unwrap(),
        parse_directives("+linelength").unwrap(),
    ];
    let set = FilterSet::resolve(&layers);
    assert!(set.is_enabled(Category::LineLength));

    // ... and an inline layer on top wins over both.
    let mut layers = layers;
    layers.push(parse_directives("-linelength").unwrap());
    let set = FilterSet::resolve(&layers);
    assert!(!set.is_enabled(Category::LineLength));
}

#[test]
fn unmentioned_categories_keep_the_prior_value() {
    let layers = vec![
        parse_directives("-whitespace/tabs").unwrap(),
        parse_directives("+syntax").unwrap(),
    ];
    let set = FilterSet::resolve(&layers);
    assert!(!set.is_enabled(Category::WhitespaceTabs));
    assert!(set.is_enabled(Category::WhitespaceEol));
    assert!(set.is_enabled(Category::Syntax));
}

#[test]
fn directives_within_a_layer_apply_in_order() {
    let set = FilterSet::resolve(&[parse_directives("-whitespace,+whitespace/tabs").unwrap()]);
    assert!(set.is_enabled(Category::WhitespaceTabs));
    assert!(!set.is_enabled(Category::WhitespaceEol));
}
