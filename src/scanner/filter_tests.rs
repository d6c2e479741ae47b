use std::path::Path;

use super::*;

#[test]
fn empty_pattern_list_includes_everything() {
    let filter = ExcludeFilter::new(&[]).unwrap();
    assert!(filter.should_include(Path::new("CMakeLists.txt")));
    assert!(filter.should_include(Path::new("deep/nested/module.cmake")));
}

#[test]
fn matching_paths_are_excluded() {
    let patterns = vec!["**/build/**".to_string()];
    let filter = ExcludeFilter::new(&patterns).unwrap();
    assert!(!filter.should_include(Path::new("proj/build/CMakeLists.txt")));
    assert!(filter.should_include(Path::new("proj/src/CMakeLists.txt")));
}

#[test]
fn multiple_patterns_combine() {
    let patterns = vec!["**/build/**".to_string(), "**/third_party/**".to_string()];
    let filter = ExcludeFilter::new(&patterns).unwrap();
    assert!(!filter.should_include(Path::new("a/build/x.cmake")));
    assert!(!filter.should_include(Path::new("a/third_party/x.cmake")));
    assert!(filter.should_include(Path::new("a/src/x.cmake")));
}

#[test]
fn invalid_pattern_is_an_error() {
    let patterns = vec!["[unclosed".to_string()];
    let err = ExcludeFilter::new(&patterns).unwrap_err();
    assert!(err.to_string().contains("[unclosed"));
}
