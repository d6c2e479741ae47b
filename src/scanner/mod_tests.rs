use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;

fn scanner_with_excludes(patterns: &[&str]) -> ListfileScanner<ExcludeFilter> {
    let patterns: Vec<String> = patterns.iter().map(ToString::to_string).collect();
    ListfileScanner::new(ExcludeFilter::new(&patterns).unwrap())
}

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "set(x 1)\n").unwrap();
    path
}

#[test]
fn listfile_naming_convention() {
    assert!(is_listfile(Path::new("CMakeLists.txt")));
    assert!(is_listfile(Path::new("cmakelists.txt")));
    assert!(is_listfile(Path::new("sub/dir/CMakeLists.txt")));
    assert!(is_listfile(Path::new("module.cmake")));
    assert!(is_listfile(Path::new("FindZLIB.cmake")));
    assert!(!is_listfile(Path::new("module.CMAKE")));
    assert!(!is_listfile(Path::new("README.md")));
    assert!(!is_listfile(Path::new("cmake")));
}

#[test]
fn scan_finds_listfiles_recursively() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "CMakeLists.txt");
    touch(temp.path(), "helpers.cmake");
    touch(temp.path(), "README.md");
    touch(temp.path(), "sub/CMakeLists.txt");
    touch(temp.path(), "sub/notes.txt");

    let files = scanner_with_excludes(&[]).scan(temp.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.strip_prefix(temp.path()).unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 3);
    assert!(names.contains(&"CMakeLists.txt".to_string()));
    assert!(names.contains(&"helpers.cmake".to_string()));
    assert!(names.iter().any(|n| n.ends_with("CMakeLists.txt") && n.starts_with("sub")));
}

#[test]
fn scan_results_are_sorted() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "z.cmake");
    touch(temp.path(), "a.cmake");
    touch(temp.path(), "m.cmake");

    let files = scanner_with_excludes(&[]).scan(temp.path()).unwrap();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn exclude_globs_prune_scan_results() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "CMakeLists.txt");
    touch(temp.path(), "build/CMakeLists.txt");

    let files = scanner_with_excludes(&["**/build/**"])
        .scan(temp.path())
        .unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("CMakeLists.txt"));
    assert!(!files[0].to_string_lossy().contains("build"));
}

#[test]
fn expand_keeps_explicit_listfiles_and_skips_others() {
    let temp = TempDir::new().unwrap();
    let keep = touch(temp.path(), "module.cmake");
    let skip = touch(temp.path(), "notes.txt");

    let expanded = expand_paths(&[keep.clone(), skip.clone()], &scanner_with_excludes(&[])).unwrap();
    assert_eq!(expanded.files, vec![keep]);
    assert_eq!(expanded.skipped, vec![skip]);
}

#[test]
fn expand_walks_directories() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "CMakeLists.txt");
    touch(temp.path(), "sub/inner.cmake");

    let expanded =
        expand_paths(&[temp.path().to_path_buf()], &scanner_with_excludes(&[])).unwrap();
    assert_eq!(expanded.files.len(), 2);
    assert!(expanded.skipped.is_empty());
}

#[test]
fn expand_preserves_argument_order() {
    let temp = TempDir::new().unwrap();
    let second = touch(temp.path(), "a.cmake");
    let first = touch(temp.path(), "z.cmake");

    let expanded =
        expand_paths(&[first.clone(), second.clone()], &scanner_with_excludes(&[])).unwrap();
    assert_eq!(expanded.files, vec![first, second]);
}

#[test]
fn missing_file_with_listfile_name_is_kept_for_the_driver() {
    // The read failure is reported when the file is actually linted.
    let expanded = expand_paths(
        &[PathBuf::from("no/such/file.cmake")],
        &scanner_with_excludes(&[]),
    )
    .unwrap();
    assert_eq!(expanded.files.len(), 1);
}
