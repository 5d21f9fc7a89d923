//! Workspace loading from real directories.

use crate::helpers::source_fixtures::SOCIAL_NETWORK;
use forge_index::hir::SymbolKind;
use forge_index::project::{LoadError, WorkspaceLoader, collect_file_paths, load_workspace};
use forge_index::ide::AnalysisHost;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, relative: &str, content: &[u8]) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_nested_directories_in_path_order() {
    let dir = TempDir::new().unwrap();
    write(&dir, "models/social.frg", SOCIAL_NETWORK.as_bytes());
    write(&dir, "models/extra/courses.frg", b"sig Room {}");
    write(&dir, "a.frg", b"sig Root {}");
    write(&dir, "notes.txt", b"sig Ignored {}");
    write(&dir, "models/model.als", b"sig AlsoIgnored {}");

    let paths = collect_file_paths(dir.path()).unwrap();
    let relative: Vec<_> = paths
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(
        relative,
        vec!["a.frg", "models/extra/courses.frg", "models/social.frg"]
    );

    let mut host = load_workspace(dir.path()).unwrap();
    assert_eq!(host.file_count(), 3);

    let analysis = host.analysis();
    let social = analysis
        .get_file_id(dir.path().join("models/social.frg"))
        .unwrap();
    assert_eq!(social.index(), 2);
    assert!(analysis.declarations_named("Ignored").is_empty());
    assert_eq!(analysis.declarations_named("Room").len(), 1);

    let person = analysis.declarations_named("Person");
    assert_eq!(person.len(), 1);
    assert_eq!(person[0].file, social);
    assert_eq!(person[0].kind, SymbolKind::Type);
}

#[test]
fn test_unreadable_file_does_not_block_others() {
    let dir = TempDir::new().unwrap();
    write(&dir, "good.frg", b"sig Good {}");
    write(&dir, "bad.frg", &[0xff, 0xfe, 0x00, 0x73]);

    let mut host = AnalysisHost::new();
    let result = WorkspaceLoader::new().load_directory_into_host(dir.path(), &mut host);

    match result {
        Err(LoadError::Multiple(failures)) => {
            assert_eq!(failures.len(), 1);
            assert!(failures[0].0.ends_with("bad.frg"));
            assert!(matches!(failures[0].1, LoadError::Io(_)));
        }
        other => panic!("expected a multi-file failure, got {:?}", other),
    }
    assert_eq!(host.file_count(), 1);
    assert_eq!(host.analysis().declarations_named("Good").len(), 1);
}

#[test]
fn test_files_with_syntax_errors_are_kept() {
    let dir = TempDir::new().unwrap();
    write(&dir, "broken.frg", b"sig {");

    let mut host = load_workspace(dir.path()).unwrap();
    let analysis = host.analysis();
    let file = analysis.get_file_id(dir.path().join("broken.frg")).unwrap();
    assert!(analysis.symbols(file).is_empty());
}

#[test]
fn test_load_single_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "one.frg", b"pred lonely { }");
    write(&dir, "two.txt", b"pred other { }");

    let loader = WorkspaceLoader::new();
    let mut host = AnalysisHost::new();
    loader
        .load_file_into_host(dir.path().join("one.frg"), &mut host)
        .unwrap();
    let err = loader
        .load_file_into_host(dir.path().join("two.txt"), &mut host)
        .unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedExtension(ref ext) if ext == "txt"));
    assert_eq!(host.file_count(), 1);
}

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();
    let mut host = load_workspace(dir.path()).unwrap();
    assert_eq!(host.analysis().workspace_symbols(None).len(), 0);
}
