//! Document outline and workspace symbol tests.

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::SOCIAL_NETWORK;
use forge_index::hir::SymbolKind;

#[test]
fn test_outline_top_level() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    let outline = analysis.document_symbols(file_id);
    let names: Vec<_> = outline.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Person",
            "Student",
            "Mentor",
            "Course",
            "wellFormed",
            "popular",
            "getFriends",
            "countFriends",
            "canBeWellFormed",
            "selfFriend",
            "testNetwork",
        ]
    );
}

#[test]
fn test_outline_nests_fields() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    let outline = analysis.document_symbols(file_id);
    let children = |name: &str| -> Vec<String> {
        outline
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.children.iter().map(|c| c.name.to_string()).collect())
            .unwrap_or_default()
    };
    assert_eq!(children("Person"), vec!["friends", "age"]);
    assert_eq!(children("Student"), vec!["courses"]);
    assert_eq!(children("Mentor"), vec!["mentors"]);
    assert!(children("Course").is_empty());
    assert!(
        outline
            .iter()
            .flat_map(|s| &s.children)
            .all(|c| c.kind == SymbolKind::Field)
    );
}

#[test]
fn test_outline_excludes_locals() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    let outline = analysis.document_symbols(file_id);
    assert!(outline.iter().all(|s| !s.kind.is_local()));
}

#[test]
fn test_workspace_symbols_across_files() {
    let mut host = analysis_from_sources(&[
        ("social.frg", SOCIAL_NETWORK),
        ("graph.frg", "sig Node { edges: set Node }\npred connected { }"),
    ]);
    let analysis = host.analysis();

    let friends = analysis.workspace_symbols(Some("friend"));
    let names: Vec<_> = friends.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["countFriends", "friends", "getFriends", "selfFriend"]);

    let nodes = analysis.workspace_symbols(Some("node"));
    assert_eq!(nodes.len(), 1);
    assert_eq!(analysis.get_file_path(nodes[0].file).unwrap().to_str(), Some("graph.frg"));

    let everything = analysis.workspace_symbols(None);
    assert_eq!(everything.len(), 15 + 3);
}
