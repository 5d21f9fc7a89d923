//! Hover feature tests for the IDE layer.

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::SOCIAL_NETWORK;
use forge_index::base::Span;
use forge_index::hir::SymbolKind;

#[test]
fn test_hover_on_sig() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    let hover = analysis.hover(file_id, 9, 15).expect("hover on Person");
    assert!(
        hover.contents.starts_with("**sig** `Person`"),
        "Got: {}",
        hover.contents
    );
    assert!(hover.contents.contains("```forge\nabstract sig Person\n```"));
    assert!(hover.contents.contains("---\n\nA person in the network."));
    assert_eq!(hover.range, Span::from_coords(9, 13, 9, 19));
}

#[test]
fn test_hover_on_predicate() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    let hover = analysis.hover(file_id, 26, 8).unwrap();
    assert_eq!(hover.kind, SymbolKind::Predicate);
    assert!(hover.contents.contains("**predicate** `wellFormed`"));
    assert!(hover.contents.contains("pred wellFormed[p: Person]"));
}

#[test]
fn test_hover_on_function() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    let hover = analysis.hover(file_id, 36, 8).unwrap();
    assert!(hover.contents.contains("**function** `getFriends`"));
    assert!(hover.contents.contains("Everyone that p is friends with."));
}

#[test]
fn test_hover_on_field() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    let hover = analysis.hover(file_id, 10, 8).unwrap();
    assert!(hover.contents.contains("**field** `friends`"));
    assert!(hover.contents.contains("field in Person: set Person"));
}

#[test]
fn test_hover_on_parameter_has_no_doc_section() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    let hover = analysis.hover(file_id, 26, 16).unwrap();
    assert_eq!(hover.kind, SymbolKind::Parameter);
    assert!(hover.contents.starts_with("**parameter** `p`"));
    assert!(!hover.contents.contains("---"));
}

#[test]
fn test_hover_outside_identifiers() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    assert!(analysis.hover(file_id, 9, 0).is_none());
    assert!(analysis.hover(file_id, 9, 19).is_none());
    assert!(analysis.hover(file_id, 1, 0).is_none());
    assert!(analysis.hover(file_id, 500, 0).is_none());
}
