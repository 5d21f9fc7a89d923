//! Go-to-definition tests for the IDE layer.

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::SOCIAL_NETWORK;
use forge_index::base::{Position, Span};
use forge_index::hir::SymbolKind;

#[test]
fn test_goto_sig_from_parameter_type() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    // "Person" in "pred wellFormed[p: Person] {"
    let result = analysis.goto_definition(file_id, 26, 20);
    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].kind, SymbolKind::Type);
    assert_eq!(result.targets[0].range, Span::from_coords(9, 13, 9, 19));
}

#[test]
fn test_goto_predicate_from_call() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    // "wellFormed[p]" inside the canBeWellFormed test
    let result = analysis.goto_definition(file_id, 46, 41);
    assert_eq!(result.targets.len(), 1);
    assert_eq!(result.targets[0].range, Span::from_coords(26, 5, 26, 15));
}

#[test]
fn test_goto_function_on_declaration() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    let result = analysis.goto_definition(file_id, 36, 8);
    assert_eq!(result.targets[0].name, "getFriends");
    assert_eq!(result.targets[0].range, Span::from_coords(36, 4, 36, 14));
}

#[test]
fn test_goto_function_from_call() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    // "#getFriends[p]"
    let result = analysis.goto_definition(file_id, 41, 6);
    assert_eq!(result.targets[0].kind, SymbolKind::Function);
    assert_eq!(result.targets[0].range.start, Position::new(36, 4));
}

#[test]
fn test_goto_field_from_join() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    // "p.friends" in the getFriends body
    let result = analysis.goto_definition(file_id, 37, 8);
    assert_eq!(result.targets[0].kind, SymbolKind::Field);
    assert_eq!(result.targets[0].range, Span::from_coords(10, 4, 10, 11));
}

#[test]
fn test_goto_bound_variable() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    // "q.friends" after "all q: p.friends |"
    let result = analysis.goto_definition(file_id, 28, 28);
    assert_eq!(result.targets[0].kind, SymbolKind::Variable);
    assert_eq!(result.targets[0].range.start, Position::new(28, 8));
}

#[test]
fn test_goto_parameter_is_nearest_binding() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    // "p" in "    p.friends" resolves to getFriends' parameter
    let result = analysis.goto_definition(file_id, 37, 4);
    assert_eq!(result.targets[0].kind, SymbolKind::Parameter);
    assert_eq!(result.targets[0].range.start, Position::new(36, 15));
}

#[test]
fn test_goto_on_keyword_or_builtin() {
    let (mut host, file_id) = analysis_from_source(SOCIAL_NETWORK);
    let analysis = host.analysis();

    // "Int" is not declared in the file
    assert!(analysis.goto_definition(file_id, 11, 14).is_empty());
    // whitespace
    assert!(analysis.goto_definition(file_id, 27, 1).is_empty());
}
