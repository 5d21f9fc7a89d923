//! Symbol extraction over realistic Forge sources.

use crate::helpers::source_fixtures::*;
use crate::helpers::symbol_assertions::*;
use forge_index::base::Span;
use forge_index::hir::{SymbolKind, symbols_for_source};
use rstest::rstest;

// =============================================================================
// SOCIAL NETWORK FIXTURE
// =============================================================================

#[test]
fn test_fixture_sigs() {
    assert_eq!(
        names_of_kind(&SOCIAL_SYMBOLS, SymbolKind::Type),
        vec!["Person", "Student", "Mentor", "Course"]
    );
}

#[test]
fn test_fixture_fields() {
    assert_eq!(
        names_of_kind(&SOCIAL_SYMBOLS, SymbolKind::Field),
        vec!["friends", "age", "courses", "mentors"]
    );
    let containers: Vec<_> = SOCIAL_SYMBOLS
        .iter()
        .filter(|s| s.kind == SymbolKind::Field)
        .map(|s| s.container.as_deref().unwrap())
        .collect();
    assert_eq!(containers, vec!["Person", "Person", "Student", "Mentor"]);
}

#[test]
fn test_fixture_predicates_functions_tests() {
    assert_eq!(
        names_of_kind(&SOCIAL_SYMBOLS, SymbolKind::Predicate),
        vec!["wellFormed", "popular"]
    );
    assert_eq!(
        names_of_kind(&SOCIAL_SYMBOLS, SymbolKind::Function),
        vec!["getFriends", "countFriends"]
    );
    assert_eq!(
        names_of_kind(&SOCIAL_SYMBOLS, SymbolKind::Test),
        vec!["canBeWellFormed", "selfFriend"]
    );
    assert_eq!(
        names_of_kind(&SOCIAL_SYMBOLS, SymbolKind::Example),
        vec!["testNetwork"]
    );
}

#[test]
fn test_fixture_locals() {
    assert_eq!(
        names_of_kind(&SOCIAL_SYMBOLS, SymbolKind::Parameter),
        vec!["p", "p", "p", "p"]
    );
    let variables = names_of_kind(&SOCIAL_SYMBOLS, SymbolKind::Variable);
    assert_eq!(variables, vec!["q", "q", "p", "p", "p", "p"]);
    assert!(
        SOCIAL_SYMBOLS
            .iter()
            .filter(|s| s.kind.is_local())
            .all(|s| s.documentation.is_none())
    );
}

#[test]
fn test_fixture_ranges() {
    let person = get_symbol(&SOCIAL_SYMBOLS, "Person", SymbolKind::Type);
    assert_eq!(person.range, Span::from_coords(9, 13, 9, 19));

    let friends = get_symbol(&SOCIAL_SYMBOLS, "friends", SymbolKind::Field);
    assert_eq!(friends.range, Span::from_coords(10, 4, 10, 11));

    let well_formed = get_symbol(&SOCIAL_SYMBOLS, "wellFormed", SymbolKind::Predicate);
    assert_eq!(well_formed.range, Span::from_coords(26, 5, 26, 15));

    let get_friends = get_symbol(&SOCIAL_SYMBOLS, "getFriends", SymbolKind::Function);
    assert_eq!(get_friends.range, Span::from_coords(36, 4, 36, 14));

    assert_document_order(&SOCIAL_SYMBOLS);
}

#[rstest]
#[case("Person", SymbolKind::Type, "abstract sig Person")]
#[case("Student", SymbolKind::Type, "sig Student extends Person")]
#[case("Course", SymbolKind::Type, "sig Course")]
#[case("friends", SymbolKind::Field, "field in Person: set Person")]
#[case("age", SymbolKind::Field, "field in Person: one Int")]
#[case("courses", SymbolKind::Field, "field in Student: set Course")]
#[case("mentors", SymbolKind::Field, "field in Mentor: set Course")]
#[case("wellFormed", SymbolKind::Predicate, "pred wellFormed[p: Person]")]
#[case("getFriends", SymbolKind::Function, "fun getFriends[p: Person]: set Person")]
#[case("countFriends", SymbolKind::Function, "fun countFriends[p: Person]: one Int")]
#[case("canBeWellFormed", SymbolKind::Test, "test canBeWellFormed is sat")]
#[case("selfFriend", SymbolKind::Test, "test selfFriend is unsat")]
#[case(
    "testNetwork",
    SymbolKind::Example,
    "example testNetwork is { all p: Person | wellFormed[p] }"
)]
#[case("p", SymbolKind::Parameter, "Person")]
#[case("q", SymbolKind::Variable, "p.friends")]
fn test_fixture_details(#[case] name: &str, #[case] kind: SymbolKind, #[case] detail: &str) {
    assert_detail(get_symbol(&SOCIAL_SYMBOLS, name, kind), detail);
}

#[rstest]
#[case("Person", SymbolKind::Type, Some("A person in the network."))]
#[case("Student", SymbolKind::Type, Some("A person enrolled in courses."))]
#[case("Mentor", SymbolKind::Type, None)]
#[case("wellFormed", SymbolKind::Predicate, Some("Friendship is symmetric and irreflexive."))]
#[case("popular", SymbolKind::Predicate, None)]
#[case("getFriends", SymbolKind::Function, Some("Everyone that p is friends with."))]
#[case("canBeWellFormed", SymbolKind::Test, Some("A well-formed network exists."))]
#[case("selfFriend", SymbolKind::Test, None)]
fn test_fixture_documentation(
    #[case] name: &str,
    #[case] kind: SymbolKind,
    #[case] doc: Option<&str>,
) {
    let symbol = get_symbol(&SOCIAL_SYMBOLS, name, kind);
    assert_eq!(symbol.documentation.as_deref(), doc);
}

// =============================================================================
// SMALLER SOURCES
// =============================================================================

#[test]
fn test_simple_sig_scenario() {
    let symbols = symbols_for_source(SIMPLE_SIG);
    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols[0].name, "Person");
    assert_eq!(symbols[0].kind, SymbolKind::Type);
    let detail = symbols[1].detail.as_deref().unwrap();
    assert!(detail.contains("set Person"));
    assert!(detail.contains("Person:"));
}

#[test]
fn test_documented_predicate_scenario() {
    let symbols = symbols_for_source(DOCUMENTED_PREDICATE);
    let pred = get_symbol(&symbols, "wellFormed", SymbolKind::Predicate);
    assert_eq!(
        pred.documentation.as_deref(),
        Some("Checks basic well-formedness.")
    );
    assert!(pred.detail.as_deref().unwrap().contains("wellFormed[p: Person]"));
}

#[test]
fn test_sig_hierarchy() {
    let symbols = symbols_for_source(SIG_HIERARCHY);
    let details: Vec<_> = symbols.iter().filter_map(|s| s.detail.as_deref()).collect();
    assert_eq!(
        details,
        vec![
            "abstract sig Animal",
            "sig Dog extends Animal",
            "one sig Rex extends Dog",
            "sig Pet in Animal",
        ]
    );
}

#[test]
fn test_multi_name_declarations() {
    let symbols = symbols_for_source(MULTI_NAME);
    assert_eq!(
        names_of_kind(&symbols, SymbolKind::Type),
        vec!["Red", "Green", "Blue", "Colour"]
    );
    for name in ["Red", "Green", "Blue"] {
        let symbol = get_symbol(&symbols, name, SymbolKind::Type);
        assert_detail(symbol, "one sig Red, Green, Blue extends Colour");
        assert_eq!(symbol.documentation.as_deref(), Some("Primary colours."));
    }
    let colour = get_symbol(&symbols, "Colour", SymbolKind::Type);
    assert_eq!(colour.documentation, None);

    for name in ["left", "right"] {
        let field = get_symbol(&symbols, name, SymbolKind::Field);
        assert_detail(field, "field in Colour: lone Colour");
        assert_eq!(field.documentation.as_deref(), Some("Adjacent colours."));
    }
}

#[test]
fn test_temporal_and_relational_fields() {
    let symbols = symbols_for_source(TEMPORAL);
    assert_detail(get_symbol(&symbols, "Online", SymbolKind::Type), "var sig Online");
    assert_detail(
        get_symbol(&symbols, "load", SymbolKind::Field),
        "field in Server: one Int",
    );
    assert_detail(
        get_symbol(&symbols, "peers", SymbolKind::Field),
        "field in Server: set Server -> Int",
    );
}

#[test]
fn test_appended_fact_binds_nothing_new() {
    let symbols = symbols_for_source("sig Node { next: lone Node } { next != this }");
    assert_eq!(symbols.len(), 2);
}

#[test]
fn test_syntax_error_yields_no_symbols() {
    assert!(symbols_for_source("sig Person { friends: set Person").is_empty());
    assert!(symbols_for_source("pred p[x: Int { }").is_empty());
}

#[test]
fn test_extraction_is_idempotent() {
    assert_eq!(symbols_for_source(SOCIAL_NETWORK), *SOCIAL_SYMBOLS);
}
