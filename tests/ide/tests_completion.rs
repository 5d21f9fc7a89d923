//! Completion tests for the IDE layer.

use crate::helpers::host_helpers::*;
use crate::helpers::source_fixtures::SOCIAL_NETWORK;
use forge_index::ide::{CompletionItem, CompletionKind, completions};
use forge_index::hir::symbols_for_source;
use rstest::rstest;

fn has(items: &[CompletionItem], label: &str, kind: CompletionKind) -> bool {
    items.iter().any(|i| i.label.as_ref() == label && i.kind == kind)
}

#[rstest]
#[case("sig")]
#[case("pred")]
#[case("fun")]
#[case("all")]
#[case("some")]
#[case("test")]
#[case("expect")]
#[case("example")]
fn test_keywords_offered(#[case] keyword: &str) {
    let items = completions(&[], "");
    assert!(has(&items, keyword, CompletionKind::Keyword), "missing {keyword}");
}

#[test]
fn test_snippets_offered() {
    let items = completions(&[], "");
    for label in ["sig", "pred", "fun", "test expect"] {
        assert!(has(&items, label, CompletionKind::Snippet), "missing snippet {label}");
    }
}

#[test]
fn test_declared_names_come_first() {
    let symbols = symbols_for_source(SOCIAL_NETWORK);
    let items = completions(&symbols, "");

    assert!(has(&items, "Person", CompletionKind::Sig));
    assert!(has(&items, "wellFormed", CompletionKind::Function));
    assert!(has(&items, "friends", CompletionKind::Field));
    assert!(has(&items, "canBeWellFormed", CompletionKind::Test));

    let first_keyword = items
        .iter()
        .position(|i| i.kind == CompletionKind::Keyword)
        .unwrap();
    let last_declared = items
        .iter()
        .rposition(|i| i.kind == CompletionKind::Sig)
        .unwrap();
    assert!(last_declared < first_keyword);
}

#[test]
fn test_prefix_at_cursor() {
    let source = "sig Person {}\nsig Pet {}\npred p[x: Pe] { }";
    let (mut host, file_id) = analysis_from_source(source);
    let analysis = host.analysis();

    // cursor right after "Pe"
    let items = analysis.completions(file_id, 2, 12);
    let labels: Vec<_> = items.iter().map(|i| i.label.as_ref()).collect();
    assert_eq!(labels[..2], ["Person", "Pet"]);
    assert!(labels.contains(&"pred"));
    assert!(!labels.contains(&"sig"));
}

#[test]
fn test_no_completions_in_comments() {
    let source = "/** A person\n    with friends. */\nsig Person {}\n-- pr\n";
    let (mut host, file_id) = analysis_from_source(source);
    let analysis = host.analysis();

    assert!(analysis.completions(file_id, 0, 8).is_empty());
    assert!(analysis.completions(file_id, 1, 6).is_empty());
    assert!(analysis.completions(file_id, 3, 5).is_empty());
    assert!(!analysis.completions(file_id, 2, 0).is_empty());
}

#[test]
fn test_completion_item_details() {
    let symbols = symbols_for_source(SOCIAL_NETWORK);
    let items = completions(&symbols, "getF");
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].detail.as_deref(),
        Some("fun getFriends[p: Person]: set Person")
    );
    assert_eq!(
        items[0].documentation.as_deref(),
        Some("Everyone that p is friends with.")
    );
    assert_eq!(items[0].kind.to_lsp(), 3);
}
