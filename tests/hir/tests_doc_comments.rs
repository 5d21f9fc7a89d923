//! Documentation comments as seen through extraction.

use forge_index::hir::{
    DocCommentPolicy, ExtractOptions, SymbolKind, extract_symbols_with, symbols_for_source,
};
use forge_index::syntax::SyntaxFile;
use rstest::rstest;

fn doc_of_first(source: &str) -> Option<String> {
    symbols_for_source(source)
        .into_iter()
        .next()
        .and_then(|s| s.documentation)
}

#[test]
fn test_multiline_doc_block() {
    let source = "/**\n * Line one.\n *   indented\n * Line three.\n */\nsig A {}";
    assert_eq!(
        doc_of_first(source).as_deref(),
        Some("Line one.\n  indented\nLine three.")
    );
}

#[test]
fn test_blank_lines_between_doc_and_declaration() {
    assert_eq!(
        doc_of_first("/** Doc. */\n\n\n\nsig A {}").as_deref(),
        Some("Doc.")
    );
}

#[test]
fn test_code_line_breaks_adjacency() {
    assert_eq!(doc_of_first("/** Doc. */\noption verbose 5\nsig A {}"), None);
}

#[test]
fn test_shared_block_goes_to_following_declaration_only() {
    let symbols = symbols_for_source("sig A {}\n/** For B. */\nsig B {}\nsig C {}");
    let docs: Vec<_> = symbols.iter().map(|s| s.documentation.as_deref()).collect();
    assert_eq!(docs, vec![None, Some("For B."), None]);
}

#[test]
fn test_plain_block_comment_is_not_documentation() {
    assert_eq!(doc_of_first("/* just a note */\nsig A {}"), None);
}

#[test]
fn test_empty_doc_block() {
    assert_eq!(doc_of_first("/** */\nsig A {}"), None);
    assert_eq!(doc_of_first("/**\n *\n */\nsig A {}"), None);
}

#[test]
fn test_doc_on_declaration_at_top_of_file() {
    assert_eq!(doc_of_first("sig A {}"), None);
}

#[test]
fn test_doc_inside_sig_body_for_field() {
    let symbols = symbols_for_source(
        "sig A {\n    /** First. */\n    f: set A,\n    g: set A\n}",
    );
    let field_docs: Vec<_> = symbols
        .iter()
        .filter(|s| s.kind == SymbolKind::Field)
        .map(|s| s.documentation.as_deref())
        .collect();
    assert_eq!(field_docs, vec![Some("First."), None]);
}

#[rstest]
#[case(DocCommentPolicy::Strict, "/** doc */", Some("doc"))]
#[case(DocCommentPolicy::Strict, "/* note */", None)]
#[case(DocCommentPolicy::Strict, "// note", None)]
#[case(DocCommentPolicy::BlockComments, "/** doc */", Some("doc"))]
#[case(DocCommentPolicy::BlockComments, "/* note */", Some("note"))]
#[case(DocCommentPolicy::BlockComments, "-- note", None)]
#[case(DocCommentPolicy::AnyComment, "/* note */", Some("note"))]
#[case(DocCommentPolicy::AnyComment, "// one\n// two", Some("one\ntwo"))]
#[case(DocCommentPolicy::AnyComment, "-- dashed", Some("dashed"))]
fn test_policy_selects_comment_family(
    #[case] policy: DocCommentPolicy,
    #[case] comment: &str,
    #[case] expected: Option<&str>,
) {
    let file = SyntaxFile::new(&format!("{comment}\npred p {{ }}"));
    let options = ExtractOptions::default().with_doc_comments(policy);
    let symbols = extract_symbols_with(&file, &options);
    assert_eq!(symbols[0].documentation.as_deref(), expected);
}

#[test]
fn test_policy_never_documents_locals() {
    let file = SyntaxFile::new("pred p[\n-- size\nn: Int] { }");
    let options = ExtractOptions::default().with_doc_comments(DocCommentPolicy::AnyComment);
    let symbols = extract_symbols_with(&file, &options);
    let param = symbols.iter().find(|s| s.kind == SymbolKind::Parameter).unwrap();
    assert_eq!(param.documentation, None);
}
