//! Extraction entry points and declaration dispatch.

use crate::parser::{
    AstNode, Declaration, ExampleDecl, FieldDecl, FunDecl, Name, ParamDecl, PredDecl, QuantDecl,
    SigDecl, SyntaxNode, TestCase,
};
use crate::syntax::SyntaxFile;

use super::context::ExtractionContext;
use super::helpers::{
    example_detail, field_detail, fun_detail, pred_detail, sig_detail, test_detail, typed_detail,
};
use super::options::ExtractOptions;
use super::types::{Symbol, SymbolKind};

/// Extract all symbols from a parsed file with default options.
pub fn extract_symbols(file: &SyntaxFile) -> Vec<Symbol> {
    extract_symbols_with(file, &ExtractOptions::default())
}

/// Extract all symbols from a parsed file, in document order.
///
/// A file with syntax errors yields no symbols.
pub fn extract_symbols_with(file: &SyntaxFile, options: &ExtractOptions) -> Vec<Symbol> {
    if let Some(first) = file.errors().first() {
        tracing::warn!(
            errors = file.errors().len(),
            first = %first.message,
            "parse failed, no symbols extracted"
        );
        return Vec::new();
    }
    let Some(root) = file.source_file() else {
        return Vec::new();
    };

    let ctx = ExtractionContext::new(file, options);
    let mut symbols = Vec::new();
    visit(&mut symbols, &ctx, root.syntax(), None);

    tracing::debug!(count = symbols.len(), "extracted symbols");
    symbols
}

/// Parse `text` and extract its symbols.
pub fn symbols_for_source(text: &str) -> Vec<Symbol> {
    extract_symbols(&SyntaxFile::new(text))
}

/// Pre-order walk. `enclosing_type` is the sig whose subtree we are in.
pub(super) fn visit(
    symbols: &mut Vec<Symbol>,
    ctx: &ExtractionContext<'_>,
    node: &SyntaxNode,
    enclosing_type: Option<&str>,
) {
    match Declaration::cast(node.clone()) {
        Some(Declaration::Sig(sig)) => {
            extract_sig(symbols, ctx, &sig);
            let owner = sig.names().first().and_then(Name::text);
            let inner = owner.as_deref().or(enclosing_type);
            for child in node.children() {
                visit(symbols, ctx, &child, inner);
            }
            return;
        }
        Some(Declaration::Field(field)) => extract_field(symbols, ctx, &field, enclosing_type),
        Some(Declaration::Pred(pred)) => extract_pred(symbols, ctx, &pred),
        Some(Declaration::Fun(fun)) => extract_fun(symbols, ctx, &fun),
        Some(Declaration::Quant(quant)) => extract_quant(symbols, ctx, &quant),
        Some(Declaration::Param(param)) => extract_param(symbols, ctx, &param),
        Some(Declaration::TestCase(case)) => extract_test(symbols, ctx, &case),
        Some(Declaration::Example(example)) => extract_example(symbols, ctx, &example),
        None => {}
    }
    for child in node.children() {
        visit(symbols, ctx, &child, enclosing_type);
    }
}

/// One symbol per name; all share `detail` and the documentation found
/// above the first name.
fn push_names(
    symbols: &mut Vec<Symbol>,
    ctx: &ExtractionContext<'_>,
    names: &[Name],
    kind: SymbolKind,
    detail: Option<String>,
    documented: bool,
    container: Option<&str>,
) {
    let sites: Vec<_> = names.iter().filter_map(|n| ctx.name_site(n)).collect();
    let Some((_, first)) = sites.first() else {
        return;
    };
    let documentation = if documented { ctx.doc_at(first.line) } else { None };
    for (text, site) in sites {
        let mut symbol = Symbol::new(text, kind, site.span)
            .with_detail(detail.clone())
            .with_documentation(documentation.clone());
        if let Some(owner) = container {
            symbol = symbol.with_container(owner);
        }
        symbols.push(symbol);
    }
}

fn extract_sig(symbols: &mut Vec<Symbol>, ctx: &ExtractionContext<'_>, sig: &SigDecl) {
    let detail = sig_detail(sig);
    push_names(symbols, ctx, &sig.names(), SymbolKind::Type, Some(detail), true, None);
}

fn extract_field(
    symbols: &mut Vec<Symbol>,
    ctx: &ExtractionContext<'_>,
    field: &FieldDecl,
    enclosing_type: Option<&str>,
) {
    let Some(owner) = enclosing_type else {
        tracing::trace!("field outside a sig skipped");
        return;
    };
    let typed = typed_detail(field.multiplicity(), field.type_expr());
    let detail = field_detail(owner, typed.as_deref());
    push_names(
        symbols,
        ctx,
        &field.names(),
        SymbolKind::Field,
        Some(detail),
        true,
        Some(owner),
    );
}

fn extract_pred(symbols: &mut Vec<Symbol>, ctx: &ExtractionContext<'_>, pred: &PredDecl) {
    let Some(name) = pred.name() else { return };
    let detail = name.text().map(|text| pred_detail(&text, pred));
    push_names(symbols, ctx, &[name], SymbolKind::Predicate, detail, true, None);
}

fn extract_fun(symbols: &mut Vec<Symbol>, ctx: &ExtractionContext<'_>, fun: &FunDecl) {
    let Some(name) = fun.name() else { return };
    let detail = name.text().map(|text| fun_detail(&text, fun));
    push_names(symbols, ctx, &[name], SymbolKind::Function, detail, true, None);
}

fn extract_quant(symbols: &mut Vec<Symbol>, ctx: &ExtractionContext<'_>, quant: &QuantDecl) {
    let detail = typed_detail(quant.multiplicity(), quant.type_expr());
    push_names(symbols, ctx, &quant.names(), SymbolKind::Variable, detail, false, None);
}

fn extract_param(symbols: &mut Vec<Symbol>, ctx: &ExtractionContext<'_>, param: &ParamDecl) {
    let detail = typed_detail(param.multiplicity(), param.type_expr());
    push_names(symbols, ctx, &param.names(), SymbolKind::Parameter, detail, false, None);
}

fn extract_test(symbols: &mut Vec<Symbol>, ctx: &ExtractionContext<'_>, case: &TestCase) {
    let Some(name) = case.name() else { return };
    let detail = name.text().map(|text| test_detail(&text, case));
    push_names(symbols, ctx, &[name], SymbolKind::Test, detail, true, None);
}

fn extract_example(symbols: &mut Vec<Symbol>, ctx: &ExtractionContext<'_>, example: &ExampleDecl) {
    let Some(name) = example.name() else { return };
    let detail = name.text().map(|text| example_detail(&text, example));
    push_names(symbols, ctx, &[name], SymbolKind::Example, detail, true, None);
}
