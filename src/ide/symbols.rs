//! Symbol listing for workspace and document views.

use smol_str::SmolStr;

use crate::base::{FileId, Span};
use crate::hir::{Symbol, SymbolKind};

/// An entry of the document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSymbol {
    pub name: SmolStr,
    pub kind: SymbolKind,
    pub detail: Option<String>,
    /// Range of the declaring identifier (0-indexed).
    pub range: Span,
    /// Fields of a sig.
    pub children: Vec<DocumentSymbol>,
}

impl DocumentSymbol {
    fn from_symbol(symbol: &Symbol) -> Self {
        Self {
            name: symbol.name.clone(),
            kind: symbol.kind,
            detail: symbol.detail.clone(),
            range: symbol.range,
            children: Vec::new(),
        }
    }
}

/// A symbol for the workspace symbol list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Symbol name.
    pub name: SmolStr,
    /// Symbol kind.
    pub kind: SymbolKind,
    /// File containing the symbol.
    pub file: FileId,
    /// Range of the declaring identifier (0-indexed).
    pub range: Span,
    /// Enclosing sig, for fields.
    pub container_name: Option<SmolStr>,
}

impl SymbolInfo {
    pub fn from_symbol(file: FileId, symbol: &Symbol) -> Self {
        Self {
            name: symbol.name.clone(),
            kind: symbol.kind,
            file,
            range: symbol.range,
            container_name: symbol.container.clone(),
        }
    }
}

/// Build the outline of one document.
///
/// Fields are nested under the sig they belong to; bound variables and
/// parameters are left out. Document order is kept at both levels.
pub fn document_symbols(symbols: &[Symbol]) -> Vec<DocumentSymbol> {
    let mut outline: Vec<DocumentSymbol> = Vec::new();

    for symbol in symbols.iter().filter(|s| s.kind.is_global()) {
        let entry = DocumentSymbol::from_symbol(symbol);
        let owner = symbol.container.as_ref().and_then(|container| {
            outline
                .iter_mut()
                .rev()
                .find(|parent| parent.kind == SymbolKind::Type && parent.name == *container)
        });
        match owner {
            Some(parent) => parent.children.push(entry),
            None => outline.push(entry),
        }
    }

    outline
}

/// Get all global symbols of several files, optionally filtered by a query.
///
/// # Arguments
/// * `files` - Extracted symbols per file
/// * `query` - Optional search query (case-insensitive substring match)
///
/// # Returns
/// List of matching symbols, sorted by name.
pub fn workspace_symbols<'a>(
    files: impl IntoIterator<Item = (FileId, &'a [Symbol])>,
    query: Option<&str>,
) -> Vec<SymbolInfo> {
    let query_lower = query.map(|q| q.to_lowercase());

    let mut results: Vec<SymbolInfo> = files
        .into_iter()
        .flat_map(|(file, symbols)| {
            symbols
                .iter()
                .filter(|sym| sym.kind.is_global())
                .filter(|sym| match query_lower {
                    Some(ref q) => sym.name.to_lowercase().contains(q.as_str()),
                    None => true,
                })
                .map(move |sym| SymbolInfo::from_symbol(file, sym))
        })
        .collect();

    results.sort_by(|a, b| a.name.cmp(&b.name).then(a.file.cmp(&b.file)));
    results
}
