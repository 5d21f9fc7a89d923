//! Hover information implementation.

use smol_str::SmolStr;

use crate::base::constants::LANGUAGE_ID;
use crate::base::{Position, Span};
use crate::hir::{Symbol, SymbolKind};

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Name of the hovered symbol.
    pub name: SmolStr,
    /// Kind of the hovered symbol.
    pub kind: SymbolKind,
    /// Range of the hovered identifier (0-indexed).
    pub range: Span,
}

impl HoverResult {
    pub fn new(symbol: &Symbol) -> Self {
        Self {
            contents: build_hover_content(symbol),
            name: symbol.name.clone(),
            kind: symbol.kind,
            range: symbol.range,
        }
    }
}

/// Get hover information for a position.
///
/// # Arguments
/// * `symbols` - Symbols of the document, as extracted
/// * `line` - Cursor line (0-indexed)
/// * `col` - Cursor column (0-indexed)
///
/// # Returns
/// Hover information, or None if the cursor is not on a declaration.
pub fn hover(symbols: &[Symbol], line: u32, col: u32) -> Option<HoverResult> {
    let position = Position::new(line, col);
    let symbol = symbols.iter().find(|s| s.contains(position))?;
    Some(HoverResult::new(symbol))
}

/// Build markdown hover content for a symbol.
fn build_hover_content(symbol: &Symbol) -> String {
    let mut content = format!("**{}** `{}`\n", symbol.kind.display(), symbol.name);

    if let Some(ref detail) = symbol.detail {
        content.push_str(&format!("\n```{}\n{}\n```\n", LANGUAGE_ID, detail));
    }

    if let Some(ref doc) = symbol.documentation {
        content.push_str("\n---\n\n");
        content.push_str(doc);
        content.push('\n');
    }

    content
}
