//! Go-to-definition implementation.
//!
//! Forge files have no imports or qualified names, so resolution is by
//! name within one document.

use smol_str::SmolStr;

use crate::base::{Position, Span};
use crate::hir::{Symbol, SymbolKind};
use crate::syntax::SyntaxFile;

use super::text_utils::{extract_word_at_cursor, offset_at};

/// Result of a go-to-definition request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Create a result with a single target.
    pub fn single(target: GotoTarget) -> Self {
        Self {
            targets: vec![target],
        }
    }

    /// Create a result with multiple targets.
    pub fn multiple(targets: Vec<GotoTarget>) -> Self {
        Self { targets }
    }

    /// Check if any targets were found.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A target location for go-to-definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    /// The symbol name.
    pub name: SmolStr,
    /// The symbol kind.
    pub kind: SymbolKind,
    /// Range of the declaring identifier (0-indexed).
    pub range: Span,
}

impl From<&Symbol> for GotoTarget {
    fn from(symbol: &Symbol) -> Self {
        Self {
            name: symbol.name.clone(),
            kind: symbol.kind,
            range: symbol.range,
        }
    }
}

/// Find the declaration of the identifier at the given position.
///
/// # Arguments
/// * `file` - The parsed document
/// * `symbols` - Symbols extracted from `file`
/// * `line` - Cursor line (0-indexed)
/// * `col` - Cursor column (0-indexed)
///
/// # Returns
/// The declaration(s) to jump to, or empty if the word is not declared.
pub fn goto_definition(file: &SyntaxFile, symbols: &[Symbol], line: u32, col: u32) -> GotoResult {
    let position = Position::new(line, col);

    // Cursor already on a declaration
    if let Some(symbol) = symbols.iter().find(|s| s.contains(position)) {
        return GotoResult::single(symbol.into());
    }

    let Some(word) = file
        .source_text()
        .lines()
        .nth(line as usize)
        .and_then(|text| extract_word_at_cursor(text, col as usize))
    else {
        return GotoResult::empty();
    };

    let globals: Vec<GotoTarget> = symbols
        .iter()
        .filter(|s| s.kind.is_global() && s.name == word)
        .map(GotoTarget::from)
        .collect();
    if !globals.is_empty() {
        return GotoResult::multiple(globals);
    }

    // Nearest binding above the cursor, within the same paragraph
    let Some(scope) = enclosing_paragraph(file, line, col) else {
        return GotoResult::empty();
    };
    symbols
        .iter()
        .filter(|s| s.kind.is_local() && s.name == word)
        .filter(|s| scope.start <= s.range.start && s.range.start <= position)
        .max_by_key(|s| s.range.start)
        .map_or_else(GotoResult::empty, |s| GotoResult::single(s.into()))
}

/// Span of the top-level paragraph (sig, pred, fun, fact, command, ...)
/// under the cursor.
fn enclosing_paragraph(file: &SyntaxFile, line: u32, col: u32) -> Option<Span> {
    let offset = offset_at(file.source_text(), line, col)?;
    let paragraph = file
        .parse()
        .syntax()
        .children()
        .find(|node| node.text_range().contains_inclusive(offset))?;
    let range = paragraph.text_range();
    let index = file.line_index();
    let start = index.line_col(range.start());
    let end = index.line_col(range.end());
    Some(Span::from_coords(start.line, start.col, end.line, end.col))
}
