//! Extraction context: source lines, line index and options for one pass.
//!
//! The context is read-only during the walk. The enclosing sig travels
//! through the recursion as a parameter instead of living here.

use crate::base::{LineIndex, Span};
use crate::parser::Name;
use crate::syntax::SyntaxFile;

use super::doc_comment::scan_with_policy;
use super::options::ExtractOptions;

/// Where an identifier sits, converted to the emitted coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct NameSite {
    pub span: Span,
    /// 0-based line, used for documentation lookup
    pub line: usize,
}

pub(super) struct ExtractionContext<'a> {
    lines: Vec<&'a str>,
    line_index: &'a LineIndex,
    options: &'a ExtractOptions,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(file: &'a SyntaxFile, options: &'a ExtractOptions) -> Self {
        Self {
            lines: file.lines(),
            line_index: file.line_index(),
            options,
        }
    }

    /// Identifier text and its 0-based range.
    ///
    /// The tree reports 1-based lines; the end column is the start column
    /// plus the identifier's length in characters.
    pub fn name_site(&self, name: &Name) -> Option<(String, NameSite)> {
        let text = name.text()?;
        let position = name.position(self.line_index)?;
        let line = position.line.saturating_sub(1);
        let end_column = position.column + text.chars().count() as u32;
        let site = NameSite {
            span: Span::from_coords(line, position.column, line, end_column),
            line: line as usize,
        };
        Some((text, site))
    }

    /// Documentation for a declaration whose first identifier is on `line`.
    pub fn doc_at(&self, line: usize) -> Option<String> {
        scan_with_policy(&self.lines, line, self.options.doc_comments)
    }
}
