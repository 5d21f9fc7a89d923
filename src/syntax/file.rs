//! Syntax file wrapper for parsed Forge files.
//!
//! Bundles the source text, the rowan parse result and a line index so the
//! symbol extractor can map token offsets to lines and read the raw lines
//! that precede a declaration.

use std::sync::Arc;

use crate::base::LineIndex;
use crate::parser::{AstNode, Parse, SourceFile, SyntaxError, parse_forge};

/// A parsed Forge file.
#[derive(Debug, Clone)]
pub struct SyntaxFile {
    /// The source text the tree was built from
    text: Arc<str>,
    /// The underlying rowan parse result
    parse: Parse,
    line_index: LineIndex,
}

// Two SyntaxFiles are equal when they were parsed from the same text
impl PartialEq for SyntaxFile {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for SyntaxFile {}

impl SyntaxFile {
    /// Parse Forge source text
    pub fn new(source: &str) -> Self {
        let text: Arc<str> = Arc::from(source);
        let parse = parse_forge(&text);
        let line_index = LineIndex::new(text.clone());
        Self {
            text,
            parse,
            line_index,
        }
    }

    /// Get the underlying parse result
    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    /// Get the root source file AST node
    pub fn source_file(&self) -> Option<SourceFile> {
        SourceFile::cast(self.parse.syntax())
    }

    /// Check if parsing had errors
    pub fn has_errors(&self) -> bool {
        !self.parse.errors.is_empty()
    }

    /// Get parse errors
    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    /// Get the source text of the file
    pub fn source_text(&self) -> &str {
        &self.text
    }

    /// The source split into lines, without line terminators
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// LineIndex for converting byte offsets to line/column positions
    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }
}
