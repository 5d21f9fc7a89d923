//! Conversion between byte offsets and line/column coordinates.

use std::sync::Arc;

use text_size::TextSize;

/// A zero-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets in a document to [`LineCol`] coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    text: Arc<str>,
    /// Byte offset of the first character of every line.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let mut line_starts = vec![TextSize::new(0)];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(idx as u32 + 1));
            }
        }
        Self { text, line_starts }
    }

    /// Number of lines; a trailing newline starts one more (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a line and character column.
    ///
    /// Offsets past the end of the text clamp to the end.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(TextSize::of(self.text.as_ref()));
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset);
        let col = self
            .text
            .get(start..end)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(end - start);
        LineCol {
            line: line as u32,
            col: col as u32,
        }
    }

    /// Text of a zero-based line without its line terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let line = line as usize;
        let start = usize::from(*self.line_starts.get(line)?);
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| usize::from(*next) - 1)
            .unwrap_or(self.text.len());
        self.text
            .get(start..end)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }
}
