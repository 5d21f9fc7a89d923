//! Text helpers for cursor-driven features.
//!
//! Editors send zero-based line/character positions; these helpers find
//! the identifier or comment under such a position in raw source text.

use text_size::TextSize;

use crate::parser::{SyntaxKind, tokenize};

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` in character indices, `end` exclusive.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() || !is_word_character(chars[position]) {
        return None;
    }

    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Extract the identifier at the cursor position in a line of text.
///
/// # Example
/// ```
/// use forge_index::ide::text_utils::extract_word_at_cursor;
///
/// let line = "pred wellFormed[p: Person] {";
/// assert_eq!(extract_word_at_cursor(line, 7), Some("wellFormed".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 19), Some("Person".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 4), None);
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    let (start, end) = find_word_boundaries(&chars, position)?;
    Some(chars[start..end].iter().collect())
}

/// The identifier characters immediately left of the cursor.
///
/// `some p: Pe|` yields `"Pe"`; an empty string when the cursor follows
/// punctuation or whitespace.
pub fn word_prefix_before(line: &str, position: usize) -> String {
    let chars: Vec<char> = line.chars().take(position).collect();
    let start = chars
        .iter()
        .rposition(|c| !is_word_character(*c))
        .map_or(0, |idx| idx + 1);
    chars[start..].iter().collect()
}

/// Byte offset of a zero-based line and character column.
///
/// Columns past the end of the line clamp to its end.
pub fn offset_at(text: &str, line: u32, col: u32) -> Option<TextSize> {
    let mut line_start = 0usize;
    for _ in 0..line {
        line_start += text[line_start..].find('\n')? + 1;
    }
    let line_text = text[line_start..].split('\n').next().unwrap_or_default();
    let within = line_text
        .char_indices()
        .nth(col as usize)
        .map_or(line_text.len(), |(idx, _)| idx);
    Some(TextSize::new((line_start + within) as u32))
}

/// Whether the cursor sits inside a comment.
///
/// A cursor right after a line comment's last character is still inside
/// it; a cursor right after `*/` is not.
pub fn is_in_comment(text: &str, line: u32, col: u32) -> bool {
    let Some(offset) = offset_at(text, line, col) else {
        return false;
    };
    tokenize(text).iter().any(|token| {
        let start = token.offset;
        let end = start + TextSize::of(token.text);
        match token.kind {
            SyntaxKind::LINE_COMMENT => start < offset && offset <= end,
            SyntaxKind::BLOCK_COMMENT => start < offset && offset < end,
            _ => false,
        }
    })
}
