//! Documentation comment lookup over raw source lines.
//!
//! A declaration's documentation is the comment block that ends on the
//! nearest non-blank line above it. Only blank lines may separate the
//! two; any code in between means the declaration is undocumented.
//!
//! The scanner works on text lines, not on the syntax tree, so it gives
//! the same answer whatever the parser did with the comment trivia.

use super::options::DocCommentPolicy;

const DOC_OPEN: &str = "/**";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_MARKERS: [&str; 2] = ["//", "--"];

/// Find the `/** ... */` documentation for the declaration on
/// `declaration_line` (0-based).
///
/// Returns `None` when nothing but blank lines separates the declaration
/// from the top of the file, when the nearest non-blank line above is not
/// part of a doc block, when the block is malformed (a second `*/`, or a
/// plain `/*` opener) and when the cleaned text is empty.
pub fn scan_doc_comment(lines: &[&str], declaration_line: usize) -> Option<String> {
    scan_with_policy(lines, declaration_line, DocCommentPolicy::Strict)
}

/// Like [`scan_doc_comment`] with a configurable comment heuristic.
pub fn scan_with_policy(
    lines: &[&str],
    declaration_line: usize,
    policy: DocCommentPolicy,
) -> Option<String> {
    let nearest = nearest_non_blank_above(lines, declaration_line)?;
    match policy {
        DocCommentPolicy::Strict => block_comment(lines, nearest, DOC_OPEN),
        DocCommentPolicy::BlockComments => block_comment(lines, nearest, BLOCK_OPEN),
        DocCommentPolicy::AnyComment => {
            if is_line_comment(lines[nearest]) {
                line_comment_run(lines, nearest)
            } else {
                block_comment(lines, nearest, BLOCK_OPEN)
            }
        }
    }
}

fn nearest_non_blank_above(lines: &[&str], declaration_line: usize) -> Option<usize> {
    let upper = declaration_line.min(lines.len());
    (0..upper).rev().find(|&i| !lines[i].trim().is_empty())
}

/// Walk up from `last` to the line holding `opener` and return the cleaned
/// text between the opener and the closing `*/`.
fn block_comment(lines: &[&str], last: usize, opener: &str) -> Option<String> {
    let bottom = lines[last];
    if !bottom.contains(BLOCK_CLOSE) && !bottom.contains(opener) {
        return None;
    }

    let mut first = last;
    loop {
        let line = lines[first];
        if first != last && line.contains(BLOCK_CLOSE) {
            // Another block ends here: the bottom line is not in our block
            return None;
        }
        if opens_block(line, opener, first == last) {
            break;
        }
        if opens_block(line, BLOCK_OPEN, first == last) {
            // Plain `/*` while only `/**` qualifies
            return None;
        }
        if first == 0 {
            return None;
        }
        first -= 1;
    }

    let text = lines[first..=last].join("\n");
    let start = text.find(opener)? + opener.len();
    let end = text.rfind(BLOCK_CLOSE)?;
    if end < start {
        return None;
    }
    clean_lines(text[start..end].split('\n'))
}

/// Interior lines only open a block when the marker starts the line, so
/// text such as `src/*.frg` inside a comment is not an opener. The bottom
/// line may also carry a one-line block after code.
fn opens_block(line: &str, marker: &str, is_bottom: bool) -> bool {
    if is_bottom {
        line.contains(marker)
    } else {
        line.trim_start().starts_with(marker)
    }
}

fn is_line_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    LINE_MARKERS.iter().any(|m| trimmed.starts_with(m))
}

/// Collect the contiguous run of line comments ending at `last`.
fn line_comment_run(lines: &[&str], last: usize) -> Option<String> {
    let mut first = last;
    while first > 0 && is_line_comment(lines[first - 1]) {
        first -= 1;
    }
    let stripped = lines[first..=last].iter().map(|line| {
        let trimmed = line.trim_start();
        LINE_MARKERS
            .iter()
            .find_map(|m| trimmed.strip_prefix(m))
            .unwrap_or(trimmed)
    });
    let cleaned: Vec<&str> = stripped
        .map(|l| l.strip_prefix(' ').unwrap_or(l).trim_end())
        .collect();
    non_empty(cleaned.join("\n"))
}

/// Strip leading whitespace, one `*` and one space after it from each line.
fn clean_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Option<String> {
    let cleaned: Vec<&str> = lines
        .map(|line| {
            let line = line.trim_start();
            let line = match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            };
            line.trim_end()
        })
        .collect();
    non_empty(cleaned.join("\n"))
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
