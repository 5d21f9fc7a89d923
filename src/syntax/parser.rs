//! Syntax-level parsing interface.
//!
//! Reading Forge files from disk and turning parser errors into
//! line/column diagnostics.

use crate::base::constants::FORGE_EXT;
use crate::syntax::file::SyntaxFile;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A syntax error located by 0-based line and column
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn syntax_error(message: &str, line: usize, column: usize) -> Self {
        Self {
            message: message.to_string(),
            line,
            column,
        }
    }
}

/// Failure to get a file from disk into a `SyntaxFile`
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to load {} file(s)", .0.len())]
    Multiple(Vec<(PathBuf, LoadError)>),
}

/// Parse result containing content and any errors
#[derive(Debug)]
pub struct ParseResult<T> {
    pub content: Option<T>,
    pub errors: Vec<ParseError>,
}

impl<T> ParseResult<T> {
    pub fn with_errors(errors: Vec<ParseError>) -> Self {
        Self {
            content: None,
            errors,
        }
    }

    pub fn ok(content: T) -> Self {
        Self {
            content: Some(content),
            errors: Vec::new(),
        }
    }

    pub fn with_content_and_errors(content: T, errors: Vec<ParseError>) -> Self {
        Self {
            content: Some(content),
            errors,
        }
    }

    /// Check if parsing succeeded without errors
    pub fn is_ok(&self) -> bool {
        self.content.is_some() && self.errors.is_empty()
    }

    /// Check if there are any parse errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the syntax file (alias for content)
    pub fn syntax_file(&self) -> Option<&T> {
        self.content.as_ref()
    }
}

/// Get file extension from path
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Validate that the path names a Forge file
pub fn validate_extension(path: &Path) -> Result<&str, LoadError> {
    match get_extension(path) {
        Some(ext) if ext == FORGE_EXT => Ok(ext),
        Some(ext) => Err(LoadError::UnsupportedExtension(ext.to_string())),
        None => Err(LoadError::UnsupportedExtension(String::new())),
    }
}

/// Load file contents
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    Ok(std::fs::read_to_string(path)?)
}

/// Loads and parses a Forge file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not have the `.frg` extension
/// - The file cannot be read
pub fn load_and_parse(path: &Path) -> Result<SyntaxFile, LoadError> {
    validate_extension(path)?;
    let content = load_file(path)?;
    Ok(SyntaxFile::new(&content))
}

/// Parses Forge content that claims to come from `path`.
pub fn parse_content(content: &str, path: &Path) -> Result<SyntaxFile, LoadError> {
    validate_extension(path)?;
    Ok(SyntaxFile::new(content))
}

/// Parses content and returns a ParseResult with line/column errors.
/// Errors don't fail the call; they're captured next to the file.
pub fn parse_with_result(content: &str) -> ParseResult<SyntaxFile> {
    let syntax_file = SyntaxFile::new(content);

    let line_index = syntax_file.line_index();
    let errors: Vec<ParseError> = syntax_file
        .errors()
        .iter()
        .map(|e| {
            let line_col = line_index.line_col(e.range.start());
            ParseError::syntax_error(&e.message, line_col.line as usize, line_col.col as usize)
        })
        .collect();

    if errors.is_empty() {
        ParseResult::ok(syntax_file)
    } else {
        ParseResult::with_content_and_errors(syntax_file, errors)
    }
}
