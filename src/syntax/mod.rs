// Syntax layer: parsed files and file-level parse diagnostics
pub mod file;
pub mod parser;

pub use file::SyntaxFile;
pub use parser::{LoadError, ParseError, ParseResult, load_and_parse, parse_content, parse_with_result};

// Re-export Position and Span from base for convenience
pub use crate::base::{Position, Span};
