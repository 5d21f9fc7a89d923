//! Symbol extraction from the AST: pure functions that return symbols.
//!
//! One pre-order walk over a parsed file produces a flat list of named
//! declarations with identifier ranges, rendered signatures and
//! documentation comments.
//!
//! # Module structure
//!
//! - [`types`]: `Symbol` and `SymbolKind`
//! - [`options`]: `ExtractOptions` and the documentation comment policy
//! - [`doc_comment`]: documentation lookup over raw source lines
//! - [`context`]: per-pass lines, line index and options
//! - [`helpers`]: detail string rendering
//! - [`extract`]: entry points and declaration dispatch

mod context;
mod doc_comment;
mod extract;
mod helpers;
mod options;
mod types;


pub use doc_comment::{scan_doc_comment, scan_with_policy};
pub use extract::{extract_symbols, extract_symbols_with, symbols_for_source};
pub use options::{DocCommentPolicy, ExtractOptions};
pub use types::{Symbol, SymbolKind};
