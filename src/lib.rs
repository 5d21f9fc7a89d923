//! # forge-index
//!
//! Symbol and documentation indexer for the Forge modeling language
//! (an Alloy dialect).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Directory walking, parallel loading into an AnalysisHost
//!   ↓
//! ide       → Outline, hover, goto-definition, completion
//!   ↓
//! hir       → Symbol extraction and doc-comment scanning
//!   ↓
//! syntax    → SyntaxFile (text + tree + line index), load/parse errors
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! base      → Primitives (FileId, LineIndex, Position/Span)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use forge_index::hir::{SymbolKind, symbols_for_source};
//!
//! let symbols = symbols_for_source("/** A person. */\nsig Person { friends: set Person }");
//! assert_eq!(symbols[0].kind, SymbolKind::Type);
//! assert_eq!(symbols[0].documentation.as_deref(), Some("A person."));
//! assert_eq!(symbols[1].detail.as_deref(), Some("field in Person: set Person"));
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → ide → project)
// ============================================================================

/// Foundation types: FileId, LineIndex, Position/Span
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Syntax: parsed files, load and parse errors
pub mod syntax;

/// High-level IR: symbols extracted from a parsed file
pub mod hir;

/// IDE features: outline, hover, goto-definition, completion
pub mod ide;

/// Project management: workspace loading
pub mod project;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, Position, Span, TextRange, TextSize};

pub use hir::{DocCommentPolicy, ExtractOptions, Symbol, SymbolKind, extract_symbols};
