//! High-level IR (HIR): the symbol table of a Forge document.
//!
//! ## Key Types
//!
//! - [`Symbol`]: a named declaration with range, detail and documentation
//! - [`SymbolKind`]: sig, predicate, function, field, variable, parameter,
//!   test or example
//! - [`ExtractOptions`]: extraction configuration
//!
//! ## Pipeline
//!
//! ```text
//! SyntaxFile                ← text + CST + line index
//!     │
//!     ▼
//! extract_symbols(file)     ← one pre-order pass, document order
//!     │
//!     ▼
//! Vec<Symbol>               ← consumed by the IDE layer
//! ```

mod symbols;

pub use symbols::{
    DocCommentPolicy, ExtractOptions, Symbol, SymbolKind, extract_symbols, extract_symbols_with,
    scan_doc_comment, scan_with_policy, symbols_for_source,
};
