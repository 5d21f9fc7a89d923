//! IDE features: high-level APIs for editor requests.
//!
//! This module provides the interface between extracted symbols (HIR)
//! and an editor integration. Each function corresponds to an LSP request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No LSP types**: Uses our own types, converted at the LSP boundary
//! 3. **Composable**: Built on top of the extracted symbol list
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```
//! use forge_index::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content("model.frg", "sig Person {}\npred lonely[p: Person] { }");
//!
//! let analysis = host.analysis();
//! let file = analysis.get_file_id("model.frg").unwrap();
//! let outline = analysis.document_symbols(file);
//! assert_eq!(outline.len(), 2);
//! ```

mod analysis;
mod completion;
mod goto;
mod hover;
mod symbols;
pub mod text_utils;

pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use goto::{GotoResult, GotoTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use symbols::{DocumentSymbol, SymbolInfo, document_symbols, workspace_symbols};
pub use text_utils::{extract_word_at_cursor, is_in_comment};
