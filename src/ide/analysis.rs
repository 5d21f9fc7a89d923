//! AnalysisHost and Analysis: state management for IDE features.
//!
//! The `AnalysisHost` owns all mutable state and provides `Analysis` snapshots
//! for querying. This pattern ensures consistent reads across multiple queries.
//!
//! ## Usage
//!
//! ```
//! use forge_index::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content("model.frg", "sig Person { friends: set Person }");
//!
//! let analysis = host.analysis();
//! let file = analysis.get_file_id("model.frg").unwrap();
//! let hover = analysis.hover(file, 0, 5).unwrap();
//! assert!(hover.contents.starts_with("**sig** `Person`"));
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::FileId;
use crate::hir::{ExtractOptions, Symbol, extract_symbols_with};
use crate::syntax::{ParseError, SyntaxFile, parse_with_result};

use super::text_utils::{is_in_comment, word_prefix_before};
use super::{CompletionItem, DocumentSymbol, GotoResult, HoverResult, SymbolInfo};

/// A parsed file together with the symbols extracted from it.
struct FileEntry {
    file: SyntaxFile,
    symbols: Vec<Symbol>,
}

/// Owns all mutable state for the IDE layer.
///
/// Apply changes via `set_file_content()` and `remove_file()`,
/// then get a consistent snapshot via `analysis()`.
pub struct AnalysisHost {
    /// Files in insertion order; a file's position is its `FileId`
    files: IndexMap<PathBuf, FileEntry>,
    options: ExtractOptions,
    /// Global symbol name -> (file, index into that file's symbols)
    name_index: FxHashMap<SmolStr, Vec<(FileId, usize)>>,
    /// Whether the name index needs rebuilding
    index_dirty: bool,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost.
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create a host that extracts with the given options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            files: IndexMap::new(),
            options,
            name_index: FxHashMap::default(),
            index_dirty: false,
        }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Set the content of a file, parsing it and extracting its symbols.
    ///
    /// Returns parse errors if any. A file with errors is still stored but
    /// contributes no symbols.
    pub fn set_file_content(&mut self, path: impl Into<PathBuf>, content: &str) -> Vec<ParseError> {
        let path = path.into();
        let result = parse_with_result(content);
        if let Some(file) = result.content {
            self.set_file(path, file);
        }
        result.errors
    }

    /// Update or add a file with pre-parsed content.
    pub fn set_file(&mut self, path: PathBuf, file: SyntaxFile) {
        let symbols = extract_symbols_with(&file, &self.options);
        tracing::debug!(path = %path.display(), symbols = symbols.len(), "file updated");
        self.files.insert(path, FileEntry { file, symbols });
        self.index_dirty = true;
    }

    /// Remove a file from storage.
    ///
    /// Files added after it move down one `FileId`.
    pub fn remove_file(&mut self, path: &Path) -> bool {
        let removed = self.files.shift_remove(path).is_some();
        self.index_dirty |= removed;
        removed
    }

    /// Check if a file exists in storage.
    pub fn has_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Get the number of files loaded.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Get the FileId for a path, if it exists.
    pub fn get_file_id(&self, path: &Path) -> Option<FileId> {
        self.files
            .get_index_of(path)
            .map(|idx| FileId::new(idx as u32))
    }

    /// Get the path for a FileId, if it exists.
    pub fn get_file_path(&self, file_id: FileId) -> Option<&Path> {
        self.files
            .get_index(file_id.index())
            .map(|(path, _)| path.as_path())
    }

    /// Rebuild the name index from the current files.
    ///
    /// This is called automatically by `analysis()` if the index is dirty.
    pub fn rebuild_index(&mut self) {
        let mut index: FxHashMap<SmolStr, Vec<(FileId, usize)>> = FxHashMap::default();
        for (file_idx, entry) in self.files.values().enumerate() {
            let file_id = FileId::new(file_idx as u32);
            for (symbol_idx, symbol) in entry.symbols.iter().enumerate() {
                if symbol.kind.is_global() {
                    index
                        .entry(symbol.name.clone())
                        .or_default()
                        .push((file_id, symbol_idx));
                }
            }
        }
        tracing::trace!(names = index.len(), "name index rebuilt");
        self.name_index = index;
        self.index_dirty = false;
    }

    /// Get a consistent snapshot for querying.
    ///
    /// If the index is dirty, it will be rebuilt first.
    pub fn analysis(&mut self) -> Analysis<'_> {
        if self.index_dirty {
            self.rebuild_index();
        }

        Analysis {
            files: &self.files,
            name_index: &self.name_index,
        }
    }
}

/// An immutable snapshot of the analysis state.
///
/// All IDE queries go through this struct to ensure consistent results.
pub struct Analysis<'a> {
    files: &'a IndexMap<PathBuf, FileEntry>,
    name_index: &'a FxHashMap<SmolStr, Vec<(FileId, usize)>>,
}

impl<'a> Analysis<'a> {
    fn entry(&self, file_id: FileId) -> Option<&'a FileEntry> {
        self.files.get_index(file_id.index()).map(|(_, entry)| entry)
    }

    /// Symbols extracted from a file, in document order.
    pub fn symbols(&self, file_id: FileId) -> &'a [Symbol] {
        self.entry(file_id)
            .map(|entry| entry.symbols.as_slice())
            .unwrap_or_default()
    }

    /// Source text of a file.
    pub fn source(&self, file_id: FileId) -> Option<&'a str> {
        self.entry(file_id).map(|entry| entry.file.source_text())
    }

    /// Get hover information at a position.
    pub fn hover(&self, file_id: FileId, line: u32, col: u32) -> Option<HoverResult> {
        super::hover(self.symbols(file_id), line, col)
    }

    /// Go to definition at a position.
    pub fn goto_definition(&self, file_id: FileId, line: u32, col: u32) -> GotoResult {
        match self.entry(file_id) {
            Some(entry) => super::goto_definition(&entry.file, &entry.symbols, line, col),
            None => GotoResult::empty(),
        }
    }

    /// Get completions at a position.
    ///
    /// Nothing is offered inside comments.
    pub fn completions(&self, file_id: FileId, line: u32, col: u32) -> Vec<CompletionItem> {
        let Some(source) = self.source(file_id) else {
            return Vec::new();
        };
        if is_in_comment(source, line, col) {
            return Vec::new();
        }
        let prefix = source
            .lines()
            .nth(line as usize)
            .map(|text| word_prefix_before(text, col as usize))
            .unwrap_or_default();
        super::completions(self.symbols(file_id), &prefix)
    }

    /// Get the outline of a document.
    pub fn document_symbols(&self, file_id: FileId) -> Vec<DocumentSymbol> {
        super::document_symbols(self.symbols(file_id))
    }

    /// Search for symbols across the workspace.
    pub fn workspace_symbols(&self, query: Option<&str>) -> Vec<SymbolInfo> {
        super::workspace_symbols(
            self.files
                .values()
                .enumerate()
                .map(|(idx, entry)| (FileId::new(idx as u32), entry.symbols.as_slice())),
            query,
        )
    }

    /// Global declarations with exactly this name, in any file.
    pub fn declarations_named(&self, name: &str) -> Vec<SymbolInfo> {
        self.name_index
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|&(file_id, idx)| {
                let symbol = self.symbols(file_id).get(idx)?;
                Some(SymbolInfo::from_symbol(file_id, symbol))
            })
            .collect()
    }

    /// Number of files in the snapshot.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Get the FileId for a path.
    pub fn get_file_id(&self, path: impl AsRef<Path>) -> Option<FileId> {
        self.files
            .get_index_of(path.as_ref())
            .map(|idx| FileId::new(idx as u32))
    }

    /// Get the file path for a FileId.
    pub fn get_file_path(&self, file_id: FileId) -> Option<&'a Path> {
        self.files
            .get_index(file_id.index())
            .map(|(path, _)| path.as_path())
    }
}
