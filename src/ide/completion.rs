//! Completion suggestions implementation.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::hir::{Symbol, SymbolKind};
use crate::parser::keywords::FORGE_KEYWORDS;

/// Kind of completion item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompletionKind {
    Sig,
    Function,
    Field,
    Variable,
    Test,
    Keyword,
    Snippet,
}

impl CompletionKind {
    /// Convert to LSP completion item kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Sig => 7,      // Class
            CompletionKind::Function => 3, // Function
            CompletionKind::Field => 5,    // Field
            CompletionKind::Variable => 6, // Variable
            CompletionKind::Test => 23,    // Event
            CompletionKind::Keyword => 14, // Keyword
            CompletionKind::Snippet => 15, // Snippet
        }
    }

    fn for_symbol(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Type => CompletionKind::Sig,
            SymbolKind::Predicate | SymbolKind::Function => CompletionKind::Function,
            SymbolKind::Field => CompletionKind::Field,
            SymbolKind::Variable | SymbolKind::Parameter => CompletionKind::Variable,
            SymbolKind::Test | SymbolKind::Example => CompletionKind::Test,
        }
    }
}

/// A completion suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert.
    pub label: Arc<str>,
    /// The kind of completion.
    pub kind: CompletionKind,
    /// Detail text (shown after label).
    pub detail: Option<Arc<str>>,
    /// Documentation (shown in popup).
    pub documentation: Option<Arc<str>>,
    /// Text to insert (if different from label), in snippet syntax.
    pub insert_text: Option<Arc<str>>,
    /// Sort priority (lower = higher priority).
    pub sort_priority: u32,
}

impl CompletionItem {
    /// Create a new completion item.
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            insert_text: None,
            sort_priority: 100,
        }
    }

    /// Set the detail text.
    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the documentation.
    pub fn with_documentation(mut self, doc: impl Into<Arc<str>>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, text: impl Into<Arc<str>>) -> Self {
        self.insert_text = Some(text.into());
        self
    }

    /// Set the sort priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Create from an extracted symbol.
    pub fn from_symbol(symbol: &Symbol) -> Self {
        let mut item = Self::new(symbol.name.as_str(), CompletionKind::for_symbol(symbol.kind));
        item.detail = Some(Arc::from(
            symbol.detail.as_deref().unwrap_or(symbol.kind.display()),
        ));
        if let Some(ref doc) = symbol.documentation {
            item.documentation = Some(Arc::from(doc.as_str()));
        }
        item
    }
}

/// Get completion suggestions for the word being typed.
///
/// # Arguments
/// * `symbols` - Symbols of the current document
/// * `prefix` - Identifier characters left of the cursor (may be empty)
///
/// # Returns
/// Declared names first, then snippets, then keywords; each label and
/// kind pair appears once.
pub fn completions(symbols: &[Symbol], prefix: &str) -> Vec<CompletionItem> {
    let prefix_lower = prefix.to_lowercase();
    let wanted = |label: &str| label.to_lowercase().starts_with(&prefix_lower);

    let mut items: Vec<CompletionItem> = symbols
        .iter()
        .filter(|symbol| wanted(symbol.name.as_str()))
        .map(|symbol| {
            let priority = if symbol.kind.is_global() { 10 } else { 15 };
            CompletionItem::from_symbol(symbol).with_priority(priority)
        })
        .collect();
    items.extend(snippet_completions().into_iter().filter(|i| wanted(&i.label)));
    items.extend(keyword_completions().into_iter().filter(|i| wanted(&i.label)));

    items.sort_by_key(|item| item.sort_priority);

    let mut seen = FxHashSet::default();
    items.retain(|item| seen.insert((item.label.clone(), item.kind)));
    items
}

/// Get snippet completions for declaration skeletons.
fn snippet_completions() -> Vec<CompletionItem> {
    let snippets = [
        ("sig", "Signature declaration", "sig ${1:Name} {\n\t$0\n}"),
        (
            "pred",
            "Predicate declaration",
            "pred ${1:name}[${2:params}] {\n\t$0\n}",
        ),
        (
            "fun",
            "Function declaration",
            "fun ${1:name}[${2:params}]: ${3:Type} {\n\t$0\n}",
        ),
        (
            "test expect",
            "Test expectation block",
            "test expect {\n\t${1:name}: { $2 } is ${3|sat,unsat,theorem|}\n}",
        ),
    ];

    snippets
        .iter()
        .enumerate()
        .map(|(i, (label, detail, snippet))| {
            CompletionItem::new(*label, CompletionKind::Snippet)
                .with_detail(*detail)
                .with_insert_text(*snippet)
                .with_priority(20 + i as u32)
        })
        .collect()
}

/// Get keyword completions.
fn keyword_completions() -> Vec<CompletionItem> {
    FORGE_KEYWORDS
        .iter()
        .map(|(keyword, description)| {
            CompletionItem::new(*keyword, CompletionKind::Keyword)
                .with_detail(*description)
                .with_priority(50)
        })
        .collect()
}
