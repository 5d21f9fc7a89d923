//! Symbol types produced by extraction.

use std::fmt;

use smol_str::SmolStr;

use crate::base::{Position, Span};

// ============================================================================
// SYMBOL KIND
// ============================================================================

/// The kind of declaration a symbol came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    /// `sig Person { ... }`
    Type,
    /// `pred wellFormed[...] { ... }`
    Predicate,
    /// `fun getFriends[...]: set Person { ... }`
    Function,
    /// A field inside a sig body
    Field,
    /// A quantifier-bound variable (`all x: A | ...`)
    Variable,
    /// A predicate or function parameter
    Parameter,
    /// A named case in a `test expect` block
    Test,
    /// `example name is ... for ...`
    Example,
}

impl SymbolKind {
    /// Get a display label for this kind.
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::Type => "sig",
            SymbolKind::Predicate => "predicate",
            SymbolKind::Function => "function",
            SymbolKind::Field => "field",
            SymbolKind::Variable => "variable",
            SymbolKind::Parameter => "parameter",
            SymbolKind::Test => "test",
            SymbolKind::Example => "example",
        }
    }

    /// Declarations visible from anywhere in the file.
    pub fn is_global(&self) -> bool {
        !self.is_local()
    }

    /// Bound variables and parameters, visible only in their formula.
    pub fn is_local(&self) -> bool {
        matches!(self, SymbolKind::Variable | SymbolKind::Parameter)
    }

    /// Convert to LSP symbol kind number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            SymbolKind::Type => 5,       // Class
            SymbolKind::Predicate => 12, // Function
            SymbolKind::Function => 12,  // Function
            SymbolKind::Field => 8,      // Field
            SymbolKind::Variable => 13,  // Variable
            SymbolKind::Parameter => 13, // Variable
            SymbolKind::Test => 24,      // Event
            SymbolKind::Example => 23,   // Struct
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

// ============================================================================
// SYMBOL
// ============================================================================

/// A named declaration found in a Forge document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol {
    /// Identifier text
    pub name: SmolStr,
    pub kind: SymbolKind,
    /// Range of the identifier token (0-based, end exclusive)
    pub range: Span,
    /// Rendered signature, e.g. `field in Person: set Person`
    pub detail: Option<String>,
    /// Cleaned documentation comment
    pub documentation: Option<String>,
    /// Enclosing sig name, for fields
    pub container: Option<SmolStr>,
}

impl Symbol {
    pub fn new(name: impl Into<SmolStr>, kind: SymbolKind, range: Span) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
            detail: None,
            documentation: None,
            container: None,
        }
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_documentation(mut self, documentation: Option<String>) -> Self {
        self.documentation = documentation;
        self
    }

    pub fn with_container(mut self, container: impl Into<SmolStr>) -> Self {
        self.container = Some(container.into());
        self
    }

    /// Whether the cursor is on this symbol's identifier.
    pub fn contains(&self, position: Position) -> bool {
        self.range.contains(position)
    }
}
