//! Root, name and expression nodes shared by all declarations.

use super::*;
use crate::base::LineIndex;
use rowan::TextRange;

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    /// All declarations in the file, in pre-order.
    pub fn declarations(&self) -> impl Iterator<Item = Declaration> + '_ {
        self.0.descendants().filter_map(Declaration::cast)
    }

    children_method!(sigs, SigDecl);
    children_method!(preds, PredDecl);
    children_method!(funs, FunDecl);
}

// ============================================================================
// Names
// ============================================================================

/// Position of an identifier token as the tree reports it: 1-based line,
/// 0-based column counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPosition {
    pub line: u32,
    pub column: u32,
}

ast_node!(Name, NAME);

impl Name {
    pub fn ident(&self) -> Option<SyntaxToken> {
        find_ident_token(&self.0)
    }

    pub fn text(&self) -> Option<String> {
        self.ident().map(|t| t.text().to_string())
    }

    pub fn text_range(&self) -> Option<TextRange> {
        self.ident().map(|t| t.text_range())
    }

    pub fn position(&self, index: &LineIndex) -> Option<TokenPosition> {
        let start = self.text_range()?.start();
        let lc = index.line_col(start);
        Some(TokenPosition {
            line: lc.line + 1,
            column: lc.col,
        })
    }
}

ast_node!(NameList, NAME_LIST);

impl NameList {
    children_method!(names, Name);

    /// `a, b, c`
    pub fn to_text(&self) -> String {
        self.names()
            .filter_map(|n| n.text())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ============================================================================
// Expressions and bodies
// ============================================================================

// A type or return expression, kept as a token run
ast_node!(TypeExpr, TYPE_EXPR);

impl TypeExpr {
    /// Source text with whitespace collapsed and comments dropped
    pub fn normalized_text(&self) -> String {
        normalize_tokens(
            self.0
                .descendants_with_tokens()
                .filter_map(|e| e.into_token()),
        )
    }
}

ast_node!(Block, BLOCK);

impl Block {
    children_method!(quant_decls, QuantDecl);
}
