//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the Forge syntax
//! tree. Formula bodies are kept as flat token runs, so only declaration
//! structure gets dedicated node kinds.

/// All syntax kinds (tokens and nodes) in Forge
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (sigs, predicates, parameter lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,       // // ... or -- ...
    BLOCK_COMMENT,      // /* ... */ and /** ... */

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,              // identifier
    INTEGER,            // 42
    STRING,             // "path/to/file.frg"
    ATOM,               // `Alice (instance atoms)
    HASH_LANG,          // #lang forge

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    COMMA,              // ,
    COLON,              // :
    SEMICOLON,          // ;
    DOT,                // .
    SLASH,              // /
    PIPE,               // |
    PIPE_PIPE,          // ||
    AMP,                // &
    AMP_AMP,            // &&
    PLUS,               // +
    PLUS_PLUS,          // ++
    MINUS,              // -
    ARROW,              // ->
    EQ,                 // =
    BANG,               // !
    BANG_EQ,            // !=
    LT,                 // <
    GT,                 // >
    LT_EQ,              // <=
    EQ_LT,              // =<
    GT_EQ,              // >=
    FAT_ARROW,          // =>
    LT_EQ_GT,           // <=>
    LT_COLON,           // <:
    COLON_GT,           // :>
    HASH,               // #
    CARET,              // ^
    STAR,               // *
    TILDE,              // ~
    AT,                 // @
    PRIME,              // '

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    // Declarations
    SIG_KW,
    ABSTRACT_KW,
    EXTENDS_KW,
    IN_KW,
    VAR_KW,
    PRED_KW,
    FUN_KW,
    FACT_KW,
    ASSERT_KW,
    INST_KW,

    // Multiplicities and quantifiers
    ONE_KW,
    LONE_KW,
    SOME_KW,
    SET_KW,
    FUNC_KW,
    PFUNC_KW,
    ALL_KW,
    NO_KW,
    SUM_KW,
    DISJ_KW,
    LET_KW,

    // Commands and tests
    RUN_KW,
    CHECK_KW,
    FOR_KW,
    BUT_KW,
    EXACTLY_KW,
    TEST_KW,
    EXPECT_KW,
    SUITE_KW,
    EXAMPLE_KW,
    IS_KW,
    SAT_KW,
    UNSAT_KW,
    THEOREM_KW,

    // Modules
    OPEN_KW,
    AS_KW,
    OPTION_KW,

    // Formula keywords
    NOT_KW,
    AND_KW,
    OR_KW,
    IMPLIES_KW,
    IFF_KW,
    ELSE_KW,
    NONE_KW,
    UNIV_KW,
    IDEN_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    LANG_DIRECTIVE,
    OPTION_DECL,
    OPEN_DECL,

    // sig Person extends Base { friends: set Person }
    SIG_DECL,
    SIG_BODY,
    FIELD_DECL,

    // pred / fun
    PRED_DECL,
    FUN_DECL,
    PARAM_LIST,
    PARAM_DECL,

    // Names and expressions
    NAME,
    NAME_LIST,
    TYPE_EXPR,

    // Formula bodies: { ... } with quantifier declarations inside
    BLOCK,
    QUANT_DECL,

    // Other top-level paragraphs
    FACT_DECL,
    ASSERT_DECL,
    INST_DECL,
    COMMAND,
    TEST_EXPECT,
    TEST_CASE,
    TEST_SUITE,
    EXAMPLE_DECL,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::SIG_KW as u16) && (self as u16) <= (Self::IDEN_KW as u16)
    }

    /// Multiplicity keywords allowed in front of a field, parameter or
    /// bound-variable type.
    pub fn is_multiplicity(self) -> bool {
        matches!(
            self,
            Self::ONE_KW
                | Self::LONE_KW
                | Self::SOME_KW
                | Self::SET_KW
                | Self::FUNC_KW
                | Self::PFUNC_KW
        )
    }

    /// Keywords that may open a quantified formula (`all x: A | ...`).
    pub fn is_quantifier(self) -> bool {
        matches!(
            self,
            Self::ALL_KW
                | Self::SOME_KW
                | Self::NO_KW
                | Self::ONE_KW
                | Self::LONE_KW
                | Self::SUM_KW
        )
    }

    /// Modifiers that may precede `sig`.
    pub fn is_sig_modifier(self) -> bool {
        matches!(
            self,
            Self::ABSTRACT_KW | Self::ONE_KW | Self::LONE_KW | Self::SOME_KW | Self::VAR_KW
        )
    }

    /// Keywords that start a top-level paragraph.
    pub fn starts_paragraph(self) -> bool {
        matches!(
            self,
            Self::SIG_KW
                | Self::PRED_KW
                | Self::FUN_KW
                | Self::FACT_KW
                | Self::ASSERT_KW
                | Self::INST_KW
                | Self::RUN_KW
                | Self::CHECK_KW
                | Self::TEST_KW
                | Self::EXPECT_KW
                | Self::EXAMPLE_KW
                | Self::OPEN_KW
                | Self::OPTION_KW
                | Self::HASH_LANG
        ) || self.is_sig_modifier()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ForgeLanguage {}

impl rowan::Language for ForgeLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ForgeLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ForgeLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ForgeLanguage>;
