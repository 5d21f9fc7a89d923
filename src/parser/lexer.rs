//! Logos-based lexer for Forge
//!
//! Fast tokenization using the logos crate. Every byte of the input ends
//! up in exactly one token, trivia included, so the CST stays lossless.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    #[regex(r"--[^\n]*")]
    LineComment,

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"`[a-zA-Z_][a-zA-Z0-9_]*")]
    Atom,

    #[regex(r"#lang[^\n]*")]
    HashLang,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (longest match wins)
    // =========================================================================
    #[token("<=>")]
    LtEqGt,
    #[token("<=")]
    LtEq,
    #[token("=<")]
    EqLt,
    #[token(">=")]
    GtEq,
    #[token("=>")]
    FatArrow,
    #[token("<:")]
    LtColon,
    #[token(":>")]
    ColonGt,
    #[token("->")]
    Arrow,
    #[token("++")]
    PlusPlus,
    #[token("||")]
    PipePipe,
    #[token("&&")]
    AmpAmp,
    #[token("!=")]
    BangEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token("/")]
    Slash,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("=")]
    Eq,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("#")]
    Hash,
    #[token("^")]
    Caret,
    #[token("*")]
    Star,
    #[token("~")]
    Tilde,
    #[token("@")]
    At,
    #[token("'")]
    Prime,

    // =========================================================================
    // KEYWORDS (alphabetical, keyword beats identifier on equal length)
    // =========================================================================
    #[token("abstract")]
    AbstractKw,
    #[token("all")]
    AllKw,
    #[token("and")]
    AndKw,
    #[token("as")]
    AsKw,
    #[token("assert")]
    AssertKw,
    #[token("but")]
    ButKw,
    #[token("check")]
    CheckKw,
    #[token("disj")]
    DisjKw,
    #[token("else")]
    ElseKw,
    #[token("exactly")]
    ExactlyKw,
    #[token("example")]
    ExampleKw,
    #[token("expect")]
    ExpectKw,
    #[token("extends")]
    ExtendsKw,
    #[token("fact")]
    FactKw,
    #[token("for")]
    ForKw,
    #[token("fun")]
    FunKw,
    #[token("func")]
    FuncKw,
    #[token("iden")]
    IdenKw,
    #[token("iff")]
    IffKw,
    #[token("implies")]
    ImpliesKw,
    #[token("in")]
    InKw,
    #[token("inst")]
    InstKw,
    #[token("is")]
    IsKw,
    #[token("let")]
    LetKw,
    #[token("lone")]
    LoneKw,
    #[token("no")]
    NoKw,
    #[token("none")]
    NoneKw,
    #[token("not")]
    NotKw,
    #[token("one")]
    OneKw,
    #[token("open")]
    OpenKw,
    #[token("option")]
    OptionKw,
    #[token("or")]
    OrKw,
    #[token("pfunc")]
    PfuncKw,
    #[token("pred")]
    PredKw,
    #[token("run")]
    RunKw,
    #[token("sat")]
    SatKw,
    #[token("set")]
    SetKw,
    #[token("sig")]
    SigKw,
    #[token("some")]
    SomeKw,
    #[token("suite")]
    SuiteKw,
    #[token("sum")]
    SumKw,
    #[token("test")]
    TestKw,
    #[token("theorem")]
    TheoremKw,
    #[token("univ")]
    UnivKw,
    #[token("unsat")]
    UnsatKw,
    #[token("var")]
    VarKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            String => SyntaxKind::STRING,
            Atom => SyntaxKind::ATOM,
            HashLang => SyntaxKind::HASH_LANG,

            // Punctuation
            LtEqGt => SyntaxKind::LT_EQ_GT,
            LtEq => SyntaxKind::LT_EQ,
            EqLt => SyntaxKind::EQ_LT,
            GtEq => SyntaxKind::GT_EQ,
            FatArrow => SyntaxKind::FAT_ARROW,
            LtColon => SyntaxKind::LT_COLON,
            ColonGt => SyntaxKind::COLON_GT,
            Arrow => SyntaxKind::ARROW,
            PlusPlus => SyntaxKind::PLUS_PLUS,
            PipePipe => SyntaxKind::PIPE_PIPE,
            AmpAmp => SyntaxKind::AMP_AMP,
            BangEq => SyntaxKind::BANG_EQ,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Comma => SyntaxKind::COMMA,
            Colon => SyntaxKind::COLON,
            Semicolon => SyntaxKind::SEMICOLON,
            Dot => SyntaxKind::DOT,
            Slash => SyntaxKind::SLASH,
            Pipe => SyntaxKind::PIPE,
            Amp => SyntaxKind::AMP,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Eq => SyntaxKind::EQ,
            Bang => SyntaxKind::BANG,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Hash => SyntaxKind::HASH,
            Caret => SyntaxKind::CARET,
            Star => SyntaxKind::STAR,
            Tilde => SyntaxKind::TILDE,
            At => SyntaxKind::AT,
            Prime => SyntaxKind::PRIME,

            // Keywords
            AbstractKw => SyntaxKind::ABSTRACT_KW,
            AllKw => SyntaxKind::ALL_KW,
            AndKw => SyntaxKind::AND_KW,
            AsKw => SyntaxKind::AS_KW,
            AssertKw => SyntaxKind::ASSERT_KW,
            ButKw => SyntaxKind::BUT_KW,
            CheckKw => SyntaxKind::CHECK_KW,
            DisjKw => SyntaxKind::DISJ_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            ExactlyKw => SyntaxKind::EXACTLY_KW,
            ExampleKw => SyntaxKind::EXAMPLE_KW,
            ExpectKw => SyntaxKind::EXPECT_KW,
            ExtendsKw => SyntaxKind::EXTENDS_KW,
            FactKw => SyntaxKind::FACT_KW,
            ForKw => SyntaxKind::FOR_KW,
            FunKw => SyntaxKind::FUN_KW,
            FuncKw => SyntaxKind::FUNC_KW,
            IdenKw => SyntaxKind::IDEN_KW,
            IffKw => SyntaxKind::IFF_KW,
            ImpliesKw => SyntaxKind::IMPLIES_KW,
            InKw => SyntaxKind::IN_KW,
            InstKw => SyntaxKind::INST_KW,
            IsKw => SyntaxKind::IS_KW,
            LetKw => SyntaxKind::LET_KW,
            LoneKw => SyntaxKind::LONE_KW,
            NoKw => SyntaxKind::NO_KW,
            NoneKw => SyntaxKind::NONE_KW,
            NotKw => SyntaxKind::NOT_KW,
            OneKw => SyntaxKind::ONE_KW,
            OpenKw => SyntaxKind::OPEN_KW,
            OptionKw => SyntaxKind::OPTION_KW,
            OrKw => SyntaxKind::OR_KW,
            PfuncKw => SyntaxKind::PFUNC_KW,
            PredKw => SyntaxKind::PRED_KW,
            RunKw => SyntaxKind::RUN_KW,
            SatKw => SyntaxKind::SAT_KW,
            SetKw => SyntaxKind::SET_KW,
            SigKw => SyntaxKind::SIG_KW,
            SomeKw => SyntaxKind::SOME_KW,
            SuiteKw => SyntaxKind::SUITE_KW,
            SumKw => SyntaxKind::SUM_KW,
            TestKw => SyntaxKind::TEST_KW,
            TheoremKw => SyntaxKind::THEOREM_KW,
            UnivKw => SyntaxKind::UNIV_KW,
            UnsatKw => SyntaxKind::UNSAT_KW,
            VarKw => SyntaxKind::VAR_KW,
        }
    }
}
