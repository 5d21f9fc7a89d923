//! Recursive descent parser for Forge
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.
//!
//! Declarations (sigs, fields, predicates, functions, parameter lists,
//! tests, examples) get structured nodes. Formula bodies are parsed as
//! balanced token runs; the only structure recognised inside them is the
//! declaration part of quantified formulas and set comprehensions
//! (`all x, y: Person | ...`), which becomes a `QUANT_DECL` node.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse Forge source code into a CST
pub fn parse_forge(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// Kind of the n-th upcoming non-trivia token
    fn nth(&self, n: usize) -> SyntaxKind {
        let mut idx = self.pos;
        let mut count = 0;
        while idx < self.tokens.len() {
            if !self.tokens[idx].kind.is_trivia() {
                if count == n {
                    return self.tokens[idx].kind;
                }
                count += 1;
            }
            idx += 1;
        }
        SyntaxKind::ERROR
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.nth(0) == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.nth(0))
    }

    /// True when only trivia (or nothing) is left
    fn at_eof(&self) -> bool {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .all(|t| t.kind.is_trivia())
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump_raw();
        }
    }

    fn bump_raw(&mut self) {
        let tokens = self.tokens;
        if let Some(token) = tokens.get(self.pos) {
            if token.kind == SyntaxKind::ERROR {
                self.errors.push(SyntaxError::new(
                    format!("unexpected character {:?}", token.text),
                    TextRange::at(token.offset, TextSize::of(token.text)),
                ));
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    /// Consume leading trivia and the next significant token
    fn bump(&mut self) {
        self.skip_trivia();
        self.bump_raw();
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {}", what));
            false
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .tokens
            .iter()
            .skip(self.pos)
            .find(|t| !t.kind.is_trivia())
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            });
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.start_node(SyntaxKind::ERROR);
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump();
        }
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    /// Start a node; leading trivia stays in the parent
    fn start_node(&mut self, kind: SyntaxKind) {
        self.skip_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Lookahead helpers
    // =========================================================================

    /// Does a declaration `[disj] a, b, c :` start at the n-th token?
    fn is_decl_ahead(&self, n: usize) -> bool {
        let mut i = n;
        if self.nth(i) == SyntaxKind::DISJ_KW {
            i += 1;
        }
        if self.nth(i) != SyntaxKind::IDENT {
            return false;
        }
        loop {
            i += 1;
            match self.nth(i) {
                SyntaxKind::COLON => return true,
                SyntaxKind::COMMA if self.nth(i + 1) == SyntaxKind::IDENT => i += 1,
                _ => return false,
            }
        }
    }

    /// `label: run ...` or `label: check ...`
    fn at_labeled_command(&self) -> bool {
        self.nth(0) == SyntaxKind::IDENT
            && self.nth(1) == SyntaxKind::COLON
            && matches!(self.nth(2), SyntaxKind::RUN_KW | SyntaxKind::CHECK_KW)
    }

    /// Does a new top-level paragraph start at the next token?
    fn at_paragraph_start(&self) -> bool {
        self.nth(0).starts_paragraph() || self.at_labeled_command()
    }

    /// Is a sig declaration (possibly behind modifiers) next?
    fn at_sig(&self) -> bool {
        let mut i = 0;
        while self.nth(i).is_sig_modifier() {
            i += 1;
        }
        self.nth(i) == SyntaxKind::SIG_KW
    }

    // =========================================================================
    // Grammar: file and paragraphs
    // =========================================================================

    fn parse_source_file(&mut self) {
        self.builder.start_node(SyntaxKind::SOURCE_FILE.into());
        while !self.at_eof() {
            self.parse_paragraph();
        }
        self.skip_trivia();
        self.finish_node();
    }

    fn parse_paragraph(&mut self) {
        if self.at_sig() {
            self.parse_sig();
            return;
        }
        match self.nth(0) {
            SyntaxKind::HASH_LANG => {
                self.start_node(SyntaxKind::LANG_DIRECTIVE);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::OPTION_KW => self.parse_option(),
            SyntaxKind::OPEN_KW => self.parse_open(),
            SyntaxKind::PRED_KW => self.parse_pred(),
            SyntaxKind::FUN_KW => self.parse_fun(),
            SyntaxKind::FACT_KW => self.parse_named_block(SyntaxKind::FACT_DECL),
            SyntaxKind::INST_KW => self.parse_named_block(SyntaxKind::INST_DECL),
            SyntaxKind::ASSERT_KW => self.parse_assert(),
            SyntaxKind::RUN_KW | SyntaxKind::CHECK_KW => self.parse_command(),
            SyntaxKind::IDENT if self.at_labeled_command() => self.parse_command(),
            SyntaxKind::TEST_KW if self.nth(1) == SyntaxKind::EXPECT_KW => {
                self.parse_test_expect()
            }
            SyntaxKind::EXPECT_KW => self.parse_test_expect(),
            SyntaxKind::TEST_KW if self.nth(1) == SyntaxKind::SUITE_KW => self.parse_test_suite(),
            SyntaxKind::EXAMPLE_KW => self.parse_example(),
            _ => {
                tracing::trace!(kind = ?self.nth(0), "unexpected token at paragraph start");
                self.error_recover("expected a declaration", PARAGRAPH_RECOVERY);
            }
        }
    }

    /// `option run_sterling off`
    fn parse_option(&mut self) {
        self.start_node(SyntaxKind::OPTION_DECL);
        self.bump();
        if !self.at_eof() && !self.nth(0).starts_paragraph() {
            self.bump();
        } else {
            self.error("expected an option name");
        }
        if !self.at_eof() && !self.nth(0).starts_paragraph() {
            self.bump();
        }
        self.finish_node();
    }

    /// `open "helpers.frg"` or `open util/ordering[State] as ord`
    fn parse_open(&mut self) {
        self.start_node(SyntaxKind::OPEN_DECL);
        self.bump();
        let mut consumed = false;
        while self.at_any(&[
            SyntaxKind::IDENT,
            SyntaxKind::STRING,
            SyntaxKind::SLASH,
            SyntaxKind::DOT,
            SyntaxKind::MINUS,
        ]) {
            self.bump();
            consumed = true;
        }
        if !consumed {
            self.error("expected a module path");
        }
        if self.at(SyntaxKind::L_BRACKET) {
            self.parse_group();
        }
        if self.eat(SyntaxKind::AS_KW) {
            self.expect(SyntaxKind::IDENT, "a module alias");
        }
        self.finish_node();
    }

    /// `fact name { ... }` and `inst name { ... }`
    fn parse_named_block(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        if self.at(SyntaxKind::IDENT) {
            self.parse_name();
        }
        self.parse_block();
        self.finish_node();
    }

    /// `assert name { ... }` or a test-suite assertion such as
    /// `assert {...} is necessary for wellFormed for 3 Person`
    fn parse_assert(&mut self) {
        self.start_node(SyntaxKind::ASSERT_DECL);
        self.bump();
        if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::L_BRACE {
            self.parse_name();
            self.parse_block();
        } else {
            self.parse_until_paragraph();
        }
        self.finish_node();
    }

    /// `run {...} for 3 Person` / `check name for 5` / `showAll: run {}`
    fn parse_command(&mut self) {
        self.start_node(SyntaxKind::COMMAND);
        if self.at(SyntaxKind::IDENT) {
            self.parse_name();
            self.bump(); // ':'
        }
        self.bump();
        self.parse_until_paragraph();
        self.finish_node();
    }

    /// Consume balanced tokens until the next paragraph keyword
    fn parse_until_paragraph(&mut self) {
        while !self.at_eof() {
            let kind = self.nth(0);
            // `some x: A | ...` is a formula, not a `some sig`
            if kind.is_quantifier() && self.is_decl_ahead(1) {
                self.bump();
                self.parse_quant_decls();
                continue;
            }
            if self.at_paragraph_start() || is_closer(kind) {
                break;
            }
            match kind {
                SyntaxKind::L_BRACE => self.parse_block(),
                SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN => self.parse_group(),
                _ => self.bump(),
            }
        }
    }

    // =========================================================================
    // Grammar: names and expressions
    // =========================================================================

    fn parse_name(&mut self) {
        if self.at(SyntaxKind::IDENT) {
            self.start_node(SyntaxKind::NAME);
            self.bump();
            self.finish_node();
        } else {
            self.error("expected a name");
        }
    }

    /// `a, b, c`
    fn parse_name_list(&mut self) {
        self.start_node(SyntaxKind::NAME_LIST);
        self.parse_name();
        while self.at(SyntaxKind::COMMA) && self.nth(1) == SyntaxKind::IDENT {
            self.bump();
            self.parse_name();
        }
        self.finish_node();
    }

    /// A type or return expression kept as a flat token run, ending before
    /// any of `stops` at nesting depth zero.
    fn parse_type_expr(&mut self, stops: &[SyntaxKind]) {
        self.start_node(SyntaxKind::TYPE_EXPR);
        let mut depth = 0usize;
        let mut consumed = false;
        while !self.at_eof() {
            let kind = self.nth(0);
            if depth == 0 && (stops.contains(&kind) || is_closer(kind)) {
                break;
            }
            if is_opener(kind) {
                depth += 1;
            } else if is_closer(kind) {
                depth -= 1;
            }
            self.bump();
            consumed = true;
        }
        if !consumed {
            self.error("expected a type expression");
        }
        self.finish_node();
    }

    // =========================================================================
    // Grammar: sigs and fields
    // =========================================================================

    /// `abstract sig Person extends Base { friends: set Person } { fact }`
    fn parse_sig(&mut self) {
        self.start_node(SyntaxKind::SIG_DECL);
        while self.nth(0).is_sig_modifier() {
            self.bump();
        }
        self.expect(SyntaxKind::SIG_KW, "'sig'");
        self.parse_name_list();
        if self.eat(SyntaxKind::EXTENDS_KW) || self.eat(SyntaxKind::IN_KW) {
            self.parse_type_expr(&[SyntaxKind::L_BRACE]);
        }
        self.parse_sig_body();
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_block();
        }
        self.finish_node();
    }

    fn parse_sig_body(&mut self) {
        self.start_node(SyntaxKind::SIG_BODY);
        if !self.expect(SyntaxKind::L_BRACE, "'{'") {
            self.finish_node();
            return;
        }
        loop {
            if self.at_eof() || self.at(SyntaxKind::R_BRACE) {
                break;
            }
            if self.at_any(&[SyntaxKind::VAR_KW, SyntaxKind::IDENT]) {
                self.parse_field_decl();
            } else {
                self.error_recover(
                    "expected a field declaration",
                    &[SyntaxKind::COMMA, SyntaxKind::R_BRACE],
                );
            }
            if !self.eat(SyntaxKind::COMMA) && !self.at(SyntaxKind::R_BRACE) {
                self.error("expected ',' or '}'");
                if !self.at_any(&[SyntaxKind::VAR_KW, SyntaxKind::IDENT]) {
                    break;
                }
            }
        }
        self.expect(SyntaxKind::R_BRACE, "'}'");
        self.finish_node();
    }

    /// `var friends, enemies: set Person`
    fn parse_field_decl(&mut self) {
        self.start_node(SyntaxKind::FIELD_DECL);
        self.eat(SyntaxKind::VAR_KW);
        self.parse_name_list();
        self.expect(SyntaxKind::COLON, "':'");
        if self.nth(0).is_multiplicity() {
            self.bump();
        }
        self.parse_type_expr(&[SyntaxKind::COMMA, SyntaxKind::R_BRACE]);
        self.finish_node();
    }

    // =========================================================================
    // Grammar: predicates and functions
    // =========================================================================

    /// `pred wellFormed[p: Person] { ... }`
    fn parse_pred(&mut self) {
        self.start_node(SyntaxKind::PRED_DECL);
        self.bump();
        self.skip_receiver();
        self.parse_name();
        if self.at_any(&[SyntaxKind::L_BRACKET, SyntaxKind::L_PAREN]) {
            self.parse_param_list();
        }
        self.parse_block();
        self.finish_node();
    }

    /// `fun getFriends[p: Person]: set Person { ... }`
    fn parse_fun(&mut self) {
        self.start_node(SyntaxKind::FUN_DECL);
        self.bump();
        self.skip_receiver();
        self.parse_name();
        if self.at_any(&[SyntaxKind::L_BRACKET, SyntaxKind::L_PAREN]) {
            self.parse_param_list();
        }
        self.expect(SyntaxKind::COLON, "':'");
        if self.nth(0).is_multiplicity() {
            self.bump();
        }
        self.parse_type_expr(&[SyntaxKind::L_BRACE]);
        self.parse_block();
        self.finish_node();
    }

    /// Alloy's receiver form `pred Person.isLonely` names the predicate
    /// after the dot.
    fn skip_receiver(&mut self) {
        if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::DOT {
            self.bump();
            self.bump();
        }
    }

    fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::PARAM_LIST);
        let close = if self.at(SyntaxKind::L_BRACKET) {
            SyntaxKind::R_BRACKET
        } else {
            SyntaxKind::R_PAREN
        };
        self.bump();
        while !self.at_eof() && !self.at(close) {
            if self.is_decl_ahead(0) {
                self.parse_param_decl(close);
            } else {
                self.error_recover("expected a parameter", &[SyntaxKind::COMMA, close]);
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        let what = if close == SyntaxKind::R_BRACKET { "']'" } else { "')'" };
        self.expect(close, what);
        self.finish_node();
    }

    /// `disj a, b: lone Person`
    fn parse_param_decl(&mut self, close: SyntaxKind) {
        self.start_node(SyntaxKind::PARAM_DECL);
        self.eat(SyntaxKind::DISJ_KW);
        self.parse_name_list();
        self.expect(SyntaxKind::COLON, "':'");
        if self.nth(0).is_multiplicity() {
            self.bump();
        }
        self.parse_type_expr(&[SyntaxKind::COMMA, close]);
        self.finish_node();
    }

    // =========================================================================
    // Grammar: formula bodies
    // =========================================================================

    /// `{ ... }`, with set-comprehension declarations at its start
    fn parse_block(&mut self) {
        self.start_node(SyntaxKind::BLOCK);
        if !self.expect(SyntaxKind::L_BRACE, "'{'") {
            self.finish_node();
            return;
        }
        if self.is_decl_ahead(0) {
            self.parse_quant_decls();
        }
        self.parse_formula(SyntaxKind::R_BRACE);
        self.expect(SyntaxKind::R_BRACE, "'}'");
        self.finish_node();
    }

    /// `[...]` or `(...)` inside a formula
    fn parse_group(&mut self) {
        let close = if self.at(SyntaxKind::L_BRACKET) {
            SyntaxKind::R_BRACKET
        } else {
            SyntaxKind::R_PAREN
        };
        self.bump();
        self.parse_formula(close);
        let what = if close == SyntaxKind::R_BRACKET { "']'" } else { "')'" };
        self.expect(close, what);
    }

    /// Token soup up to (not including) `close`
    fn parse_formula(&mut self, close: SyntaxKind) {
        while !self.at_eof() {
            let kind = self.nth(0);
            if kind == close || is_closer(kind) {
                return;
            }
            match kind {
                k if k.is_quantifier() && self.is_decl_ahead(1) => {
                    self.bump();
                    self.parse_quant_decls();
                }
                SyntaxKind::L_BRACE => self.parse_block(),
                SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN => self.parse_group(),
                _ => self.bump(),
            }
        }
    }

    /// `x: A, disj y, z: set B`
    fn parse_quant_decls(&mut self) {
        loop {
            self.parse_quant_decl();
            if self.at(SyntaxKind::COMMA) && self.is_decl_ahead(1) {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn parse_quant_decl(&mut self) {
        self.start_node(SyntaxKind::QUANT_DECL);
        self.eat(SyntaxKind::DISJ_KW);
        self.parse_name_list();
        self.expect(SyntaxKind::COLON, "':'");
        if self.nth(0).is_multiplicity() {
            self.bump();
        }
        self.parse_type_expr(&[SyntaxKind::COMMA, SyntaxKind::PIPE, SyntaxKind::L_BRACE]);
        self.finish_node();
    }

    // =========================================================================
    // Grammar: tests and examples
    // =========================================================================

    /// `[test] expect [name] { t1: {...} for 3 is sat ... }`
    fn parse_test_expect(&mut self) {
        self.start_node(SyntaxKind::TEST_EXPECT);
        self.eat(SyntaxKind::TEST_KW);
        self.bump();
        if self.at(SyntaxKind::IDENT) {
            self.parse_name();
        }
        if self.expect(SyntaxKind::L_BRACE, "'{'") {
            while !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
                if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::COLON {
                    self.parse_test_case();
                } else {
                    self.error_recover(
                        "expected a test case",
                        &[SyntaxKind::IDENT, SyntaxKind::R_BRACE],
                    );
                }
            }
            self.expect(SyntaxKind::R_BRACE, "'}'");
        }
        self.finish_node();
    }

    /// `name: {formula} for 3 Person is sat`
    fn parse_test_case(&mut self) {
        self.start_node(SyntaxKind::TEST_CASE);
        self.parse_name();
        self.bump(); // ':'
        while !self.at_eof() && !self.at(SyntaxKind::IS_KW) {
            let kind = self.nth(0);
            if is_closer(kind) || self.at_paragraph_start() {
                break;
            }
            match kind {
                SyntaxKind::L_BRACE => self.parse_block(),
                SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN => self.parse_group(),
                _ => self.bump(),
            }
        }
        if self.expect(SyntaxKind::IS_KW, "'is'") {
            if self.at_any(&[
                SyntaxKind::SAT_KW,
                SyntaxKind::UNSAT_KW,
                SyntaxKind::THEOREM_KW,
                SyntaxKind::IDENT,
            ]) {
                self.bump();
                self.eat(SyntaxKind::STRING);
            } else {
                self.error("expected a test expectation");
            }
        }
        self.finish_node();
    }

    /// `test suite for wellFormed { example ... assert ... }`
    fn parse_test_suite(&mut self) {
        self.start_node(SyntaxKind::TEST_SUITE);
        self.bump();
        self.bump();
        self.expect(SyntaxKind::FOR_KW, "'for'");
        self.expect(SyntaxKind::IDENT, "a predicate name");
        if self.expect(SyntaxKind::L_BRACE, "'{'") {
            while !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
                self.parse_paragraph();
            }
            self.expect(SyntaxKind::R_BRACE, "'}'");
        }
        self.finish_node();
    }

    /// `example twoPeople is {wellFormed} for { Person = `A + `B }`
    fn parse_example(&mut self) {
        self.start_node(SyntaxKind::EXAMPLE_DECL);
        self.bump();
        self.parse_name();
        self.expect(SyntaxKind::IS_KW, "'is'");
        while !self.at_eof() && !self.at(SyntaxKind::FOR_KW) {
            let kind = self.nth(0);
            if is_closer(kind) || self.at_paragraph_start() {
                break;
            }
            match kind {
                SyntaxKind::L_BRACE => self.parse_block(),
                SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN => self.parse_group(),
                _ => self.bump(),
            }
        }
        if self.expect(SyntaxKind::FOR_KW, "'for'") {
            if self.at(SyntaxKind::L_BRACE) {
                self.parse_block();
            } else {
                self.expect(SyntaxKind::IDENT, "an instance");
            }
        }
        self.finish_node();
    }
}

/// Tokens where top-level recovery resumes
const PARAGRAPH_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::SIG_KW,
    SyntaxKind::ABSTRACT_KW,
    SyntaxKind::PRED_KW,
    SyntaxKind::FUN_KW,
    SyntaxKind::FACT_KW,
    SyntaxKind::ASSERT_KW,
    SyntaxKind::INST_KW,
    SyntaxKind::RUN_KW,
    SyntaxKind::CHECK_KW,
    SyntaxKind::TEST_KW,
    SyntaxKind::EXPECT_KW,
    SyntaxKind::EXAMPLE_KW,
    SyntaxKind::OPEN_KW,
    SyntaxKind::OPTION_KW,
];

fn is_opener(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::L_BRACE | SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN
    )
}

fn is_closer(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::R_BRACE | SyntaxKind::R_BRACKET | SyntaxKind::R_PAREN
    )
}
