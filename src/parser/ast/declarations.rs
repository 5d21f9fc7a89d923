//! Declaration nodes: sigs, fields, predicates, functions, parameters,
//! quantifier-bound variables, test cases and examples.

use super::*;

// ============================================================================
// Declaration dispatch
// ============================================================================

/// Every node that declares a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    Sig(SigDecl),
    Field(FieldDecl),
    Pred(PredDecl),
    Fun(FunDecl),
    Quant(QuantDecl),
    Param(ParamDecl),
    TestCase(TestCase),
    Example(ExampleDecl),
}

impl AstNode for Declaration {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::SIG_DECL
                | SyntaxKind::FIELD_DECL
                | SyntaxKind::PRED_DECL
                | SyntaxKind::FUN_DECL
                | SyntaxKind::QUANT_DECL
                | SyntaxKind::PARAM_DECL
                | SyntaxKind::TEST_CASE
                | SyntaxKind::EXAMPLE_DECL
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SIG_DECL => Some(Self::Sig(SigDecl(node))),
            SyntaxKind::FIELD_DECL => Some(Self::Field(FieldDecl(node))),
            SyntaxKind::PRED_DECL => Some(Self::Pred(PredDecl(node))),
            SyntaxKind::FUN_DECL => Some(Self::Fun(FunDecl(node))),
            SyntaxKind::QUANT_DECL => Some(Self::Quant(QuantDecl(node))),
            SyntaxKind::PARAM_DECL => Some(Self::Param(ParamDecl(node))),
            SyntaxKind::TEST_CASE => Some(Self::TestCase(TestCase(node))),
            SyntaxKind::EXAMPLE_DECL => Some(Self::Example(ExampleDecl(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Sig(n) => n.syntax(),
            Self::Field(n) => n.syntax(),
            Self::Pred(n) => n.syntax(),
            Self::Fun(n) => n.syntax(),
            Self::Quant(n) => n.syntax(),
            Self::Param(n) => n.syntax(),
            Self::TestCase(n) => n.syntax(),
            Self::Example(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Sigs and fields
// ============================================================================

ast_node!(SigDecl, SIG_DECL);

impl SigDecl {
    has_token_method!(is_abstract, ABSTRACT_KW, "abstract sig Animal {}");
    has_token_method!(is_var, VAR_KW, "var sig Active in Node {}");
    find_token_kind_method!(
        multiplicity,
        [ONE_KW, LONE_KW, SOME_KW],
        "Get the cardinality modifier (`one sig`, `lone sig`, `some sig`)."
    );
    first_child_method!(name_list, NameList);
    first_child_method!(body, SigBody);
    child_after_keyword_method!(parent, TypeExpr, EXTENDS_KW, "The `extends` parent type.");
    child_after_keyword_method!(subset_of, TypeExpr, IN_KW, "The `in` superset expression.");

    pub fn names(&self) -> Vec<Name> {
        self.name_list()
            .map(|list| list.names().collect())
            .unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldDecl> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.fields().collect::<Vec<_>>())
    }
}

ast_node!(SigBody, SIG_BODY);

impl SigBody {
    children_method!(fields, FieldDecl);
}

ast_node!(FieldDecl, FIELD_DECL);

impl FieldDecl {
    has_token_method!(is_var, VAR_KW, "var inbox: set Message");
    find_token_kind_method!(
        multiplicity,
        [ONE_KW, LONE_KW, SOME_KW, SET_KW, FUNC_KW, PFUNC_KW],
        "Get the multiplicity keyword in front of the field type."
    );
    first_child_method!(name_list, NameList);
    first_child_method!(type_expr, TypeExpr);

    pub fn names(&self) -> Vec<Name> {
        self.name_list()
            .map(|list| list.names().collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Predicates and functions
// ============================================================================

ast_node!(PredDecl, PRED_DECL);

impl PredDecl {
    first_child_method!(name, Name);
    first_child_method!(param_list, ParamList);
    first_child_method!(body, Block);
}

ast_node!(FunDecl, FUN_DECL);

impl FunDecl {
    first_child_method!(name, Name);
    first_child_method!(param_list, ParamList);
    find_token_kind_method!(
        return_multiplicity,
        [ONE_KW, LONE_KW, SOME_KW, SET_KW, FUNC_KW, PFUNC_KW],
        "Get the multiplicity keyword in front of the return type."
    );
    first_child_method!(return_type, TypeExpr);
    first_child_method!(body, Block);
}

ast_node!(ParamList, PARAM_LIST);

impl ParamList {
    children_method!(params, ParamDecl);
}

ast_node!(ParamDecl, PARAM_DECL);

impl ParamDecl {
    has_token_method!(is_disj, DISJ_KW);
    find_token_kind_method!(
        multiplicity,
        [ONE_KW, LONE_KW, SOME_KW, SET_KW, FUNC_KW, PFUNC_KW],
        "Get the multiplicity keyword in front of the parameter type."
    );
    first_child_method!(name_list, NameList);
    first_child_method!(type_expr, TypeExpr);

    pub fn names(&self) -> Vec<Name> {
        self.name_list()
            .map(|list| list.names().collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Quantifier-bound variables
// ============================================================================

// `x, y: set Person` after a quantifier, or at the start of a set
// comprehension.
ast_node!(QuantDecl, QUANT_DECL);

impl QuantDecl {
    has_token_method!(is_disj, DISJ_KW, "all disj a, b: Person | ...");
    find_token_kind_method!(
        multiplicity,
        [ONE_KW, LONE_KW, SOME_KW, SET_KW, FUNC_KW, PFUNC_KW],
        "Get the multiplicity keyword in front of the bound type."
    );
    first_child_method!(name_list, NameList);
    first_child_method!(type_expr, TypeExpr);

    pub fn names(&self) -> Vec<Name> {
        self.name_list()
            .map(|list| list.names().collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Tests and examples
// ============================================================================

// One entry of a `test expect { ... }` block.
ast_node!(TestCase, TEST_CASE);

impl TestCase {
    first_child_method!(name, Name);

    /// `sat`, `unsat`, `theorem` or another expectation word after `is`.
    pub fn expectation(&self) -> Option<String> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .skip_while(|t| t.kind() != SyntaxKind::IS_KW)
            .nth(1)
            .map(|t| t.text().to_string())
    }
}

ast_node!(ExampleDecl, EXAMPLE_DECL);

impl ExampleDecl {
    first_child_method!(name, Name);

    /// The formula between `is` and `for`, whitespace-normalised.
    pub fn subject_text(&self) -> Option<String> {
        let mut tokens = Vec::new();
        let mut seen_is = false;
        for child in self.0.children_with_tokens() {
            match child {
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::IS_KW && !seen_is => {
                    seen_is = true;
                }
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::FOR_KW && seen_is => {
                    break;
                }
                rowan::NodeOrToken::Token(t) if seen_is => tokens.push(t),
                rowan::NodeOrToken::Node(n) if seen_is => tokens.extend(
                    n.descendants_with_tokens().filter_map(|e| e.into_token()),
                ),
                _ => {}
            }
        }
        let text = normalize_tokens(tokens.into_iter());
        if text.is_empty() { None } else { Some(text) }
    }
}
