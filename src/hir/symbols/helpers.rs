//! Detail rendering: AST nodes to the signature strings shown on hover.

use crate::parser::{
    ExampleDecl, FunDecl, ParamList, PredDecl, SigDecl, SyntaxKind, TestCase, TypeExpr,
};

/// Keyword text for a multiplicity or cardinality token.
pub(super) fn multiplicity_text(kind: SyntaxKind) -> Option<&'static str> {
    match kind {
        SyntaxKind::ONE_KW => Some("one"),
        SyntaxKind::LONE_KW => Some("lone"),
        SyntaxKind::SOME_KW => Some("some"),
        SyntaxKind::SET_KW => Some("set"),
        SyntaxKind::FUNC_KW => Some("func"),
        SyntaxKind::PFUNC_KW => Some("pfunc"),
        _ => None,
    }
}

/// `[MULT ]TYPE`; `None` when the type expression is missing.
pub(super) fn typed_detail(multiplicity: Option<SyntaxKind>, ty: Option<TypeExpr>) -> Option<String> {
    let ty = ty?.normalized_text();
    if ty.is_empty() {
        return None;
    }
    match multiplicity.and_then(multiplicity_text) {
        Some(mult) => Some(format!("{} {}", mult, ty)),
        None => Some(ty),
    }
}

/// `[var ][abstract ][one|lone|some ]sig NAMES[ extends PARENT | in EXPR]`
pub(super) fn sig_detail(sig: &SigDecl) -> String {
    let mut out = String::new();
    if sig.is_var() {
        out.push_str("var ");
    }
    if sig.is_abstract() {
        out.push_str("abstract ");
    }
    if let Some(mult) = sig.multiplicity().and_then(multiplicity_text) {
        out.push_str(mult);
        out.push(' ');
    }
    out.push_str("sig ");
    out.push_str(&sig.name_list().map(|l| l.to_text()).unwrap_or_default());
    if let Some(parent) = sig.parent() {
        out.push_str(" extends ");
        out.push_str(&parent.normalized_text());
    } else if let Some(superset) = sig.subset_of() {
        out.push_str(" in ");
        out.push_str(&superset.normalized_text());
    }
    out
}

/// `field in OWNER: [MULT ]TYPE`
pub(super) fn field_detail(owner: &str, typed: Option<&str>) -> String {
    match typed {
        Some(typed) => format!("field in {}: {}", owner, typed),
        None => format!("field in {}", owner),
    }
}

/// `name: type` per declaration, joined with `, `.
pub(super) fn params_text(list: Option<ParamList>) -> String {
    let Some(list) = list else {
        return String::new();
    };
    list.params()
        .map(|param| {
            let mut out = String::new();
            if param.is_disj() {
                out.push_str("disj ");
            }
            out.push_str(&param.name_list().map(|l| l.to_text()).unwrap_or_default());
            if let Some(typed) = typed_detail(param.multiplicity(), param.type_expr()) {
                out.push_str(": ");
                out.push_str(&typed);
            }
            out
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn bracketed(name: &str, params: &str) -> String {
    if params.is_empty() {
        name.to_string()
    } else {
        format!("{}[{}]", name, params)
    }
}

/// `pred NAME[PARAMS]`
pub(super) fn pred_detail(name: &str, pred: &PredDecl) -> String {
    format!("pred {}", bracketed(name, &params_text(pred.param_list())))
}

/// `fun NAME[PARAMS]: [MULT ]TYPE`
pub(super) fn fun_detail(name: &str, fun: &FunDecl) -> String {
    let head = format!("fun {}", bracketed(name, &params_text(fun.param_list())));
    match typed_detail(fun.return_multiplicity(), fun.return_type()) {
        Some(ret) => format!("{}: {}", head, ret),
        None => head,
    }
}

/// `test NAME is EXPECTATION`
pub(super) fn test_detail(name: &str, case: &TestCase) -> String {
    match case.expectation() {
        Some(expectation) => format!("test {} is {}", name, expectation),
        None => format!("test {}", name),
    }
}

/// `example NAME is EXPR`
pub(super) fn example_detail(name: &str, example: &ExampleDecl) -> String {
    match example.subject_text() {
        Some(subject) => format!("example {} is {}", name, subject),
        None => format!("example {}", name),
    }
}
