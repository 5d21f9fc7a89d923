//! Common source code fixtures for tests.

use forge_index::hir::{Symbol, symbols_for_source};
use once_cell::sync::Lazy;

/// A small social-network model touching every declaration kind.
pub const SOCIAL_NETWORK: &str = include_str!("../fixtures/social.frg");

/// Symbols of [`SOCIAL_NETWORK`], extracted once per test binary.
pub static SOCIAL_SYMBOLS: Lazy<Vec<Symbol>> = Lazy::new(|| symbols_for_source(SOCIAL_NETWORK));

pub const SIMPLE_SIG: &str = "sig Person { friends: set Person }";

pub const DOCUMENTED_PREDICATE: &str = r#"
sig Person { friends: set Person }

/** Checks basic well-formedness. */
pred wellFormed[p: Person] {
    p not in p.friends
}
"#;

pub const SIG_HIERARCHY: &str = r#"
abstract sig Animal {}
sig Dog extends Animal {}
one sig Rex extends Dog {}
sig Pet in Animal {}
"#;

pub const MULTI_NAME: &str = r#"
/** Primary colours. */
one sig Red, Green, Blue extends Colour {}
abstract sig Colour {
    /** Adjacent colours. */
    left, right: lone Colour
}
"#;

pub const TEMPORAL: &str = r#"
var sig Online {}
sig Server {
    var load: one Int,
    peers: set Server -> Int
}
"#;
