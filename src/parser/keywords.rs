//! Forge keyword table used by completion.

/// Keywords offered for completion, with a one-line description each.
pub const FORGE_KEYWORDS: &[(&str, &str)] = &[
    ("sig", "Declare a signature (a set of atoms)"),
    ("abstract", "Signature with no atoms outside its children"),
    ("extends", "Declare a child signature"),
    ("in", "Subset signature or membership test"),
    ("var", "Mutable signature or field (temporal mode)"),
    ("pred", "Declare a predicate"),
    ("fun", "Declare a helper function"),
    ("fact", "Constraint that always holds"),
    ("assert", "Property to check"),
    ("inst", "Declare a partial instance"),
    ("one", "Exactly one"),
    ("lone", "Zero or one"),
    ("some", "One or more"),
    ("set", "Any number"),
    ("func", "Total function field"),
    ("pfunc", "Partial function field"),
    ("all", "Universal quantifier"),
    ("no", "No elements / none satisfy"),
    ("sum", "Integer sum over a quantified variable"),
    ("disj", "Bound variables are pairwise distinct"),
    ("let", "Local binding"),
    ("run", "Search for an instance"),
    ("check", "Search for a counterexample"),
    ("for", "Scope bound"),
    ("but", "Exception to a default scope"),
    ("exactly", "Exact scope bound"),
    ("test", "Start a test block"),
    ("expect", "Block of expected outcomes"),
    ("suite", "Group tests for a predicate"),
    ("example", "Instance that should satisfy a predicate"),
    ("is", "Test expectation"),
    ("sat", "Expect an instance to exist"),
    ("unsat", "Expect no instance to exist"),
    ("theorem", "Expect the formula to hold in every instance"),
    ("open", "Import another module"),
    ("as", "Module alias"),
    ("option", "Set a solver option"),
    ("not", "Negation"),
    ("and", "Conjunction"),
    ("or", "Disjunction"),
    ("implies", "Implication"),
    ("iff", "Biconditional"),
    ("else", "Alternative branch of implies"),
    ("none", "The empty set"),
    ("univ", "The set of all atoms"),
    ("iden", "The identity relation"),
];

/// Look up a keyword's description.
pub fn keyword_description(keyword: &str) -> Option<&'static str> {
    FORGE_KEYWORDS
        .iter()
        .find(|(kw, _)| *kw == keyword)
        .map(|(_, desc)| *desc)
}
