//! IDE layer tests
//!
//! Editor features over an `AnalysisHost`:
//! - Hover content
//! - Go to definition
//! - Document and workspace symbols
//! - Completion

mod tests_completion;
mod tests_goto;
mod tests_hover;
mod tests_symbols;
