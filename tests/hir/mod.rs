//! HIR layer tests
//!
//! Tests for symbol extraction:
//! - Declaration kinds, details and containers
//! - Documentation comment attachment
//! - Ranges and document order

mod tests_doc_comments;
mod tests_symbol_extraction;
