//! Foundation types for the Forge indexer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Stable per-snapshot file identifiers
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Byte offset to line/column conversion
//! - [`Position`], [`Span`] - Zero-based line/column positions for symbols
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod file_id;
mod line_index;
mod position;

pub use file_id::FileId;
pub use line_index::{LineCol, LineIndex};
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
