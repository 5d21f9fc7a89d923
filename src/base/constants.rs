//! Domain constants.

/// File extension of Forge source files.
pub const FORGE_EXT: &str = "frg";

/// Language identifier used for fenced code blocks in hover markdown.
pub const LANGUAGE_ID: &str = "forge";
