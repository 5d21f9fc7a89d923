//! Extraction options

/// Which comments count as documentation for the declaration below them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DocCommentPolicy {
    /// Only `/** ... */` blocks
    #[default]
    Strict,
    /// Any `/* ... */` block
    BlockComments,
    /// Blocks plus runs of `//` or `--` line comments
    AnyComment,
}

/// Options for symbol extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractOptions {
    /// Comment heuristic used for documentation lookup
    pub doc_comments: DocCommentPolicy,
}

impl ExtractOptions {
    pub fn with_doc_comments(mut self, policy: DocCommentPolicy) -> Self {
        self.doc_comments = policy;
        self
    }
}
