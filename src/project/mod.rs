//! Loading Forge files from disk into an [`AnalysisHost`](crate::ide::AnalysisHost).

pub mod file_loader;
pub mod workspace_loader;

pub use file_loader::collect_file_paths;
pub use workspace_loader::{WorkspaceLoader, load_workspace};

// Re-export single-file loading so callers need only this module
pub use crate::syntax::{LoadError, load_and_parse, parse_with_result};
