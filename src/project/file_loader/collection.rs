//! Discovery of Forge files on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::base::constants::FORGE_EXT;
use crate::syntax::LoadError;

use super::get_extension;

/// Recursively collect all `.frg` files under `dir`, sorted by path.
///
/// Symbolic links are not followed.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() && get_extension(entry.path()) == Some(FORGE_EXT) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    tracing::debug!(dir = %dir.display(), files = paths.len(), "collected forge files");
    Ok(paths)
}
