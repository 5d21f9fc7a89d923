use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::ide::AnalysisHost;
use crate::syntax::LoadError;

use super::file_loader;

/// Loads workspace files on demand
pub struct WorkspaceLoader;

impl WorkspaceLoader {
    pub fn new() -> Self {
        Self
    }

    /// Loads all Forge files under a directory into an AnalysisHost.
    ///
    /// Files are read and parsed in parallel, then added in path order.
    /// Every file that loads is added even when others fail; the failures
    /// come back together as [`LoadError::Multiple`].
    pub fn load_directory_into_host<P: AsRef<Path>>(
        &self,
        path: P,
        host: &mut AnalysisHost,
    ) -> Result<(), LoadError> {
        let paths = file_loader::collect_file_paths(path.as_ref())?;

        let results: Vec<_> = paths
            .into_par_iter()
            .map(|path| {
                let loaded = file_loader::load_and_parse(&path);
                (path, loaded)
            })
            .collect();

        let mut errors = Vec::new();
        for (path, loaded) in results {
            match loaded {
                Ok(file) => {
                    if file.has_errors() {
                        tracing::warn!(
                            path = %path.display(),
                            errors = file.errors().len(),
                            "file has syntax errors"
                        );
                    }
                    host.set_file(path, file);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load file");
                    errors.push((path, e));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(LoadError::Multiple(errors))
        }
    }

    /// Loads a single file into an AnalysisHost.
    pub fn load_file_into_host<P: Into<PathBuf>>(
        &self,
        path: P,
        host: &mut AnalysisHost,
    ) -> Result<(), LoadError> {
        let path = path.into();
        let file = file_loader::load_and_parse(&path)?;
        host.set_file(path, file);
        Ok(())
    }
}

impl Default for WorkspaceLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a fresh host from every Forge file under `dir`.
pub fn load_workspace(dir: impl AsRef<Path>) -> Result<AnalysisHost, LoadError> {
    let mut host = AnalysisHost::new();
    WorkspaceLoader::new().load_directory_into_host(dir, &mut host)?;
    Ok(host)
}
