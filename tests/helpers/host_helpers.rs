//! Helpers for setting up analysis hosts.

use forge_index::base::FileId;
use forge_index::ide::AnalysisHost;

/// Creates an AnalysisHost with a single Forge file.
pub fn analysis_from_source(source: &str) -> (AnalysisHost, FileId) {
    analysis_from_named_source(source, "test.frg")
}

/// Creates an AnalysisHost with a single file at `filename`.
pub fn analysis_from_named_source(source: &str, filename: &str) -> (AnalysisHost, FileId) {
    let mut host = AnalysisHost::new();
    let errors = host.set_file_content(filename, source);
    assert!(
        errors.is_empty(),
        "Parse errors in '{}': {:?}",
        filename,
        errors
    );

    let file_id = {
        let analysis = host.analysis();
        analysis
            .get_file_id(filename)
            .expect("File should be in the host after set_file_content")
    };

    (host, file_id)
}

/// Creates an AnalysisHost with multiple files.
pub fn analysis_from_sources(files: &[(&str, &str)]) -> AnalysisHost {
    let mut host = AnalysisHost::new();
    for (filename, source) in files {
        let errors = host.set_file_content(*filename, source);
        assert!(errors.is_empty(), "Parse errors in '{}': {:?}", filename, errors);
    }
    host
}
