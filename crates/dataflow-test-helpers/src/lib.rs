use dataflow_model::upload::UploadCandidate;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_CSV: &[u8] = b"id,name,score\n1,Ada,97\n2,Grace,88\n";
pub const SAMPLE_JSON: &[u8] = br#"[{"id":1,"name":"Ada"},{"id":2,"name":"Grace"}]"#;

/// A candidate without a declared media type.
#[must_use]
pub fn candidate(name: &str, content: &[u8]) -> UploadCandidate {
    UploadCandidate::new(name, None, content.to_vec())
}

#[must_use]
pub fn csv_candidate(name: &str) -> UploadCandidate {
    UploadCandidate::new(name, Some("text/csv".to_owned()), SAMPLE_CSV.to_vec())
}

/// Temporary directory with an input folder holding sample uploads and an empty output folder.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("input")).expect("failed to create input dir");
        std::fs::create_dir(dir.path().join("output")).expect("failed to create output dir");
        Self { dir }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `input/<name>` and returns the full path.
    #[must_use]
    pub fn input(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join("input").join(name);
        std::fs::write(&path, content).expect("failed to write input file");
        path
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    #[must_use]
    pub fn output(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.output_dir().join(name)).expect("failed to read output file")
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
