use crate::download::error::DownloadError;
use dataflow_model::download::DownloadArtifact;
use dataflow_model::format::DataFormat;
use dataflow_model::upload::UploadedFile;
use dataflow_model::workflow::WorkflowState;
use dataflow_utils::loader::LoaderTrait;
use dataflow_utils::loader::file_system::FileSystemLoader;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

pub mod error;

const FALLBACK_EXTENSION: &str = "bin";

/// `<name without last extension>.<target extension>`, `bin` when no target was chosen.
#[must_use]
pub fn output_file_name(file: &UploadedFile, target: Option<DataFormat>) -> String {
    let extension = target.map_or(FALLBACK_EXTENSION, DataFormat::extension);
    format!("{}.{extension}", file.base_name())
}

/// Builds the download for the current state. The bytes are the uploaded bytes, only the name changes.
pub fn emit(state: &WorkflowState) -> Result<DownloadArtifact, DownloadError> {
    let file = state.selected_file.as_ref().ok_or(DownloadError::NoFileSelected)?;
    let file_name = output_file_name(file, state.target_format);
    tracing::info!(source = %file.name, %file_name, size = file.size, "emitting download");
    Ok(DownloadArtifact::new(file_name, file.content.clone()))
}

/// Where downloads end up.
pub trait DownloadSink {
    fn save(&self, artifact: &DownloadArtifact) -> impl Future<Output = Result<(), DownloadError>>;
}

/// Writes downloads into a directory.
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    loader: FileSystemLoader,
}

impl FileSystemSink {
    #[must_use]
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            loader: FileSystemLoader::new(output_dir),
        }
    }

    #[must_use]
    pub fn location(&self, artifact: &DownloadArtifact) -> PathBuf {
        self.loader.base_path().join(&artifact.file_name)
    }
}

impl DownloadSink for FileSystemSink {
    async fn save(&self, artifact: &DownloadArtifact) -> Result<(), DownloadError> {
        let name = artifact.file_name.as_str();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(DownloadError::InvalidFileName(artifact.file_name.clone()));
        }
        self.loader.store_file(name, &artifact.content).await?;
        tracing::info!(path = ?self.location(artifact), "download saved");
        Ok(())
    }
}

/// Keeps every saved download in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Mutex<Vec<DownloadArtifact>>,
}

impl MemorySink {
    #[must_use]
    pub fn saved(&self) -> Vec<DownloadArtifact> {
        self.saved.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl DownloadSink for MemorySink {
    async fn save(&self, artifact: &DownloadArtifact) -> Result<(), DownloadError> {
        self.saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(artifact.clone());
        Ok(())
    }
}
