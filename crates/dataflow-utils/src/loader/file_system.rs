use crate::loader::LoaderTrait;
use crate::loader::error::LoadingError;
use crate::loader::file::{File, FileHash, FileMetadata};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn sub_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.base_path.clone();
        }
        self.base_path.join(path)
    }
}

impl LoaderTrait for FileSystemLoader {
    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "Loading file");
        let mut metadata = metadata_for(&path).await?;
        let data = fs::read(&path).await?;
        metadata.hash = Some(FileHash::xxh3(&data));
        Ok(File::new(metadata, data))
    }

    async fn store_file<P: AsRef<Path>>(&self, path: P, content: &[u8]) -> Result<(), LoadingError> {
        let path = self.sub_path(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        tracing::trace!(?path, size = content.len(), "Storing file");
        fs::write(&path, content).await?;
        Ok(())
    }
}

async fn metadata_for(path: &Path) -> Result<FileMetadata, LoadingError> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| LoadingError::InvalidPath(path.to_path_buf()))?;
    let metadata = fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(LoadingError::NotAFile(path.to_path_buf()));
    }
    let last_modified = metadata.modified().ok().map(DateTime::<Utc>::from);
    Ok(FileMetadata {
        name,
        size: metadata.len(),
        last_modified,
        hash: None,
    })
}
