use dataflow_utils::loader::error::LoadingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("No file selected")]
    NoFileSelected,
    #[error("Refusing to save a download named {0:?}")]
    InvalidFileName(String),
    #[error(transparent)]
    Loading(#[from] LoadingError),
}
