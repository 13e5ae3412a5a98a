use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Invalid Path: {0}")]
    InvalidPath(PathBuf),
    #[error("Not a file: {0}")]
    NotAFile(PathBuf),
}
