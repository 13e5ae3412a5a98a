use crate::auth::error::AuthError;
use crate::download::error::DownloadError;
use crate::upload::error::UploadError;
use crate::workflow::error::WorkflowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Sign in first")]
    NotAuthenticated,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
    #[error(transparent)]
    Download(#[from] DownloadError),
}
