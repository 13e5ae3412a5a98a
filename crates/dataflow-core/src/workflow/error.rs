use thiserror::Error;
use tokio::runtime::TryCurrentError;
use tokio::sync::watch::error::RecvError;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("No file selected")]
    NoFileSelected,
    #[error("Conversion timer needs a tokio runtime")]
    NoRuntime(#[from] TryCurrentError),
    #[error("Workflow state channel closed")]
    Closed(#[from] RecvError),
}
