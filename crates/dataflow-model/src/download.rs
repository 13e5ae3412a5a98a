use serde::Serialize;
use std::sync::Arc;

pub const OCTET_STREAM: &str = "application/octet-stream";

/// What gets handed to the host's save mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub media_type: &'static str,
    #[serde(skip)]
    pub content: Arc<[u8]>,
}

impl DownloadArtifact {
    #[must_use]
    pub fn new(file_name: String, content: Arc<[u8]>) -> Self {
        Self {
            file_name,
            media_type: OCTET_STREAM,
            content,
        }
    }
}
