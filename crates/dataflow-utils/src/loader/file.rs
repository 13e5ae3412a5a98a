use chrono::{DateTime, Utc};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    /// Last segment of the loaded path.
    pub name: String,
    pub size: u64,
    pub last_modified: Option<DateTime<Utc>>,
    pub hash: Option<FileHash>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub metadata: FileMetadata,
    pub content: Vec<u8>,
}

impl File {
    pub(crate) fn new(metadata: FileMetadata, content: Vec<u8>) -> Self {
        File { metadata, content }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHash {
    pub hash: String,
    pub algorithm: Cow<'static, str>,
}

impl FileHash {
    #[must_use]
    pub fn xxh3(content: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_64(content);
        Self {
            hash: hex::encode(hash.to_le_bytes()),
            algorithm: "xxh3_64".into(),
        }
    }
}
