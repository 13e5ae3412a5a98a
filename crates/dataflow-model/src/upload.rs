use crate::format::DataFormat;
use crate::size::format_bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// A file offered by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub name: String,
    pub media_type: Option<String>,
    pub size: u64,
    /// Hex digest of the content, set when the file came through a loader.
    pub checksum: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub content: Vec<u8>,
}

impl UploadCandidate {
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: Option<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type,
            size: content.len() as u64,
            checksum: None,
            last_modified: None,
            content,
        }
    }

    #[must_use]
    pub fn with_source(mut self, checksum: Option<String>, last_modified: Option<DateTime<Utc>>) -> Self {
        self.checksum = checksum;
        self.last_modified = last_modified;
        self
    }

    /// The file name suffix wins over the declared media type.
    #[must_use]
    pub fn detect_format(&self) -> Option<DataFormat> {
        DataFormat::from_file_name(&self.name)
            .or_else(|| self.media_type.as_deref().and_then(DataFormat::from_media_type))
    }
}

/// An accepted upload. The content is shared so workflow snapshots stay cheap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    pub name: String,
    pub media_type: Option<String>,
    pub size: u64,
    pub format: DataFormat,
    pub checksum: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub content: Arc<[u8]>,
}

impl UploadedFile {
    #[must_use]
    pub fn new(candidate: UploadCandidate, format: DataFormat) -> Self {
        let UploadCandidate {
            name,
            media_type,
            size,
            checksum,
            last_modified,
            content,
        } = candidate;
        Self {
            name,
            media_type,
            size,
            format,
            checksum,
            last_modified,
            content: content.into(),
        }
    }

    /// Name without its last extension segment. A name without a dot is returned unchanged.
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.name.rsplit_once('.').map_or(self.name.as_str(), |(base, _)| base)
    }

    #[must_use]
    pub fn display_size(&self) -> String {
        format_bytes(self.size, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploaded(name: &str) -> UploadedFile {
        UploadedFile::new(UploadCandidate::new(name, None, b"a,b\n1,2\n".to_vec()), DataFormat::Csv)
    }

    #[test]
    fn test_detect_format() {
        let candidate = UploadCandidate::new("data", Some("application/json".to_owned()), vec![]);
        assert_eq!(candidate.detect_format(), Some(DataFormat::Json));

        let candidate = UploadCandidate::new("data.avro", Some("text/csv".to_owned()), vec![]);
        assert_eq!(candidate.detect_format(), Some(DataFormat::Avro));

        let candidate = UploadCandidate::new("data.txt", Some("text/plain".to_owned()), vec![]);
        assert_eq!(candidate.detect_format(), None);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(uploaded("report.csv").base_name(), "report");
        assert_eq!(uploaded("report.final.csv").base_name(), "report.final");
        assert_eq!(uploaded("report").base_name(), "report");
        assert_eq!(uploaded(".csv").base_name(), "");
    }

    #[test]
    fn test_size_is_taken_from_content() {
        let file = uploaded("report.csv");
        assert_eq!(file.size, 8);
        assert_eq!(file.display_size(), "8 Bytes");
        assert_eq!(&*file.content, b"a,b\n1,2\n");
        assert_eq!(file.checksum, None);
    }

    #[test]
    fn test_source_details_are_kept() {
        let modified = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let candidate = UploadCandidate::new("report.csv", None, b"a\n".to_vec())
            .with_source(Some("00ff".to_owned()), Some(modified));
        let file = UploadedFile::new(candidate, DataFormat::Csv);
        assert_eq!(file.checksum.as_deref(), Some("00ff"));
        assert_eq!(file.last_modified, Some(modified));
    }
}
