use crate::upload::error::UploadError;
use dataflow_model::format::DataFormat;
use dataflow_model::upload::{UploadCandidate, UploadedFile};
use dataflow_utils::loader::file::File;

pub mod error;

/// Accepts a candidate whose suffix or declared media type is one of the known data formats.
pub fn accept(candidate: UploadCandidate) -> Result<UploadedFile, UploadError> {
    let Some(format) = candidate.detect_format() else {
        tracing::warn!(
            name = %candidate.name,
            media_type = ?candidate.media_type,
            "rejected upload with unsupported type"
        );
        return Err(UploadError::UnsupportedFileType(candidate.name));
    };
    tracing::info!(
        name = %candidate.name,
        %format,
        size = candidate.size,
        checksum = candidate.checksum.as_deref(),
        "file accepted"
    );
    Ok(UploadedFile::new(candidate, format))
}

/// Turns a loaded file into a candidate. The media type is inferred from the name,
/// the way a browser fills in `File.type`. Hash and modification time are carried over.
#[must_use]
pub fn candidate_from_file(file: File) -> UploadCandidate {
    let File { metadata, content } = file;
    let media_type = DataFormat::from_file_name(&metadata.name)
        .and_then(|format| format.media_types().first())
        .map(|media_type| (*media_type).to_owned());
    UploadCandidate::new(metadata.name, media_type, content)
        .with_source(metadata.hash.map(|hash| hash.hash), metadata.last_modified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataflow_test_helpers::candidate;
    use dataflow_utils::loader::LoaderTrait;
    use dataflow_utils::loader::file::FileHash;
    use dataflow_utils::loader::file_system::FileSystemLoader;

    #[test]
    fn test_accepts_known_suffixes_case_insensitive() {
        for (name, format) in [
            ("a.json", DataFormat::Json),
            ("a.CSV", DataFormat::Csv),
            ("a.Parquet", DataFormat::Parquet),
            ("a.avro", DataFormat::Avro),
        ] {
            let file = accept(candidate(name, b"x")).unwrap();
            assert_eq!(file.format, format);
            assert_eq!(file.name, name);
        }
    }

    #[test]
    fn test_accepts_declared_media_type() {
        let mut upload = candidate("export", b"{}");
        upload.media_type = Some("application/json".to_owned());
        assert_eq!(accept(upload).unwrap().format, DataFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_types() {
        for name in ["data.txt", "data", "data.xlsx", "csv", "data.json.zip"] {
            let error = accept(candidate(name, b"x")).unwrap_err();
            assert_eq!(error, UploadError::UnsupportedFileType(name.to_owned()));
        }
    }

    #[tokio::test]
    async fn test_candidate_from_loaded_file() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileSystemLoader::new(dir.path().to_path_buf());
        loader.store_file("report.csv", b"a,b\n").await.unwrap();
        loader.store_file("notes.txt", b"hi").await.unwrap();

        let upload = candidate_from_file(loader.load_file("report.csv").await.unwrap());
        assert_eq!(upload.name, "report.csv");
        assert_eq!(upload.media_type.as_deref(), Some("text/csv"));
        assert_eq!(upload.size, 4);
        assert_eq!(upload.checksum, Some(FileHash::xxh3(b"a,b\n").hash));
        assert!(upload.last_modified.is_some());

        let file = accept(upload).unwrap();
        assert_eq!(file.checksum, Some(FileHash::xxh3(b"a,b\n").hash));

        let upload = candidate_from_file(loader.load_file("notes.txt").await.unwrap());
        assert_eq!(upload.media_type, None);
    }
}
