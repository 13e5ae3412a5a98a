use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please upload a valid JSON, CSV, Parquet, or Avro file.")]
    UnsupportedFileType(String),
}
