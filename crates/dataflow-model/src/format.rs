use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Data formats the wizard knows about.
///
/// The same set is used for uploads and for conversion targets. Nothing is ever
/// parsed, the format only decides which files are accepted and which extension
/// a download gets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum DataFormat {
    #[serde(rename = "CSV")]
    #[strum(serialize = "CSV")]
    Csv,
    #[serde(rename = "JSON")]
    #[strum(serialize = "JSON")]
    Json,
    Parquet,
    Avro,
}

impl DataFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
            DataFormat::Parquet => "parquet",
            DataFormat::Avro => "avro",
        }
    }

    #[must_use]
    pub fn media_types(self) -> &'static [&'static str] {
        match self {
            DataFormat::Csv => &["text/csv"],
            DataFormat::Json => &["application/json"],
            DataFormat::Parquet => &["application/vnd.apache.parquet", "application/x-parquet"],
            DataFormat::Avro => &["application/avro", "avro/binary"],
        }
    }

    /// Formats offered as conversion targets for a file of this format.
    #[must_use]
    pub fn conversion_targets(self) -> &'static [DataFormat] {
        match self {
            DataFormat::Json | DataFormat::Csv => &[DataFormat::Parquet, DataFormat::Avro],
            DataFormat::Parquet => &[DataFormat::Csv, DataFormat::Json, DataFormat::Avro],
            DataFormat::Avro => &[DataFormat::Csv, DataFormat::Json, DataFormat::Parquet],
        }
    }

    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::iter().find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Matches a declared media type, ignoring parameters such as `charset`.
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        Self::iter().find(|format| {
            format
                .media_types()
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(essence))
        })
    }

    /// Looks at the suffix after the last dot. Names without a dot never match.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        Self::from_extension(extension)
    }
}
