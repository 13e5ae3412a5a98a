use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CommandError {
    #[error("Commands start with '/', try /help")]
    NotACommand,
    #[error("Unknown command /{0}, try /help")]
    Unknown(String),
    #[error("Usage: {usage}")]
    MissingArgument { command: &'static str, usage: &'static str },
    #[error("Unknown format {0}, expected one of csv, json, parquet, avro")]
    InvalidFormat(String),
    #[error("Unknown section {0}, expected one of dashboard, upload, files")]
    InvalidSection(String),
}

impl CommandError {
    pub(crate) fn usage(command: &'static str, usage: &'static str) -> Self {
        Self::MissingArgument { command, usage }
    }
}
