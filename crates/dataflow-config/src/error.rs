use dataflow_utils::loader::error::LoadingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Loading(#[from] LoadingError),
    #[error(transparent)]
    Yaml(#[from] serde_yml::Error),
    #[error("tick-period-ms must be greater than zero")]
    InvalidTickPeriod,
    #[error("Account has an empty email: {0:?}")]
    InvalidAccount(String),
}
