use crate::account::AccountConfig;
use crate::conversion::ConversionConfig;
use crate::error::ConfigError;
use crate::v01::config::ConfigV01;
use dataflow_utils::loader::LoaderTrait;
use schemars::JsonSchema;
use serde::Deserialize;
use std::fmt::Debug;
use std::path::Path;

pub mod account;
pub mod conversion;
pub mod error;
pub mod v01;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { dataflow: ConfigV01 },
}

#[derive(Clone, Debug)]
pub struct DataflowConfig {
    pub accounts: Vec<AccountConfig>,
    pub conversion: ConversionConfig,
}

impl Default for DataflowConfig {
    fn default() -> Self {
        Self {
            accounts: vec![AccountConfig::default()],
            conversion: ConversionConfig::default(),
        }
    }
}

impl From<ConfigV01> for DataflowConfig {
    fn from(value: ConfigV01) -> Self {
        Self {
            accounts: value.accounts.unwrap_or_else(|| vec![AccountConfig::default()]),
            conversion: value.conversion,
        }
    }
}

impl DataflowConfig {
    #[must_use]
    pub fn accounts(&self) -> &[AccountConfig] {
        &self.accounts
    }

    #[must_use]
    pub fn conversion(&self) -> &ConversionConfig {
        &self.conversion
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.conversion.tick_period_ms == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }
        if let Some(account) = self.accounts.iter().find(|account| account.email.trim().is_empty()) {
            return Err(ConfigError::InvalidAccount(account.email.clone()));
        }
        Ok(())
    }
}

pub fn parse(content: &[u8]) -> Result<DataflowConfig, ConfigError> {
    let VersionConfig::V01 { dataflow } = serde_yml::from_slice::<VersionConfig>(content)?;
    let config: DataflowConfig = dataflow.into();
    config.validate()?;
    Ok(config)
}

pub async fn load<L: LoaderTrait, P: AsRef<Path> + Debug>(loader: &L, path: P) -> Result<DataflowConfig, ConfigError> {
    tracing::debug!(?path, "Loading config");
    let file = loader.load_file(path).await?;
    parse(&file.content)
}
