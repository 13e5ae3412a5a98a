use crate::account::AccountConfig;
use crate::conversion::ConversionConfig;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, Debug, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ConfigV01 {
    /// # Accounts allowed to sign in
    /// Omit to use the built-in demo account. An empty list disables password sign-in.
    #[serde(default)]
    pub accounts: Option<Vec<AccountConfig>>,
    #[serde(default)]
    pub conversion: ConversionConfig,
}
