use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct AccountConfig {
    /// # Email used to sign in
    pub email: String,
    /// # Plain text password
    /// Compared verbatim, there is no hashing
    pub password: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            email: "administrador@test.com".to_owned(),
            password: "test123".to_owned(),
        }
    }
}

impl fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountConfig")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
