use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOGIN_PATH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Where the guard sends unauthenticated visitors.
    pub login_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_path: String::from(DEFAULT_LOGIN_PATH),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.login_path.starts_with('/') {
            return Err(ConfigError::auth(format!(
                "auth.login_path must start with '/', got '{}'",
                self.login_path
            )));
        }

        Ok(())
    }
}
