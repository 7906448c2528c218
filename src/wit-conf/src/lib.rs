use std::env;

use thiserror::Error;

/// Name of the environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "WIT_AI_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("WIT_AI_TOKEN environment variable is not set")]
    MissingToken,
}

/// Session configuration for talking to the service: the bearer token, read
/// once at startup. Built in `main` and passed into the client explicitly.
#[derive(Debug, Clone)]
pub struct WitConfig {
    pub token: String,
}

impl WitConfig {
    /// Loads the configuration from the process environment. Fails when the
    /// token variable is absent, before any request can be attempted.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env_var(TOKEN_ENV_VAR)
    }

    fn from_env_var(var: &str) -> Result<Self, ConfigError> {
        let token = env::var(var).map_err(|_| ConfigError::MissingToken)?;
        tracing::debug!("loaded API token from environment");
        Ok(WitConfig { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_an_error() {
        let config = WitConfig::from_env_var("WIT_AI_TOKEN_THAT_IS_NEVER_SET");
        assert!(matches!(config, Err(ConfigError::MissingToken)));
    }

    #[test]
    fn test_token_is_read_from_the_environment() {
        unsafe { env::set_var("WIT_AI_TOKEN_FOR_CONFIG_TEST", "abc123") };
        let config = WitConfig::from_env_var("WIT_AI_TOKEN_FOR_CONFIG_TEST").unwrap();
        assert_eq!(config.token, "abc123");
    }
}
