use dotenvy::dotenv;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Connection settings for the targeting idea service.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub access_token: String,
    pub developer_token: Option<String>,
    pub client_customer_id: Option<String>,
    pub user_agent: String,
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Config {
            endpoint: require("IDEAS_ENDPOINT")?,
            access_token: require("IDEAS_ACCESS_TOKEN")?,
            developer_token: get("IDEAS_DEVELOPER_TOKEN"),
            client_customer_id: get("IDEAS_CLIENT_CUSTOMER_ID"),
            user_agent: get("IDEAS_USER_AGENT").unwrap_or_else(default_user_agent),
        })
    }
}

fn default_user_agent() -> String {
    format!("keyword-ideas/{}", env!("CARGO_PKG_VERSION"))
}
