// ABOUTME: Environment-driven server configuration
// ABOUTME: All keys have defaults except the optional email provider pair

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub db_path: Option<PathBuf>,
    pub resend_api_key: Option<String>,
    pub sender_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port_str.parse::<u16>()?;
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let db_path = env::var("PANTRY_DB_PATH").ok().map(PathBuf::from);

        let resend_api_key = env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty());
        let sender_email =
            env::var("SENDER_EMAIL").unwrap_or_else(|_| "onboarding@resend.dev".to_string());

        Ok(Config {
            port,
            cors_origins,
            db_path,
            resend_api_key,
            sender_email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        // Env-dependent keys are left untouched; only defaults are asserted.
        let config = Config::from_env().unwrap();
        assert!(config.port > 0);
        assert!(!config.sender_email.is_empty());
    }

}
