use crate::constants::{API_KEY_VAR, DEFAULT_BATCH_SIZE, DEFAULT_LEDGER_PATH};
use crate::error::{Result, ShrinkError};
use std::env;
use std::path::PathBuf;

/// Run configuration handed to the orchestrator.
///
/// Everything the run depends on (credential, batch size, ledger location)
/// travels in this struct rather than process-wide state, so tests can
/// inject fake credentials and small batch sizes.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub batch_size: usize,
    pub ledger_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            batch_size: DEFAULT_BATCH_SIZE,
            ledger_path: PathBuf::from(DEFAULT_LEDGER_PATH),
        }
    }
}

impl Config {
    /// Builds a configuration from the process environment, loading a local
    /// `.env` file first if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_key: env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty()),
            ..Self::default()
        }
    }

    /// Returns the credential, or `MissingApiKey` if none is configured.
    /// This is the single gate every network-bound operation passes through.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ShrinkError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.ledger_path, PathBuf::from(DEFAULT_LEDGER_PATH));
    }

    #[test]
    fn test_require_api_key_present() {
        let config = Config {
            api_key: Some("abc123".to_string()),
            ..Config::default()
        };
        assert_eq!(config.require_api_key().unwrap(), "abc123");
    }

    #[test]
    fn test_require_api_key_missing() {
        let config = Config::default();
        assert!(matches!(
            config.require_api_key(),
            Err(ShrinkError::MissingApiKey)
        ));
    }

    #[test]
    fn test_from_env_reads_key() {
        env::set_var(API_KEY_VAR, "from-env");
        let config = Config::from_env();
        env::remove_var(API_KEY_VAR);

        assert_eq!(config.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_require_api_key_empty_string() {
        let config = Config {
            api_key: Some(String::new()),
            ..Config::default()
        };
        assert!(matches!(
            config.require_api_key(),
            Err(ShrinkError::MissingApiKey)
        ));
    }
}
