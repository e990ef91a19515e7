//! Environment-driven configuration for the CLI.

use std::env;
use std::path::PathBuf;

use crate::error::CliError;

const ENV_TOKEN: &str = "NOTEDOWN_TOKEN";
const ENV_ENDPOINT: &str = "NOTEDOWN_ENDPOINT";
const ENV_DATA_DIR: &str = "NOTEDOWN_DATA_DIR";

/// Resolved settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Access token for the note service
    pub token: String,
    /// Note service API endpoint
    pub endpoint: String,
    /// Root directory for the note cache and sync-state marker
    pub data_dir: PathBuf,
}

impl ExportConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, CliError> {
        parse_config(|key| env::var(key).ok())
    }

    /// Directory holding cached note records.
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir.join("cache")
    }

    /// Path of the sync-state marker file.
    #[must_use]
    pub fn sync_state_path(&self) -> PathBuf {
        self.data_dir.join("sync-state")
    }
}

fn parse_config(get: impl Fn(&str) -> Option<String>) -> Result<ExportConfig, CliError> {
    let token = require(&get, ENV_TOKEN)?;
    let endpoint = require(&get, ENV_ENDPOINT)?;
    let data_dir = get(ENV_DATA_DIR)
        .filter(|value| !value.trim().is_empty())
        .map_or_else(default_data_dir, PathBuf::from);

    Ok(ExportConfig {
        token,
        endpoint,
        data_dir,
    })
}

fn require(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, CliError> {
    get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| CliError::Config(format!("{key} is not set")))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notedown")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(candidate, _)| *candidate == key)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn parse_config_requires_token_and_endpoint() {
        let error = parse_config(env(&[])).unwrap_err();
        assert!(error.to_string().contains(ENV_TOKEN));

        let error = parse_config(env(&[(ENV_TOKEN, "secret")])).unwrap_err();
        assert!(error.to_string().contains(ENV_ENDPOINT));

        let error = parse_config(env(&[(ENV_TOKEN, "  "), (ENV_ENDPOINT, "x")])).unwrap_err();
        assert!(error.to_string().contains(ENV_TOKEN));
    }

    #[test]
    fn parse_config_uses_explicit_data_dir() {
        let config = parse_config(env(&[
            (ENV_TOKEN, "secret"),
            (ENV_ENDPOINT, "https://notes.example.com"),
            (ENV_DATA_DIR, "/tmp/notedown-test"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/notedown-test"));
        assert_eq!(config.cache_dir(), PathBuf::from("/tmp/notedown-test/cache"));
        assert_eq!(
            config.sync_state_path(),
            PathBuf::from("/tmp/notedown-test/sync-state")
        );
    }

    #[test]
    fn parse_config_falls_back_to_default_data_dir() {
        let config = parse_config(env(&[
            (ENV_TOKEN, "secret"),
            (ENV_ENDPOINT, "https://notes.example.com"),
        ]))
        .unwrap();

        assert!(config.data_dir.ends_with("notedown"));
    }
}
