/*
[INPUT]:  YAML configuration file and MINDMEISTER_* environment variables
[OUTPUT]: Parsed CLI configuration and configured API clients
[POS]:    Configuration layer - credentials and connection setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use mindmeister_client::http::DEFAULT_BASE_URL;
use mindmeister_client::{ClientConfig, Credentials, MindMeisterClient};

/// Prefix of environment variables overriding file values
pub const ENV_PREFIX: &str = "MINDMEISTER";

/// Top-level configuration for the CLI
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Application API key from the MindMeister developer page
    pub api_key: String,
    /// Shared secret used to sign requests
    pub secret_key: String,
    /// Auth token, takes precedence over the token file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Where the token obtained by `callback` is kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            auth_token: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            token_file: None,
        }
    }

    /// Load configuration from a YAML file layered with environment overrides.
    ///
    /// A missing file is accepted when `required` is false, so credentials
    /// can come from the environment alone.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Yaml)
                    .required(required),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .with_context(|| format!("read config from {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("config must provide api_key and secret_key")?;
        config.validate()?;
        Ok(config)
    }

    /// Default location: `<config dir>/mindmeister/config.yaml`
    pub fn default_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.yaml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow!("api_key cannot be empty"));
        }
        if self.secret_key.trim().is_empty() {
            return Err(anyhow!("secret_key cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be positive"));
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }

    /// Build a client, authenticated with the configured token or `stored_token`.
    pub fn client(&self, stored_token: Option<&str>) -> Result<MindMeisterClient> {
        let mut credentials = Credentials::new(&self.api_key, &self.secret_key);
        if let Some(token) = self.auth_token.as_deref().or(stored_token) {
            credentials.set_auth_token(token);
        }
        MindMeisterClient::with_config(credentials, self.client_config())
            .context("build MindMeister client")
    }

    /// Token file from config, falling back to the per-user default
    pub fn token_path(&self) -> Result<PathBuf> {
        match &self.token_file {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join("token.json")),
        }
    }
}

fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine config directory"))?
        .join("mindmeister"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_secret() {
        let config = CliConfig::new("key", " ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configured_token_wins_over_stored() {
        let mut config = CliConfig::new("key", "secret");
        config.auth_token = Some("from-config".to_string());

        let client = config.client(Some("from-file")).unwrap();
        assert_eq!(client.auth_token(), Some("from-config"));
    }

    #[test]
    fn test_stored_token_used_when_not_configured() {
        let config = CliConfig::new("key", "secret");
        let client = config.client(Some("from-file")).unwrap();
        assert_eq!(client.auth_token(), Some("from-file"));

        let client = config.client(None).unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_yaml_roundtrip_skips_empty_fields() {
        let config = CliConfig::new("key", "secret");
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("auth_token"));

        let parsed: CliConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
