//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::defaults::{default_poll_interval_ms, default_realname};
use super::servers::ServerEntry;
use super::validation::ValidationError;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Bridge configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Who the bridge presents itself as on the SILC network.
    pub identity: IdentityConfig,
    /// SILC servers to try, in order.
    #[serde(default)]
    pub servers: Vec<ServerEntry>,
    /// Poll loop settings.
    #[serde(default)]
    pub driver: DriverConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        super::validation::validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Identity configuration.
///
/// `username` doubles as the IRC-side name the bot framework knows itself
/// by: private messages are addressed to it and the emulated welcome
/// numerics target it.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    pub nickname: String,
    pub username: String,
    #[serde(default = "default_realname")]
    pub realname: String,
}

/// Poll loop configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    /// Milliseconds between ticks (default: 200).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl DriverConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ========================================================================
    // DriverConfig tests
    // ========================================================================

    #[test]
    fn driver_default_values() {
        let config = DriverConfig::default();
        assert_eq!(config.poll_interval_ms, 200);
        assert_eq!(config.poll_interval(), Duration::from_millis(200));
    }

    // ========================================================================
    // Parsing tests
    // ========================================================================

    #[test]
    fn minimal_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[identity]
nickname = "bot"
username = "bot"

[[servers]]
host = "silc.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.identity.realname, "SILC bridge");
        assert_eq!(config.servers.len(), 1);
        assert_eq!(config.servers[0].port, 706);
        assert_eq!(config.driver.poll_interval_ms, 200);
    }

    #[test]
    fn missing_identity_is_a_parse_error() {
        let result: Result<Config, _> = toml::from_str("[driver]\npoll_interval_ms = 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[identity]
nickname = "bot"
username = "ident"
realname = "Bridge Bot"

[[servers]]
host = "a.example.com"
port = 7060

[driver]
poll_interval_ms = 50
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.identity.username, "ident");
        assert_eq!(config.servers[0].port, 7060);
        assert_eq!(config.driver.poll_interval_ms, 50);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Config::load("/nonexistent/path/bridge.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_validated_rejects_empty_server_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[identity]\nnickname = \"bot\"\nusername = \"bot\"\n").unwrap();

        let err = Config::load_validated(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref errors) if !errors.is_empty()));
    }
}
