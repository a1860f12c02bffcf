//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("identity.nickname is required")]
    MissingNickname,
    #[error("identity.username is required")]
    MissingUsername,
    #[error("identity.{field} must not contain spaces, got '{value}'")]
    WhitespaceInIdentity { field: &'static str, value: String },
    #[error("at least one [[servers]] entry is required")]
    NoServers,
    #[error("servers[{0}].host is required")]
    MissingServerHost(usize),
    #[error("servers[{0}].port must be non-zero")]
    InvalidServerPort(usize),
    #[error("driver.poll_interval_ms must be greater than zero")]
    InvalidPollInterval,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Identity
    let identity = &config.identity;
    if identity.nickname.is_empty() {
        errors.push(ValidationError::MissingNickname);
    } else if identity.nickname.contains(' ') {
        errors.push(ValidationError::WhitespaceInIdentity {
            field: "nickname",
            value: identity.nickname.clone(),
        });
    }
    if identity.username.is_empty() {
        errors.push(ValidationError::MissingUsername);
    } else if identity.username.contains(' ') {
        errors.push(ValidationError::WhitespaceInIdentity {
            field: "username",
            value: identity.username.clone(),
        });
    }

    // Server pool
    if config.servers.is_empty() {
        errors.push(ValidationError::NoServers);
    }
    for (i, server) in config.servers.iter().enumerate() {
        if server.host.is_empty() {
            errors.push(ValidationError::MissingServerHost(i));
        }
        if server.port == 0 {
            errors.push(ValidationError::InvalidServerPort(i));
        }
    }

    if config.driver.poll_interval_ms == 0 {
        errors.push(ValidationError::InvalidPollInterval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_valid_config() -> String {
        r#"
[identity]
nickname = "bot"
username = "bot"

[[servers]]
host = "silc.example.com"
"#
        .to_string()
    }

    #[test]
    fn test_valid_config_passes() {
        let config: Config = toml::from_str(&minimal_valid_config()).unwrap();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_nickname_fails() {
        let toml = r#"
[identity]
nickname = ""
username = "bot"

[[servers]]
host = "silc.example.com"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ValidationError::MissingNickname)));
    }

    #[test]
    fn test_spaced_username_fails() {
        let toml = r#"
[identity]
nickname = "bot"
username = "two words"

[[servers]]
host = "silc.example.com"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::WhitespaceInIdentity { field: "username", .. }
        )));
    }

    #[test]
    fn test_all_problems_reported_together() {
        let toml = r#"
[identity]
nickname = ""
username = ""

[[servers]]
host = ""
port = 0

[driver]
poll_interval_ms = 0
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidServerPort(0))));
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidPollInterval)));
    }
}
