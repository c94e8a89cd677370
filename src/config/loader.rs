//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    resolve_config(Some(path), None)
}

/// Build the effective configuration: the file at `path` (or defaults),
/// then the `port` override, validated as a whole.
pub fn resolve_config(
    path: Option<&Path>,
    port: Option<u16>,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(port) = port {
        config.listener.port = port;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let file_name = format!("user-service-{}-{}.toml", name, std::process::id());
        let path = std::env::temp_dir().join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp("valid", "[listener]\nport = 4000\n");
        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.port, 4000);
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_port_override_wins_over_file() {
        let path = write_temp("override", "[listener]\nport = 4000\n");
        let config = resolve_config(Some(&path), Some(5000)).unwrap();
        assert_eq!(config.listener.port, 5000);
        fs::remove_file(path).unwrap_or_default();

        let config = resolve_config(None, None).unwrap();
        assert_eq!(config.listener.port, 3000);
    }

    #[test]
    fn test_port_override_is_validated() {
        let path = write_temp(
            "collision",
            "[observability]\nmetrics_enabled = true\nmetrics_address = \"127.0.0.1:9090\"\n",
        );
        assert!(load_config(&path).is_ok());

        let result = resolve_config(Some(&path), Some(9090));
        fs::remove_file(path).unwrap_or_default();
        let Err(ConfigError::Validation(errors)) = result else {
            panic!("expected validation failure, got {result:?}");
        };
        assert_eq!(
            errors,
            vec![ValidationError::MetricsCollision("127.0.0.1:9090".into())]
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let path = write_temp("parse", "[listener\nport = ");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_validation_error_message() {
        let path = write_temp(
            "invalid",
            "[timeouts]\nrequest_secs = 0\n[limits]\nmax_body_size = 0\n",
        );
        let err = load_config(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: timeouts.request_secs must be greater than zero, \
             limits.max_body_size must be greater than zero"
        );
        fs::remove_file(path).unwrap_or_default();
    }
}
