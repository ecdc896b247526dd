//! Gateway configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Default upper bound on command length, in UTF-16 code units.
pub const DEFAULT_MAX_COMMAND_LENGTH: usize = 1024;

/// Settings passed to a [`RemoteExecutionGateway`](crate::RemoteExecutionGateway)
/// at construction.
///
/// Missing fields fall back to their defaults, so the struct can be embedded
/// in a host application's configuration file.
///
/// # Examples
///
/// ```
/// use remote_console_gateway::GatewayConfig;
///
/// let config = GatewayConfig::from_json_str(r#"{ "max_command_length": 256 }"#).unwrap();
/// assert_eq!(config.max_command_length, 256);
///
/// let defaults = GatewayConfig::from_json_str("{}").unwrap();
/// assert_eq!(defaults.max_command_length, 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Longest command accepted, in UTF-16 code units
    pub max_command_length: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            max_command_length: DEFAULT_MAX_COMMAND_LENGTH,
        }
    }
}

impl GatewayConfig {
    /// Returns a copy with a different command length limit.
    pub fn with_max_command_length(mut self, max: usize) -> Self {
        self.max_command_length = max;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `max_command_length` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_command_length == 0 {
            return Err(ConfigError::Invalid(
                "max_command_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or unknown fields and
    /// `ConfigError::Invalid` if validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_is_1024() {
        assert_eq!(GatewayConfig::default().max_command_length, 1024);
        assert!(GatewayConfig::default().validate().is_ok());
    }

    #[test]
    fn builder_overrides_limit() {
        let config = GatewayConfig::default().with_max_command_length(8);
        assert_eq!(config.max_command_length, 8);
    }

    #[test]
    fn zero_limit_fails_validation() {
        let err = GatewayConfig::default()
            .with_max_command_length(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn json_parse_errors_are_reported() {
        let err = GatewayConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = GatewayConfig::from_json_str(r#"{ "max_len": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn json_zero_limit_is_invalid() {
        let err = GatewayConfig::from_json_str(r#"{ "max_command_length": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
