//! Logging configuration

use serde::Deserialize;

/// How the binary initialises `tracing-subscriber`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), super::ValidationError> {
        if self.filter.trim().is_empty() {
            return Err(super::ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.filter, "info");
        assert!(!logging.json);
        assert!(logging.validate().is_ok());
    }

    #[test]
    fn test_logging_deserialization_fills_defaults() {
        let logging: LoggingConfig = serde_json::from_str(r#"{ "json": true }"#).unwrap();
        assert_eq!(logging.filter, "info");
        assert!(logging.json);
    }

    #[test]
    fn test_blank_filter_rejected() {
        let logging = LoggingConfig {
            filter: "  ".to_string(),
            json: false,
        };
        assert!(logging.validate().is_err());
    }
}
