//! HTTP configuration types.
//!
//! `HttpConfig` carries the per-client timeout budgets and is consumed once
//! when the underlying `reqwest::Client` is built.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Default timeout applied to each of the three budgets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP configuration
///
/// The three budgets mirror the classic connect/read/write split. `reqwest`
/// has no per-write timeout, so the write budget is folded into the total
/// request deadline together with the other two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    /// Connection timeout
    #[serde(with = "duration_secs_serde")]
    pub connect_timeout: Duration,
    /// Read timeout
    #[serde(with = "duration_secs_serde")]
    pub read_timeout: Duration,
    /// Write timeout
    #[serde(with = "duration_secs_serde")]
    pub write_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
            write_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpConfig {
    /// Returns a builder for constructing `HttpConfig`
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::new()
    }

    /// Total deadline for a single request: all three budgets combined.
    pub fn total_timeout(&self) -> Duration {
        self.connect_timeout + self.read_timeout + self.write_timeout
    }
}

/// Builder for `HttpConfig`
///
/// Each budget must be positive; `build` rejects zero durations.
#[derive(Debug, Clone, Default)]
pub struct HttpConfigBuilder {
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
}

impl HttpConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Set the write timeout
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<HttpConfig, LlmError> {
        let config = HttpConfig {
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_TIMEOUT),
            read_timeout: self.read_timeout.unwrap_or(DEFAULT_TIMEOUT),
            write_timeout: self.write_timeout.unwrap_or(DEFAULT_TIMEOUT),
        };

        for (name, value) in [
            ("Connect timeout", config.connect_timeout),
            ("Read timeout", config.read_timeout),
            ("Write timeout", config.write_timeout),
        ] {
            if value.is_zero() {
                return Err(LlmError::ConfigurationError(format!(
                    "{name} must be greater than 0"
                )));
            }
        }

        Ok(config)
    }
}

// Durations travel as whole seconds on the wire.
mod duration_secs_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sixty_seconds() {
        let config = HttpConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
        assert_eq!(config.read_timeout, Duration::from_secs(60));
        assert_eq!(config.write_timeout, Duration::from_secs(60));
        assert_eq!(config.total_timeout(), Duration::from_secs(180));
    }

    #[test]
    fn builder_rejects_zero_timeout() {
        let result = HttpConfig::builder()
            .read_timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(LlmError::ConfigurationError(_))));
    }

    #[test]
    fn builder_overrides_selected_budgets() {
        let config = HttpConfig::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.read_timeout, DEFAULT_TIMEOUT);
    }
}
