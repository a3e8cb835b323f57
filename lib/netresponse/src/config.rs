//! Adapter configuration types.

use std::time::Duration;

/// Log level for call outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// No outcome events.
    Off,
    /// Log completed calls at debug level.
    Debug,
    /// Log completed calls at info level.
    #[default]
    Info,
}

/// Configuration for the network response adapter.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Upper bound on awaiting the transport. Elapsing yields a network error.
    pub timeout: Option<Duration>,
    /// Level used to log completed calls. Failures are always logged at warn.
    pub log_level: LogLevel,
    /// Whether an empty 2xx body decodes to `None` instead of going through
    /// the success converter.
    pub empty_body_as_none: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            log_level: LogLevel::Info,
            empty_body_as_none: true,
        }
    }
}

impl AdapterConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> AdapterConfigBuilder {
        AdapterConfigBuilder::default()
    }
}

/// Builder for [`AdapterConfig`].
#[derive(Debug, Clone, Default)]
pub struct AdapterConfigBuilder {
    timeout: Option<Duration>,
    log_level: Option<LogLevel>,
    empty_body_as_none: Option<bool>,
}

impl AdapterConfigBuilder {
    /// Set the transport timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the outcome log level.
    #[must_use]
    pub const fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set whether empty 2xx bodies decode to `None`.
    #[must_use]
    pub const fn empty_body_as_none(mut self, enabled: bool) -> Self {
        self.empty_body_as_none = Some(enabled);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AdapterConfig {
        let defaults = AdapterConfig::default();
        AdapterConfig {
            timeout: self.timeout.or(defaults.timeout),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            empty_body_as_none: self
                .empty_body_as_none
                .unwrap_or(defaults.empty_body_as_none),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn default_config() {
        let config = AdapterConfig::default();
        check!(config.timeout.is_none());
        check!(config.log_level == LogLevel::Info);
        check!(config.empty_body_as_none);
    }

    #[test]
    fn builder_overrides() {
        let config = AdapterConfig::builder()
            .timeout(Duration::from_secs(5))
            .log_level(LogLevel::Off)
            .empty_body_as_none(false)
            .build();

        check!(config.timeout == Some(Duration::from_secs(5)));
        check!(config.log_level == LogLevel::Off);
        check!(!config.empty_body_as_none);
    }

    #[test]
    fn builder_keeps_defaults() {
        let config = AdapterConfig::builder().log_level(LogLevel::Debug).build();
        check!(config.timeout.is_none());
        check!(config.log_level == LogLevel::Debug);
        check!(config.empty_body_as_none);
    }
}
