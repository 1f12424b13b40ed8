use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

/// Key lookup over process configuration. Implementations must be safe to
/// read from many concurrent calls.
pub trait ConfigSource: Send + Sync {
    /// Return the value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a key that must be present and non-empty.
    fn require(&self, key: &str) -> Result<String, ConfigError> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::MissingConfig(key.to_string())),
        }
    }
}

/// Reads the ambient process environment on every lookup, so changes made
/// after construction are visible to later calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory configuration. Useful in tests and for deployments that
/// resolve everything up front.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Replaces any existing value for the same key. Returns
    /// Self for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for StaticConfig {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl ConfigSource for StaticConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_missing_and_empty_values() {
        let config = StaticConfig::new().with("PRESENT", "value").with("EMPTY", "");

        assert_eq!(config.require("PRESENT").unwrap(), "value");
        assert!(matches!(
            config.require("EMPTY"),
            Err(ConfigError::MissingConfig(key)) if key == "EMPTY"
        ));
        assert!(matches!(
            config.require("ABSENT"),
            Err(ConfigError::MissingConfig(key)) if key == "ABSENT"
        ));
    }

    #[test]
    fn missing_config_message_names_the_key() {
        let err = StaticConfig::new().require("AGENT_ID").unwrap_err();
        assert_eq!(err.to_string(), "Missing configuration: AGENT_ID");
    }

    #[test]
    fn env_config_reads_ambient_state_at_lookup_time() {
        let key = "AGENT_EVAL_CONFIG_TEST_KEY";
        // This key is private to this test, so the set/remove pair cannot
        // race with other tests in the binary.
        unsafe { std::env::set_var(key, "from-env") };
        assert_eq!(EnvConfig.get(key).as_deref(), Some("from-env"));
        assert_eq!(EnvConfig.require(key).unwrap(), "from-env");

        unsafe { std::env::remove_var(key) };
        assert_eq!(EnvConfig.get(key), None);
        assert!(EnvConfig.require(key).is_err());
    }
}
