//! Settings held in a map.

use std::collections::HashMap;

use crate::config::GatewayConfig;
use crate::ports::SettingsProvider;

/// `SettingsProvider` over a fixed set of key/value pairs.
///
/// Built from the service configuration at startup, or by hand in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSettingsProvider {
    values: HashMap<String, String>,
}

impl StaticSettingsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the settings from the service configuration.
    pub fn from_config(config: &GatewayConfig) -> Self {
        config
            .entries()
            .into_iter()
            .fold(Self::new(), |provider, (key, value)| provider.with(key, value))
    }

    /// Returns the provider with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SettingsProvider for StaticSettingsProvider {
    fn get_setting(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::keys;

    #[test]
    fn serves_values_by_key() {
        let provider = StaticSettingsProvider::new()
            .with(keys::MERCHANT_ID, "AFF-9")
            .with(keys::ENABLED, "yes");

        assert_eq!(provider.get_setting(keys::MERCHANT_ID).as_deref(), Some("AFF-9"));
        assert_eq!(provider.get_setting(keys::TITLE), None);
        assert!(provider.gateway_settings().enabled);
    }

    #[test]
    fn from_config_carries_every_flag() {
        let config = GatewayConfig {
            enabled: true,
            test_mode: true,
            strict_redirect: false,
            merchant_id: "AFF-1".to_string(),
            ..Default::default()
        };
        let settings = StaticSettingsProvider::from_config(&config).gateway_settings();

        assert!(settings.enabled);
        assert!(settings.test_mode);
        assert!(!settings.strict_redirect);
        assert_eq!(settings, config.to_settings());
    }
}
