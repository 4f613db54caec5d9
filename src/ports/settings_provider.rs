//! Settings provider port.
//!
//! The host application stores the merchant's gateway settings; the gateway
//! only reads them by key. Lookups are synchronous: hosts keep settings in
//! memory or in their own configuration layer.

use crate::domain::settings::GatewaySettings;

/// Port for reading gateway settings by key.
pub trait SettingsProvider: Send + Sync {
    /// Returns the raw value for `key`, or `None` if it was never set.
    fn get_setting(&self, key: &str) -> Option<String>;

    /// Assembles the typed settings from individual keys.
    fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings::from_lookup(|key| self.get_setting(key))
    }
}
