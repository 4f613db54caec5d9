//! Gateway settings as configured by the merchant.
//!
//! Settings are read by key from the host (see `ports::SettingsProvider`).
//! Absent keys fall back to the defaults below; a key that is present but
//! empty stays empty, which is how a half-configured gateway shows up.

use serde::Serialize;

use crate::domain::foundation::TransactionId;

/// Setting keys understood by the gateway.
pub mod keys {
    pub const ENABLED: &str = "enabled";
    pub const PAYMENT_URL: &str = "payment_url";
    pub const TRANSACTION_URL: &str = "transaction_url";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const MERCHANT_ID: &str = "merchant_id";
    pub const TEST_MODE: &str = "test_mode";
    pub const STRICT_REDIRECT: &str = "strict_redirect";
}

/// Processor endpoint used when none is configured.
pub const DEFAULT_PROCESSOR_URL: &str = "https://clictopay.monetiquetunisie.com/clicktopay/";

pub const DEFAULT_TITLE: &str = "SPS";

pub const DEFAULT_DESCRIPTION: &str =
    "Pay securely by Credit or Debit card or internet banking through Tunisia SPS Secure Servers.";

/// Placeholder replaced by the transaction id in the transaction URL.
const TRANSACTION_PLACEHOLDER: &str = "%s";

/// Merchant-facing gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewaySettings {
    pub enabled: bool,
    pub payment_url: String,
    pub transaction_url: String,
    pub title: String,
    pub description: String,
    pub merchant_id: String,
    /// Only offer the gateway to administrators.
    pub test_mode: bool,
    /// Refuse to build a redirect when merchant id or payment URL is empty.
    pub strict_redirect: bool,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            payment_url: DEFAULT_PROCESSOR_URL.to_string(),
            transaction_url: DEFAULT_PROCESSOR_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            merchant_id: String::new(),
            test_mode: false,
            strict_redirect: true,
        }
    }
}

impl GatewaySettings {
    /// Builds settings from a key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| lookup(key).unwrap_or(default);
        let flag = |key: &str, default: bool| lookup(key).map(|v| parse_flag(&v)).unwrap_or(default);

        Self {
            enabled: flag(keys::ENABLED, defaults.enabled),
            payment_url: text(keys::PAYMENT_URL, defaults.payment_url),
            transaction_url: text(keys::TRANSACTION_URL, defaults.transaction_url),
            title: text(keys::TITLE, defaults.title),
            description: text(keys::DESCRIPTION, defaults.description),
            merchant_id: text(keys::MERCHANT_ID, defaults.merchant_id),
            test_mode: flag(keys::TEST_MODE, defaults.test_mode),
            strict_redirect: flag(keys::STRICT_REDIRECT, defaults.strict_redirect),
        }
    }

    /// Whether the gateway should be offered at checkout.
    ///
    /// A disabled gateway is never offered; in test mode only administrators
    /// see it.
    pub fn is_available_for(&self, viewer_is_admin: bool) -> bool {
        self.enabled && (!self.test_mode || viewer_is_admin)
    }

    /// Setting keys that must be filled in before a redirect is usable.
    pub fn missing_redirect_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.merchant_id.trim().is_empty() {
            missing.push(keys::MERCHANT_ID);
        }
        if self.payment_url.trim().is_empty() {
            missing.push(keys::PAYMENT_URL);
        }
        missing
    }

    /// Link to the processor's view of a transaction.
    ///
    /// The first `%s` in the configured URL is replaced by the transaction
    /// id; a URL without placeholder is returned as is. `None` when no
    /// transaction URL is configured.
    pub fn transaction_url_for(&self, transaction_id: &TransactionId) -> Option<String> {
        let template = self.transaction_url.trim();
        if template.is_empty() {
            return None;
        }
        Some(template.replacen(TRANSACTION_PLACEHOLDER, transaction_id.as_str(), 1))
    }
}

/// Accepts the spellings shop admin panels use for checkboxes.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1" | "on"
    )
}
