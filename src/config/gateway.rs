//! Gateway configuration
//!
//! Merchant settings supplied through the environment when the gateway runs
//! as a standalone service. Hosts embedding the library feed settings through
//! their own `SettingsProvider` instead.

use serde::Deserialize;

use crate::domain::settings::{keys, GatewaySettings, DEFAULT_PROCESSOR_URL};

use super::error::ValidationError;
use super::server::Environment;

/// Gateway configuration (SPS processor)
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Offer the gateway at checkout
    #[serde(default)]
    pub enabled: bool,

    /// Processor payment endpoint
    #[serde(default = "default_processor_url")]
    pub payment_url: String,

    /// Processor transaction view, `%s` replaced by the transaction id
    #[serde(default = "default_processor_url")]
    pub transaction_url: String,

    /// Checkout title shown to the buyer
    pub title: Option<String>,

    /// Checkout description shown to the buyer
    pub description: Option<String>,

    /// Merchant id issued by SPS (`affilie`)
    #[serde(default)]
    pub merchant_id: String,

    /// Only offer the gateway to administrators
    #[serde(default)]
    pub test_mode: bool,

    /// Refuse redirects while merchant id or payment URL is empty
    #[serde(default = "default_strict_redirect")]
    pub strict_redirect: bool,
}

impl GatewayConfig {
    /// Setting entries in the shape a `SettingsProvider` serves them.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            (keys::ENABLED, flag(self.enabled)),
            (keys::PAYMENT_URL, self.payment_url.clone()),
            (keys::TRANSACTION_URL, self.transaction_url.clone()),
            (keys::MERCHANT_ID, self.merchant_id.clone()),
            (keys::TEST_MODE, flag(self.test_mode)),
            (keys::STRICT_REDIRECT, flag(self.strict_redirect)),
        ];
        if let Some(title) = &self.title {
            entries.push((keys::TITLE, title.clone()));
        }
        if let Some(description) = &self.description {
            entries.push((keys::DESCRIPTION, description.clone()));
        }
        entries
    }

    /// Typed settings for this configuration.
    pub fn to_settings(&self) -> GatewaySettings {
        let entries = self.entries();
        GatewaySettings::from_lookup(|key| {
            entries
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        })
    }

    /// Validate gateway configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.enabled && self.merchant_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY__MERCHANT_ID"));
        }

        check_url(&self.payment_url, "GATEWAY__PAYMENT_URL", environment)?;
        if !self.transaction_url.trim().is_empty() {
            check_url(&self.transaction_url, "GATEWAY__TRANSACTION_URL", environment)?;
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            payment_url: default_processor_url(),
            transaction_url: default_processor_url(),
            title: None,
            description: None,
            merchant_id: String::new(),
            test_mode: false,
            strict_redirect: default_strict_redirect(),
        }
    }
}

fn check_url(
    raw: &str,
    name: &'static str,
    environment: &Environment,
) -> Result<(), ValidationError> {
    let parsed = url::Url::parse(raw.trim()).map_err(|_| ValidationError::InvalidUrl(name))?;
    if *environment == Environment::Production && parsed.scheme() != "https" {
        return Err(ValidationError::ProcessorUrlMustBeHttps);
    }
    Ok(())
}

fn flag(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

fn default_processor_url() -> String {
    DEFAULT_PROCESSOR_URL.to_string()
}

fn default_strict_redirect() -> bool {
    true
}
