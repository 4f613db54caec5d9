//! Outbound redirect to the processor's payment page.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::encode_query;

pub const REFERENCE_FIELD: &str = "Reference";
pub const AMOUNT_FIELD: &str = "Montant";
pub const CURRENCY_FIELD: &str = "Devise";
pub const SESSION_FIELD: &str = "sid";
pub const MERCHANT_FIELD: &str = "affilie";

/// Fully composed payment page URL.
///
/// Kept as a string rather than a parsed URL: a permissive gateway may be
/// asked to build a redirect with an empty endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PaymentRedirect(String);

impl PaymentRedirect {
    /// Appends the encoded fields to the payment endpoint.
    ///
    /// Uses `?` unless the endpoint already carries a query string.
    pub fn compose(endpoint: &str, fields: &[(&str, &str)]) -> Self {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        Self(format!("{}{}{}", endpoint, separator, encode_query(fields)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PaymentRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
