//! Strongly-typed identifier value objects.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Merchant-side order identifier shared with the processor.
///
/// Opaque to the gateway: shops use numeric ids, but nothing here relies
/// on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderReference(String);

impl OrderReference {
    /// Creates a new OrderReference, returning error if blank.
    pub fn new(reference: impl Into<String>) -> Result<Self, ValidationError> {
        let reference = reference.into();
        let trimmed = reference.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("Reference"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderReference {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Processor-side transaction identifier delivered with an approval.
///
/// Recorded verbatim; the processor does not sign it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Creates a new TransactionId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("Param"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Secret checkout-session token, sent to the processor as `sid`.
///
/// Wrapped in `SecretString` so it never shows up in `Debug` output or logs.
#[derive(Clone)]
pub struct OrderKey(SecretString);

impl OrderKey {
    /// Creates a new OrderKey, returning error if empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::empty_field("order_key"));
        }
        Ok(Self(SecretString::new(key)))
    }

    /// Exposes the raw token. Only the redirect encoder should need this.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_reference_trims_whitespace() {
        let reference = OrderReference::new("  1042 ").unwrap();
        assert_eq!(reference.as_str(), "1042");
    }

    #[test]
    fn order_reference_rejects_blank_string() {
        match OrderReference::new("   ") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "Reference"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn order_reference_parses_from_str() {
        let reference: OrderReference = "77".parse().unwrap();
        assert_eq!(format!("{}", reference), "77");
    }

    #[test]
    fn transaction_id_is_kept_verbatim() {
        let id = TransactionId::new(" TX 99 ").unwrap();
        assert_eq!(id.as_str(), " TX 99 ");
    }

    #[test]
    fn transaction_id_rejects_empty_string() {
        assert!(TransactionId::new("").is_err());
    }

    #[test]
    fn order_key_is_redacted_in_debug_output() {
        let key = OrderKey::new("wc_order_abc123").unwrap();
        let debug = format!("{:?}", key);

        assert!(!debug.contains("abc123"));
        assert_eq!(key.expose(), "wc_order_abc123");
    }
}
