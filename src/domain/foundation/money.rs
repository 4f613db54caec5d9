//! Monetary value objects.
//!
//! The processor expects amounts as fixed-point strings with exactly three
//! fractional digits (`12.500`), which is also the precision of the dinar.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Number of fractional digits the processor works with.
pub const AMOUNT_SCALE: u32 = 3;

/// Formats a total the way the processor expects it.
///
/// Rounds half away from zero to three decimals, uses `.` as separator and
/// never groups thousands: `1234.5` becomes `"1234.500"`.
///
/// # Errors
///
/// Returns `InvalidFormat` for negative totals.
pub fn format_amount(total: Decimal) -> Result<String, ValidationError> {
    Amount::new(total).map(|amount| amount.to_fixed())
}

/// Non-negative order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::invalid_format(
                "amount",
                format!("{} is negative", value),
            ));
        }
        Ok(Self(value))
    }

    /// Parses a textual total, as stored by most shop backends.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value = Decimal::from_str(raw.trim()).map_err(|_| {
            ValidationError::invalid_format("amount", format!("'{}' is not a number", raw))
        })?;
        Self::new(value)
    }

    /// Returns the inner decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Fixed-point rendering with exactly three fractional digits.
    pub fn to_fixed(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.3}", rounded)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed())
    }
}

/// ISO 4217 style currency code (`TND`, `EUR`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code, normalising to upper case.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into().trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(ValidationError::empty_field("currency"));
        }
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "currency",
                format!("'{}' is not a three-letter code", code),
            ));
        }
        Ok(Self(code))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
