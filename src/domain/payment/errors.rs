//! Gateway error types.
//!
//! # Propagation
//!
//! | Error | Callback reply | Checkout HTTP status |
//! |-------|----------------|----------------------|
//! | OrderNotFound | `Reponse=ERROR` | 404 |
//! | InvalidAmount | `Reponse=ERROR` | 422 |
//! | Configuration | - | 503 |
//! | InvalidCallback | `Reponse=ERROR` | - |
//! | Infrastructure | `Reponse=ERROR` | 500 |
//!
//! The callback side never turns an error into an HTTP error status: the
//! processor only understands the reply body.

use thiserror::Error;

use crate::domain::callback::CallbackParseError;
use crate::domain::foundation::{DomainError, ErrorCode, OrderReference, ValidationError};

/// Errors raised by the gateway components.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// No order matches the reference.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderReference),

    /// The order total cannot be rendered as a processor amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A setting required to reach the processor is missing or invalid.
    #[error("Gateway is not configured: {0}")]
    Configuration(String),

    /// Callback parameters failed validation.
    #[error("Invalid callback: {0}")]
    InvalidCallback(#[from] CallbackParseError),

    /// The order store failed.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl GatewayError {
    pub fn order_not_found(reference: OrderReference) -> Self {
        GatewayError::OrderNotFound(reference)
    }

    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        GatewayError::InvalidAmount(reason.into())
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        GatewayError::Configuration(reason.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        GatewayError::Infrastructure(message.into())
    }
}

impl From<DomainError> for GatewayError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidAmount => GatewayError::InvalidAmount(err.message),
            ErrorCode::ConfigurationError => GatewayError::Configuration(err.message),
            _ => GatewayError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for GatewayError {
    fn from(err: ValidationError) -> Self {
        if err.field() == "amount" {
            GatewayError::InvalidAmount(err.to_string())
        } else {
            GatewayError::Infrastructure(err.to_string())
        }
    }
}
