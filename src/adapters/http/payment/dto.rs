//! HTTP DTOs (Data Transfer Objects) for payment endpoints.
//!
//! The callback endpoint answers in the processor's own query-string format;
//! only the checkout-facing endpoints use these JSON shapes.

use serde::Serialize;

use crate::application::handlers::payment::{
    GetGatewayDetailsResult, GetTransactionUrlResult, ProcessPaymentResult,
};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response of `POST /orders/:reference/payment`.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessPaymentResponse {
    pub result: String,
    pub redirect: String,
}

impl From<ProcessPaymentResult> for ProcessPaymentResponse {
    fn from(result: ProcessPaymentResult) -> Self {
        Self {
            result: result.result.to_string(),
            redirect: result.redirect.into_string(),
        }
    }
}

/// Response of `GET /orders/:reference/transaction`.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionUrlResponse {
    pub transaction_url: Option<String>,
}

impl From<GetTransactionUrlResult> for TransactionUrlResponse {
    fn from(result: GetTransactionUrlResult) -> Self {
        Self {
            transaction_url: result.transaction_url,
        }
    }
}

/// Response of `GET /gateway`.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayDetailsResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order_button_text: String,
    pub available: bool,
}

impl From<GetGatewayDetailsResult> for GatewayDetailsResponse {
    fn from(result: GetGatewayDetailsResult) -> Self {
        Self {
            id: result.id.to_string(),
            title: result.title,
            description: result.description,
            order_button_text: result.order_button_text.to_string(),
            available: result.available,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
