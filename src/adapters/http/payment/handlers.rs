//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect};

use crate::application::handlers::payment::{
    CallbackReconciler, GetGatewayDetailsHandler, GetGatewayDetailsQuery,
    GetTransactionUrlHandler, GetTransactionUrlQuery, PaymentRequestBuilder,
    ProcessPaymentCommand, ProcessPaymentHandler,
};
use crate::domain::callback::CallbackParams;
use crate::domain::foundation::{OrderReference, ValidationError};
use crate::domain::payment::GatewayError;
use crate::ports::{GatewayLogger, OrderRepository, SettingsProvider};

use super::dto::{
    ErrorResponse, GatewayDetailsResponse, ProcessPaymentResponse, TransactionUrlResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct PaymentAppState {
    pub orders: Arc<dyn OrderRepository>,
    pub settings: Arc<dyn SettingsProvider>,
    pub logger: Arc<dyn GatewayLogger>,
}

impl PaymentAppState {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        settings: Arc<dyn SettingsProvider>,
        logger: Arc<dyn GatewayLogger>,
    ) -> Self {
        Self {
            orders,
            settings,
            logger,
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn reconciler(&self) -> CallbackReconciler {
        CallbackReconciler::new(self.orders.clone(), self.logger.clone())
    }

    pub fn process_payment_handler(&self) -> ProcessPaymentHandler {
        ProcessPaymentHandler::new(
            self.orders.clone(),
            self.settings.clone(),
            Arc::new(PaymentRequestBuilder::new(self.logger.clone())),
        )
    }

    pub fn transaction_url_handler(&self) -> GetTransactionUrlHandler {
        GetTransactionUrlHandler::new(self.orders.clone(), self.settings.clone())
    }

    pub fn gateway_details_handler(&self) -> GetGatewayDetailsHandler {
        GetGatewayDetailsHandler::new(self.settings.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Processor Callback
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/payments/sps/callback - Processor notification
///
/// Always answers 200; the outcome is carried by the body.
pub async fn handle_callback(
    State(state): State<PaymentAppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let params = CallbackParams::from_query(query.as_deref().unwrap_or_default());
    let response = state.reconciler().handle_params(&params).await;

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        response.encode(),
    )
}

// ════════════════════════════════════════════════════════════════════════════════
// Checkout Endpoints
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/payments/sps/orders/:reference/payment - Start payment
pub async fn process_payment(
    State(state): State<PaymentAppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.process_payment_handler();
    let cmd = ProcessPaymentCommand {
        reference: OrderReference::new(reference)?,
    };

    let result = handler.handle(cmd).await?;

    Ok(Json(ProcessPaymentResponse::from(result)))
}

/// GET /api/payments/sps/orders/:reference/redirect - Send the browser to SPS
pub async fn redirect_to_processor(
    State(state): State<PaymentAppState>,
    Path(reference): Path<String>,
) -> Result<Redirect, PaymentApiError> {
    let handler = state.process_payment_handler();
    let cmd = ProcessPaymentCommand {
        reference: OrderReference::new(reference)?,
    };

    let result = handler.handle(cmd).await?;

    Ok(Redirect::to(result.redirect.as_str()))
}

/// GET /api/payments/sps/orders/:reference/transaction - Processor transaction link
pub async fn get_transaction_url(
    State(state): State<PaymentAppState>,
    Path(reference): Path<String>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.transaction_url_handler();
    let query = GetTransactionUrlQuery {
        reference: OrderReference::new(reference)?,
    };

    let result = handler.handle(query).await?;

    Ok(Json(TransactionUrlResponse::from(result)))
}

/// GET /api/payments/sps/gateway - Checkout presentation
///
/// Availability is computed for a regular customer.
pub async fn get_gateway_details(State(state): State<PaymentAppState>) -> impl IntoResponse {
    let result = state
        .gateway_details_handler()
        .handle(GetGatewayDetailsQuery::default());

    Json(GatewayDetailsResponse::from(result))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts gateway errors to HTTP responses.
#[derive(Debug)]
pub enum PaymentApiError {
    Gateway(GatewayError),
    BadRequest(ValidationError),
}

impl From<GatewayError> for PaymentApiError {
    fn from(err: GatewayError) -> Self {
        Self::Gateway(err)
    }
}

impl From<ValidationError> for PaymentApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code, message) = match &self {
            PaymentApiError::BadRequest(err) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", err.to_string())
            }
            PaymentApiError::Gateway(err) => match err {
                GatewayError::OrderNotFound(_) => {
                    (StatusCode::NOT_FOUND, "ORDER_NOT_FOUND", err.to_string())
                }
                GatewayError::InvalidAmount(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_AMOUNT",
                    err.to_string(),
                ),
                GatewayError::Configuration(_) => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "GATEWAY_UNAVAILABLE",
                    err.to_string(),
                ),
                GatewayError::InvalidCallback(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", err.to_string())
                }
                GatewayError::Infrastructure(_) => {
                    tracing::error!("Payment request failed: {}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "Internal server error".to_string(),
                    )
                }
            },
        };

        (status, Json(ErrorResponse::new(error_code, message))).into_response()
    }
}
