//! HTTP adapter for SPS payment endpoints.
//!
//! Exposes the gateway via REST API:
//! - `GET /api/payments/sps/callback` - Processor notification
//! - `GET /api/payments/sps/gateway` - Checkout presentation
//! - `POST /api/payments/sps/orders/:reference/payment` - Start payment
//! - `GET /api/payments/sps/orders/:reference/redirect` - Redirect to processor
//! - `GET /api/payments/sps/orders/:reference/transaction` - Transaction link

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{PaymentApiError, PaymentAppState};
pub use routes::payment_router;
