//! Payment handlers.
//!
//! Components the host wires into its checkout and callback routes:
//!
//! ## Components
//! - `PaymentRequestBuilder` - builds the processor redirect
//! - `CallbackReconciler` - applies processor callbacks to orders
//!
//! ## Commands
//! - Start payment for an order
//!
//! ## Queries
//! - Transaction link for a paid order
//! - Checkout presentation of the gateway

mod build_payment_request;
mod get_gateway_details;
mod get_transaction_url;
mod process_payment;
mod reconcile_callback;

pub use build_payment_request::PaymentRequestBuilder;
pub use reconcile_callback::CallbackReconciler;

// Commands
pub use process_payment::{ProcessPaymentCommand, ProcessPaymentHandler, ProcessPaymentResult};

// Queries
pub use get_gateway_details::{
    GetGatewayDetailsHandler, GetGatewayDetailsQuery, GetGatewayDetailsResult, GATEWAY_ID,
    ORDER_BUTTON_TEXT,
};
pub use get_transaction_url::{
    GetTransactionUrlHandler, GetTransactionUrlQuery, GetTransactionUrlResult,
};
