//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod payment;

pub use payment::{
    CallbackReconciler, GetGatewayDetailsHandler, GetGatewayDetailsQuery,
    GetGatewayDetailsResult, GetTransactionUrlHandler, GetTransactionUrlQuery,
    GetTransactionUrlResult, PaymentRequestBuilder, ProcessPaymentCommand,
    ProcessPaymentHandler, ProcessPaymentResult,
};
