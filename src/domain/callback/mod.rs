//! Callback module - the processor's server-to-server notification.
//!
//! - `CallbackAction` - closed set of action codes
//! - `CallbackParams` / `CallbackRequest` - raw and validated inbound parameters
//! - `CallbackResponse` - URL-encoded reply body

mod action;
mod request;
mod response;

pub use action::CallbackAction;
pub use request::{
    CallbackParams, CallbackParseError, CallbackRequest, ACTION_PARAM, REFERENCE_PARAM,
    TRANSACTION_PARAM,
};
pub use response::{CallbackResponse, ResponseDecodeError, ResponseValue, RESPONSE_FIELD};
