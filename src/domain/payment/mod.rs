//! Payment module - redirect composition and gateway errors.

mod errors;
mod redirect;

pub use errors::GatewayError;
pub use redirect::{
    PaymentRedirect, AMOUNT_FIELD, CURRENCY_FIELD, MERCHANT_FIELD, REFERENCE_FIELD, SESSION_FIELD,
};
