//! PaymentRequestBuilder - builds the redirect that hands a customer to SPS.

use std::sync::Arc;

use crate::domain::order::Order;
use crate::domain::payment::{
    GatewayError, PaymentRedirect, AMOUNT_FIELD, CURRENCY_FIELD, MERCHANT_FIELD, REFERENCE_FIELD,
    SESSION_FIELD,
};
use crate::domain::settings::GatewaySettings;
use crate::ports::{GatewayEvent, GatewayLogger};

/// Builds the processor redirect for an order.
///
/// The URL depends only on the order and the settings; logging is the
/// only side effect.
pub struct PaymentRequestBuilder {
    logger: Arc<dyn GatewayLogger>,
}

impl PaymentRequestBuilder {
    pub fn new(logger: Arc<dyn GatewayLogger>) -> Self {
        Self { logger }
    }

    /// Composes `<payment_url>?Reference=..&Montant=..&Devise=..&sid=..&affilie=..`.
    ///
    /// # Errors
    ///
    /// - `Configuration` when strict redirects are on and the merchant id or
    ///   payment URL is empty. With strict redirects off the URL is built
    ///   with whatever is configured.
    pub fn build(
        &self,
        order: &Order,
        settings: &GatewaySettings,
    ) -> Result<PaymentRedirect, GatewayError> {
        let missing = settings.missing_redirect_settings();
        if settings.strict_redirect && !missing.is_empty() {
            let reason = format!("missing {}", missing.join(", "));
            self.logger.log(GatewayEvent::RedirectRefused {
                reference: order.reference.to_string(),
                missing,
            });
            return Err(GatewayError::configuration(reason));
        }

        let amount = order.total.to_fixed();
        let redirect = PaymentRedirect::compose(
            settings.payment_url.trim(),
            &[
                (REFERENCE_FIELD, order.reference.as_str()),
                (AMOUNT_FIELD, amount.as_str()),
                (CURRENCY_FIELD, order.currency.as_str()),
                (SESSION_FIELD, order.order_key.expose()),
                (MERCHANT_FIELD, settings.merchant_id.as_str()),
            ],
        );

        self.logger.log(GatewayEvent::RedirectBuilt {
            reference: order.reference.to_string(),
        });
        Ok(redirect)
    }
}
