//! ProcessPaymentHandler - Command handler for starting an SPS payment.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::OrderReference;
use crate::domain::payment::{GatewayError, PaymentRedirect};
use crate::ports::{OrderRepository, SettingsProvider};

use super::PaymentRequestBuilder;

/// Command to start payment for a placed order.
#[derive(Debug, Clone)]
pub struct ProcessPaymentCommand {
    pub reference: OrderReference,
}

/// Outcome handed back to the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessPaymentResult {
    /// Always `"success"`; failures are returned as errors.
    pub result: &'static str,
    /// Where the customer's browser goes next.
    pub redirect: PaymentRedirect,
}

impl ProcessPaymentResult {
    fn success(redirect: PaymentRedirect) -> Self {
        Self {
            result: "success",
            redirect,
        }
    }
}

/// Handler for the checkout step that sends the customer to SPS.
pub struct ProcessPaymentHandler {
    orders: Arc<dyn OrderRepository>,
    settings: Arc<dyn SettingsProvider>,
    builder: Arc<PaymentRequestBuilder>,
}

impl ProcessPaymentHandler {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        settings: Arc<dyn SettingsProvider>,
        builder: Arc<PaymentRequestBuilder>,
    ) -> Self {
        Self {
            orders,
            settings,
            builder,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessPaymentCommand,
    ) -> Result<ProcessPaymentResult, GatewayError> {
        // 1. Settings are read per request so admin changes apply immediately
        let settings = self.settings.gateway_settings();
        if !settings.enabled {
            return Err(GatewayError::configuration("gateway is disabled"));
        }

        // 2. Find the order
        let order = self
            .orders
            .find_by_reference(&cmd.reference)
            .await?
            .ok_or_else(|| GatewayError::order_not_found(cmd.reference.clone()))?;

        // 3. Build the redirect
        let redirect = self.builder.build(&order, &settings)?;

        Ok(ProcessPaymentResult::success(redirect))
    }
}
