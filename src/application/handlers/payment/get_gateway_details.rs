//! GetGatewayDetailsHandler - Query handler for what checkout shows about SPS.

use serde::Serialize;
use std::sync::Arc;

use crate::ports::SettingsProvider;

/// Gateway identifier used in routes and by hosts.
pub const GATEWAY_ID: &str = "sps";

/// Label of the checkout button.
pub const ORDER_BUTTON_TEXT: &str = "Proceed to payment";

/// Query for the checkout presentation of the gateway.
#[derive(Debug, Clone, Default)]
pub struct GetGatewayDetailsQuery {
    pub viewer_is_admin: bool,
}

/// Checkout presentation of the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetGatewayDetailsResult {
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub order_button_text: &'static str,
    /// Whether checkout should offer the gateway to this viewer.
    pub available: bool,
}

pub struct GetGatewayDetailsHandler {
    settings: Arc<dyn SettingsProvider>,
}

impl GetGatewayDetailsHandler {
    pub fn new(settings: Arc<dyn SettingsProvider>) -> Self {
        Self { settings }
    }

    pub fn handle(&self, query: GetGatewayDetailsQuery) -> GetGatewayDetailsResult {
        let settings = self.settings.gateway_settings();
        GetGatewayDetailsResult {
            id: GATEWAY_ID,
            available: settings.is_available_for(query.viewer_is_admin),
            title: settings.title,
            description: settings.description,
            order_button_text: ORDER_BUTTON_TEXT,
        }
    }
}
