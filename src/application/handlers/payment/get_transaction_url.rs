//! GetTransactionUrlHandler - Query handler for the processor's transaction link.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::OrderReference;
use crate::domain::payment::GatewayError;
use crate::ports::{OrderRepository, SettingsProvider};

/// Query for an order's transaction link.
#[derive(Debug, Clone)]
pub struct GetTransactionUrlQuery {
    pub reference: OrderReference,
}

/// Link to the transaction on the processor side, if one can be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetTransactionUrlResult {
    pub transaction_url: Option<String>,
}

/// Resolves the transaction link shown next to a paid order.
///
/// `None` until the order carries a transaction id, or when no
/// transaction URL is configured.
pub struct GetTransactionUrlHandler {
    orders: Arc<dyn OrderRepository>,
    settings: Arc<dyn SettingsProvider>,
}

impl GetTransactionUrlHandler {
    pub fn new(orders: Arc<dyn OrderRepository>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self { orders, settings }
    }

    pub async fn handle(
        &self,
        query: GetTransactionUrlQuery,
    ) -> Result<GetTransactionUrlResult, GatewayError> {
        let order = self
            .orders
            .find_by_reference(&query.reference)
            .await?
            .ok_or_else(|| GatewayError::order_not_found(query.reference.clone()))?;

        let settings = self.settings.gateway_settings();
        let transaction_url = order
            .transaction_id
            .as_ref()
            .and_then(|id| settings.transaction_url_for(id));

        Ok(GetTransactionUrlResult { transaction_url })
    }
}
