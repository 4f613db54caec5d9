//! Route configuration for payment endpoints.
//!
//! Configures Axum router with SPS gateway routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_gateway_details, get_transaction_url, handle_callback, process_payment,
    redirect_to_processor, PaymentAppState,
};

/// Creates the payment router with all endpoints.
///
/// Routes:
/// - `GET /api/payments/sps/callback` - Processor notification (query-string reply)
/// - `GET /api/payments/sps/gateway` - Checkout presentation
/// - `POST /api/payments/sps/orders/:reference/payment` - Start payment, JSON redirect
/// - `GET /api/payments/sps/orders/:reference/redirect` - Start payment, 303 to SPS
/// - `GET /api/payments/sps/orders/:reference/transaction` - Processor transaction link
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new()
        .route("/api/payments/sps/callback", get(handle_callback))
        .route("/api/payments/sps/gateway", get(get_gateway_details))
        .route(
            "/api/payments/sps/orders/:reference/payment",
            post(process_payment),
        )
        .route(
            "/api/payments/sps/orders/:reference/redirect",
            get(redirect_to_processor),
        )
        .route(
            "/api/payments/sps/orders/:reference/transaction",
            get(get_transaction_url),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logging::RecordingGatewayLogger;
    use crate::adapters::memory::InMemoryOrderRepository;
    use crate::adapters::settings::StaticSettingsProvider;
    use crate::domain::foundation::{Amount, CurrencyCode, OrderKey, OrderReference};
    use crate::domain::order::Order;
    use crate::domain::settings::keys;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> PaymentAppState {
        let orders = InMemoryOrderRepository::with_orders([Order::new(
            OrderReference::new("1042").unwrap(),
            OrderKey::new("wc_order_AbC123").unwrap(),
            Amount::new(dec!(12.5)).unwrap(),
            CurrencyCode::new("TND").unwrap(),
        )]);
        let settings = StaticSettingsProvider::new()
            .with(keys::ENABLED, "yes")
            .with(keys::MERCHANT_ID, "AFF-001");
        PaymentAppState::new(
            Arc::new(orders),
            Arc::new(settings),
            Arc::new(RecordingGatewayLogger::new()),
        )
    }

    #[test]
    fn payment_router_creates_router() {
        let _: Router<()> = payment_router().with_state(test_state());
    }

    #[tokio::test]
    async fn redirect_route_answers_see_other() {
        let app = payment_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/payments/sps/orders/1042/redirect")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()["location"].to_str().unwrap();
        assert!(location.contains("Montant=12.500"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = payment_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/payments/other/callback")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
