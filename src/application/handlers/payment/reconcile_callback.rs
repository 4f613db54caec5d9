//! CallbackReconciler - applies processor callbacks to orders.
//!
//! | Action | Order change | `Reponse` |
//! |--------|--------------|-----------|
//! | DETAIL | none | total, 3 decimals |
//! | ACCORD | paid, transaction id recorded | OK |
//! | ERREUR | failed, stock released | OK |
//! | REFUS | cancelled | OK |
//! | ANNULATION | cancelled | OK |
//! | other | none | empty body |
//!
//! Processors retry deliveries, so every transition is planned against the
//! order's current status first. A repeat of a transition already applied
//! changes nothing and still answers OK. The one exception is ERREUR on an
//! order already failed: stock release is asked for again, since an earlier
//! delivery may have failed between the two writes. `release_stock` is
//! idempotent per order.

use std::sync::Arc;

use crate::domain::callback::{
    CallbackAction, CallbackParams, CallbackParseError, CallbackRequest, CallbackResponse,
    TRANSACTION_PARAM,
};
use crate::domain::foundation::{StateMachine, TransactionId, Transition};
use crate::domain::order::{Order, OrderStatus};
use crate::domain::payment::GatewayError;
use crate::ports::{GatewayEvent, GatewayLogger, OrderRepository, SkipReason};

/// Handler for processor callbacks.
///
/// Never fails: every outcome, including errors, becomes a reply body the
/// processor understands.
pub struct CallbackReconciler {
    orders: Arc<dyn OrderRepository>,
    logger: Arc<dyn GatewayLogger>,
}

impl CallbackReconciler {
    pub fn new(orders: Arc<dyn OrderRepository>, logger: Arc<dyn GatewayLogger>) -> Self {
        Self { orders, logger }
    }

    /// Validates raw parameters, then reconciles.
    ///
    /// An unrecognised action is answered with the empty body even when
    /// other parameters are missing. Any other validation failure is
    /// answered with `Reponse=ERROR`, echoing the fields that were sent.
    pub async fn handle_params(&self, params: &CallbackParams) -> CallbackResponse {
        match params.parse() {
            Ok(request) => self.reconcile(&request).await,
            Err(err) => self.reject(params, err),
        }
    }

    /// Applies a validated callback and builds the reply.
    pub async fn reconcile(&self, request: &CallbackRequest) -> CallbackResponse {
        let reference = request.reference.as_str();

        if let CallbackAction::Unknown(raw) = &request.action {
            self.logger.log(GatewayEvent::UnknownAction {
                reference: reference.to_string(),
                action: raw.clone(),
            });
            return CallbackResponse::Unrecognized;
        }

        self.logger.log(GatewayEvent::CallbackReceived {
            reference: reference.to_string(),
            action: request.action.code().to_string(),
        });

        match self.try_reconcile(request).await {
            Ok(response) => response,
            Err(err) => {
                self.logger.log(match &err {
                    GatewayError::OrderNotFound(_) => GatewayEvent::OrderMissing {
                        reference: reference.to_string(),
                    },
                    other => GatewayEvent::Failure {
                        reference: reference.to_string(),
                        error: other.to_string(),
                    },
                });
                CallbackResponse::error(reference, request.action.code())
            }
        }
    }

    /// Reconciles a callback, surfacing failures as typed errors.
    ///
    /// # Errors
    ///
    /// - `OrderNotFound` if the reference does not resolve
    /// - `InvalidCallback` for an approval without transaction id
    /// - `Infrastructure` if the order store fails
    pub async fn try_reconcile(
        &self,
        request: &CallbackRequest,
    ) -> Result<CallbackResponse, GatewayError> {
        let order = self
            .orders
            .find_by_reference(&request.reference)
            .await?
            .ok_or_else(|| GatewayError::order_not_found(request.reference.clone()))?;

        let reference = request.reference.as_str();
        let code = request.action.code();

        match &request.action {
            CallbackAction::Detail => Ok(CallbackResponse::amount(
                reference,
                code,
                order.total.to_fixed(),
            )),
            CallbackAction::Accord => {
                let transaction_id = request.transaction_id.as_ref().ok_or(
                    GatewayError::InvalidCallback(CallbackParseError::MissingParameter(
                        TRANSACTION_PARAM,
                    )),
                )?;
                self.approve(&order, transaction_id).await?;
                Ok(CallbackResponse::ok(reference, code))
            }
            CallbackAction::Erreur | CallbackAction::Refus | CallbackAction::Annulation => {
                self.settle(&order, &request.action).await?;
                Ok(CallbackResponse::ok(reference, code))
            }
            CallbackAction::Unknown(_) => Ok(CallbackResponse::Unrecognized),
        }
    }

    async fn approve(&self, order: &Order, transaction_id: &TransactionId) -> Result<(), GatewayError> {
        let action = CallbackAction::Accord;

        if order.status.is_paid() {
            match &order.transaction_id {
                Some(recorded) if recorded != transaction_id => {
                    self.logger.log(GatewayEvent::ConflictingTransaction {
                        reference: order.reference.to_string(),
                        recorded: recorded.to_string(),
                        received: transaction_id.to_string(),
                    });
                }
                _ => self.skipped(order, &action, SkipReason::AlreadyApplied),
            }
            return Ok(());
        }

        match order.status.plan(OrderStatus::Processing) {
            Transition::Changed { from, to } => {
                self.orders.mark_paid(&order.reference, transaction_id).await?;
                if let Some(note) = action.audit_note() {
                    self.orders.add_note(&order.reference, note).await?;
                }
                self.applied(order, &action, from, to);
            }
            Transition::Unchanged(_) => self.skipped(order, &action, SkipReason::AlreadyApplied),
            Transition::Rejected { .. } => self.skipped(order, &action, SkipReason::NotAllowed),
        }
        Ok(())
    }

    async fn settle(&self, order: &Order, action: &CallbackAction) -> Result<(), GatewayError> {
        let (Some(target), Some(note)) = (action.target_status(), action.audit_note()) else {
            return Ok(());
        };

        match order.status.plan(target) {
            Transition::Changed { from, to } => {
                if matches!(action, CallbackAction::Erreur) {
                    self.orders.mark_failed(&order.reference, note).await?;
                    self.orders.release_stock(&order.reference).await?;
                } else {
                    self.orders.mark_cancelled(&order.reference, note).await?;
                }
                self.applied(order, action, from, to);
            }
            Transition::Unchanged(_) => {
                if matches!(action, CallbackAction::Erreur) {
                    self.orders.release_stock(&order.reference).await?;
                }
                self.skipped(order, action, SkipReason::AlreadyApplied);
            }
            Transition::Rejected { .. } => self.skipped(order, action, SkipReason::NotAllowed),
        }
        Ok(())
    }

    fn reject(&self, params: &CallbackParams, err: CallbackParseError) -> CallbackResponse {
        let action = params.action.as_deref().map(CallbackAction::parse);
        if let Some(CallbackAction::Unknown(raw)) = &action {
            self.logger.log(GatewayEvent::UnknownAction {
                reference: params.reference.clone().unwrap_or_default(),
                action: raw.clone(),
            });
            return CallbackResponse::Unrecognized;
        }

        self.logger.log(GatewayEvent::CallbackRejected {
            reason: err.to_string(),
        });
        CallbackResponse::error(
            params.reference.clone().unwrap_or_default(),
            action.map(|a| a.code().to_string()).unwrap_or_default(),
        )
    }

    fn applied(&self, order: &Order, action: &CallbackAction, from: OrderStatus, to: OrderStatus) {
        self.logger.log(GatewayEvent::TransitionApplied {
            reference: order.reference.to_string(),
            action: action.code().to_string(),
            from,
            to,
        });
    }

    fn skipped(&self, order: &Order, action: &CallbackAction, reason: SkipReason) {
        self.logger.log(GatewayEvent::TransitionSkipped {
            reference: order.reference.to_string(),
            action: action.code().to_string(),
            status: order.status,
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logging::RecordingGatewayLogger;
    use crate::adapters::memory::{InMemoryOrderRepository, OrderMutation};
    use crate::domain::callback::ResponseValue;
    use crate::domain::foundation::{
        Amount, CurrencyCode, DomainError, ErrorCode, OrderKey, OrderReference,
    };
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Fixtures
    // ════════════════════════════════════════════════════════════════════════════

    fn reference() -> OrderReference {
        OrderReference::new("1042").unwrap()
    }

    fn order() -> Order {
        Order::new(
            reference(),
            OrderKey::new("wc_order_AbC123").unwrap(),
            Amount::new(dec!(99.999)).unwrap(),
            CurrencyCode::new("TND").unwrap(),
        )
    }

    struct Harness {
        orders: Arc<InMemoryOrderRepository>,
        logger: Arc<RecordingGatewayLogger>,
        reconciler: CallbackReconciler,
    }

    fn harness_with(order: Order) -> Harness {
        let orders = Arc::new(InMemoryOrderRepository::with_orders([order]));
        let logger = Arc::new(RecordingGatewayLogger::new());
        let reconciler = CallbackReconciler::new(orders.clone(), logger.clone());
        Harness {
            orders,
            logger,
            reconciler,
        }
    }

    fn harness() -> Harness {
        harness_with(order())
    }

    fn params(query: &str) -> CallbackParams {
        CallbackParams::from_query(query)
    }

    /// Order store whose every call fails.
    struct BrokenOrders;

    #[async_trait]
    impl OrderRepository for BrokenOrders {
        async fn find_by_reference(
            &self,
            _reference: &OrderReference,
        ) -> Result<Option<Order>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
        }

        async fn mark_paid(
            &self,
            _reference: &OrderReference,
            _transaction_id: &TransactionId,
        ) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
        }

        async fn mark_failed(&self, _reference: &OrderReference, _note: &str) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
        }

        async fn mark_cancelled(
            &self,
            _reference: &OrderReference,
            _note: &str,
        ) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
        }

        async fn release_stock(&self, _reference: &OrderReference) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
        }

        async fn add_note(&self, _reference: &OrderReference, _note: &str) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
        }
    }

    /// In-memory store whose named operations fail on their next call only.
    struct FlakyOrders {
        inner: InMemoryOrderRepository,
        failing: Mutex<Vec<&'static str>>,
    }

    impl FlakyOrders {
        fn new(order: Order) -> Self {
            Self {
                inner: InMemoryOrderRepository::with_orders([order]),
                failing: Mutex::new(Vec::new()),
            }
        }

        fn fail_once(&self, operation: &'static str) {
            self.failing.lock().unwrap().push(operation);
        }

        fn trip(&self, operation: &'static str) -> Result<(), DomainError> {
            let mut failing = self.failing.lock().unwrap();
            match failing.iter().position(|op| *op == operation) {
                Some(index) => {
                    failing.remove(index);
                    Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
                }
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl OrderRepository for FlakyOrders {
        async fn find_by_reference(
            &self,
            reference: &OrderReference,
        ) -> Result<Option<Order>, DomainError> {
            self.trip("find_by_reference")?;
            self.inner.find_by_reference(reference).await
        }

        async fn mark_paid(
            &self,
            reference: &OrderReference,
            transaction_id: &TransactionId,
        ) -> Result<(), DomainError> {
            self.trip("mark_paid")?;
            self.inner.mark_paid(reference, transaction_id).await
        }

        async fn mark_failed(&self, reference: &OrderReference, note: &str) -> Result<(), DomainError> {
            self.trip("mark_failed")?;
            self.inner.mark_failed(reference, note).await
        }

        async fn mark_cancelled(
            &self,
            reference: &OrderReference,
            note: &str,
        ) -> Result<(), DomainError> {
            self.trip("mark_cancelled")?;
            self.inner.mark_cancelled(reference, note).await
        }

        async fn release_stock(&self, reference: &OrderReference) -> Result<(), DomainError> {
            self.trip("release_stock")?;
            self.inner.release_stock(reference).await
        }

        async fn add_note(&self, reference: &OrderReference, note: &str) -> Result<(), DomainError> {
            self.trip("add_note")?;
            self.inner.add_note(reference, note).await
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // DETAIL
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn detail_answers_total_with_three_decimals() {
        let h = harness();

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=DETAIL"))
            .await;

        assert_eq!(
            response.value(),
            Some(&ResponseValue::Amount("99.999".to_string()))
        );
        assert_eq!(response.encode(), "Reference=1042&Action=DETAIL&Reponse=99.999");
        assert!(h.orders.mutations().is_empty());
    }

    #[tokio::test]
    async fn detail_pads_short_totals() {
        let h = harness_with(Order {
            total: Amount::new(dec!(1234.5)).unwrap(),
            ..order()
        });

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=detail"))
            .await;

        assert_eq!(
            response.value(),
            Some(&ResponseValue::Amount("1234.500".to_string()))
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // ACCORD
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn accord_marks_paid_and_notes_approval() {
        let h = harness();

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=ACCORD&Param=TX-77"))
            .await;

        assert_eq!(response.encode(), "Reference=1042&Action=ACCORD&Reponse=OK");
        let stored = h.orders.get(&reference()).unwrap();
        assert_eq!(stored.status, OrderStatus::Processing);
        assert_eq!(stored.transaction_id.unwrap().as_str(), "TX-77");
        assert_eq!(
            h.orders.notes(&reference()),
            vec!["Credit Card Transaction Approved"]
        );
    }

    #[tokio::test]
    async fn action_case_does_not_change_outcome() {
        let mut bodies = Vec::new();
        let mut mutations = Vec::new();

        for action in ["accord", "ACCORD", "AccorD"] {
            let h = harness();
            let query = format!("Reference=1042&Action={}&Param=TX-77", action);
            bodies.push(h.reconciler.handle_params(&params(&query)).await.encode());
            mutations.push(h.orders.mutations());
        }

        assert!(bodies.windows(2).all(|w| w[0] == w[1]), "{:?}", bodies);
        assert!(mutations.windows(2).all(|w| w[0] == w[1]));
    }

    #[tokio::test]
    async fn accord_twice_is_idempotent() {
        let h = harness();
        let callback = params("Reference=1042&Action=ACCORD&Param=TX-77");

        let first = h.reconciler.handle_params(&callback).await;
        let after_first = h.orders.get(&reference()).unwrap();
        let second = h.reconciler.handle_params(&callback).await;
        let after_second = h.orders.get(&reference()).unwrap();

        assert_eq!(first, second);
        assert_eq!(after_first.status, after_second.status);
        assert_eq!(after_first.transaction_id, after_second.transaction_id);
        // The retry does not reach the store.
        assert_eq!(h.orders.mutations().len(), 2);
        assert!(h.logger.events().contains(&GatewayEvent::TransitionSkipped {
            reference: "1042".into(),
            action: "ACCORD".into(),
            status: OrderStatus::Processing,
            reason: SkipReason::AlreadyApplied,
        }));
    }

    #[tokio::test]
    async fn accord_with_other_transaction_keeps_recorded_id() {
        let paid = order()
            .with_status(OrderStatus::Processing)
            .with_transaction_id(TransactionId::new("TX-1").unwrap());
        let h = harness_with(paid);

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=ACCORD&Param=TX-2"))
            .await;

        assert_eq!(response.value(), Some(&ResponseValue::Ok));
        assert!(h.orders.mutations().is_empty());
        assert_eq!(
            h.orders.get(&reference()).unwrap().transaction_id.unwrap().as_str(),
            "TX-1"
        );
        assert!(h.logger.events().contains(&GatewayEvent::ConflictingTransaction {
            reference: "1042".into(),
            recorded: "TX-1".into(),
            received: "TX-2".into(),
        }));
    }

    #[tokio::test]
    async fn late_accord_recovers_cancelled_order() {
        let h = harness_with(order().with_status(OrderStatus::Cancelled));

        h.reconciler
            .handle_params(&params("Reference=1042&Action=ACCORD&Param=TX-9"))
            .await;

        assert_eq!(h.orders.get(&reference()).unwrap().status, OrderStatus::Processing);
    }

    #[tokio::test]
    async fn accord_without_param_is_rejected() {
        let h = harness();

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=accord"))
            .await;

        assert_eq!(response.encode(), "Reference=1042&Action=ACCORD&Reponse=ERROR");
        assert!(h.orders.mutations().is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // ERREUR / REFUS / ANNULATION
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn erreur_fails_order_and_releases_stock() {
        let h = harness();

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=ERREUR"))
            .await;

        assert_eq!(response.value(), Some(&ResponseValue::Ok));
        assert_eq!(
            h.orders.mutations(),
            vec![
                OrderMutation::MarkFailed {
                    reference: reference(),
                    note: "Transaction error".into(),
                },
                OrderMutation::ReleaseStock {
                    reference: reference(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn repeated_erreur_fails_order_once() {
        let h = harness();
        let callback = params("Reference=1042&Action=ERREUR");

        let first = h.reconciler.handle_params(&callback).await;
        let second = h.reconciler.handle_params(&callback).await;

        assert_eq!(first, second);
        let failed = h
            .orders
            .mutations()
            .into_iter()
            .filter(|m| matches!(m, OrderMutation::MarkFailed { .. }))
            .count();
        assert_eq!(failed, 1);
        assert_eq!(h.orders.notes(&reference()), vec!["Transaction error"]);
        assert!(h.orders.stock_released(&reference()));
    }

    #[tokio::test]
    async fn erreur_retry_releases_stock_after_store_failure() {
        let orders = Arc::new(FlakyOrders::new(order()));
        orders.fail_once("release_stock");
        let reconciler =
            CallbackReconciler::new(orders.clone(), Arc::new(RecordingGatewayLogger::new()));
        let callback = params("Reference=1042&Action=ERREUR");

        let first = reconciler.handle_params(&callback).await;
        assert_eq!(first.value(), Some(&ResponseValue::Error));
        assert_eq!(orders.inner.get(&reference()).unwrap().status, OrderStatus::Failed);
        assert!(!orders.inner.stock_released(&reference()));

        let second = reconciler.handle_params(&callback).await;

        assert_eq!(second.value(), Some(&ResponseValue::Ok));
        assert!(orders.inner.stock_released(&reference()));
        assert_eq!(orders.inner.notes(&reference()), vec!["Transaction error"]);
    }

    #[tokio::test]
    async fn accord_retry_after_store_failure_notes_approval_once() {
        let orders = Arc::new(FlakyOrders::new(order()));
        orders.fail_once("mark_paid");
        let reconciler =
            CallbackReconciler::new(orders.clone(), Arc::new(RecordingGatewayLogger::new()));
        let callback = params("Reference=1042&Action=ACCORD&Param=TX-77");

        let first = reconciler.handle_params(&callback).await;
        assert_eq!(first.value(), Some(&ResponseValue::Error));
        assert!(orders.inner.notes(&reference()).is_empty());

        let second = reconciler.handle_params(&callback).await;

        assert_eq!(second.value(), Some(&ResponseValue::Ok));
        assert_eq!(
            orders.inner.get(&reference()).unwrap().status,
            OrderStatus::Processing
        );
        assert_eq!(
            orders.inner.notes(&reference()),
            vec!["Credit Card Transaction Approved"]
        );
    }

    #[tokio::test]
    async fn refus_cancels_with_refused_note() {
        let h = harness();

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=Refus"))
            .await;

        assert_eq!(response.encode(), "Reference=1042&Action=REFUS&Reponse=OK");
        let recorded = h.orders.mutations();
        assert_eq!(recorded.len(), 1);
        match &recorded[0] {
            OrderMutation::MarkCancelled { reference: r, note } => {
                assert_eq!(r, &reference());
                assert!(note.contains("refused"));
            }
            other => panic!("Expected MarkCancelled, got {:?}", other),
        }
        assert_eq!(h.orders.get(&reference()).unwrap().status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn annulation_cancels_with_canceled_note() {
        let h = harness();

        h.reconciler
            .handle_params(&params("Reference=1042&Action=annulation"))
            .await;

        assert_eq!(h.orders.notes(&reference()), vec!["Transaction canceled"]);
    }

    #[tokio::test]
    async fn cancelling_a_paid_order_is_skipped_but_acknowledged() {
        let h = harness_with(order().with_status(OrderStatus::Completed));

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=ANNULATION"))
            .await;

        assert_eq!(response.value(), Some(&ResponseValue::Ok));
        assert!(h.orders.mutations().is_empty());
        assert!(h.logger.events().contains(&GatewayEvent::TransitionSkipped {
            reference: "1042".into(),
            action: "ANNULATION".into(),
            status: OrderStatus::Completed,
            reason: SkipReason::NotAllowed,
        }));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Unrecognised and invalid callbacks
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unknown_action_answers_empty_body() {
        let h = harness();

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=FOOBAR"))
            .await;

        assert_eq!(response, CallbackResponse::Unrecognized);
        assert_eq!(response.encode(), "");
        assert!(h.orders.mutations().is_empty());
    }

    #[tokio::test]
    async fn unknown_action_without_reference_still_answers_empty_body() {
        let h = harness();

        let response = h.reconciler.handle_params(&params("Action=FOOBAR")).await;

        assert_eq!(response.encode(), "");
    }

    #[tokio::test]
    async fn missing_reference_answers_error() {
        let h = harness();

        let response = h.reconciler.handle_params(&params("Action=REFUS")).await;

        assert_eq!(response.encode(), "Reference=&Action=REFUS&Reponse=ERROR");
        assert!(matches!(
            h.logger.events().as_slice(),
            [GatewayEvent::CallbackRejected { .. }]
        ));
    }

    #[tokio::test]
    async fn missing_action_answers_error() {
        let h = harness();

        let response = h.reconciler.handle_params(&params("Reference=1042")).await;

        assert_eq!(response.encode(), "Reference=1042&Action=&Reponse=ERROR");
    }

    #[tokio::test]
    async fn unknown_order_answers_error_without_mutation() {
        let h = harness();

        let response = h
            .reconciler
            .handle_params(&params("Reference=777&Action=ACCORD&Param=TX-1"))
            .await;

        assert_eq!(response.encode(), "Reference=777&Action=ACCORD&Reponse=ERROR");
        assert!(h.orders.mutations().is_empty());
        assert!(h.logger.events().contains(&GatewayEvent::OrderMissing {
            reference: "777".into()
        }));
    }

    #[tokio::test]
    async fn try_reconcile_reports_missing_order() {
        let h = harness();
        let request = params("Reference=777&Action=DETAIL").parse().unwrap();

        let result = h.reconciler.try_reconcile(&request).await;

        assert!(matches!(result, Err(GatewayError::OrderNotFound(_))));
    }

    #[tokio::test]
    async fn store_failure_answers_error() {
        let logger = Arc::new(RecordingGatewayLogger::new());
        let reconciler = CallbackReconciler::new(Arc::new(BrokenOrders), logger.clone());

        let response = reconciler
            .handle_params(&params("Reference=1042&Action=DETAIL"))
            .await;

        assert_eq!(response.value(), Some(&ResponseValue::Error));
        assert!(matches!(
            logger.events().last(),
            Some(GatewayEvent::Failure { .. })
        ));
    }

    #[tokio::test]
    async fn reply_round_trips_through_decode() {
        let h = harness();

        let response = h
            .reconciler
            .handle_params(&params("Reference=1042&Action=DETAIL"))
            .await;

        assert_eq!(CallbackResponse::decode(&response.encode()).unwrap(), response);
    }
}
