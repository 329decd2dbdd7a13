//! Caissier dashboard: settle payments and print receipts

use calao_client::ClientError;
use shared::client::{Role, UserInfo};
use shared::lifecycle;
use shared::models::{Order, OrderStatus, PaymentMethod};
use shared::order::OrderAction;

use crate::backend::OrderBackend;
use crate::receipt::{ReceiptRenderer, WIDTH_80MM};
use crate::views::{DateScope, OrderFilter, OrderListView};

use super::{ListSource, OrderBoard};

pub struct CaissierDashboard {
    pub board: OrderBoard,
    cashier: UserInfo,
    receipt_width: usize,
}

impl CaissierDashboard {
    /// Defaults to today's orders awaiting payment
    pub fn new(cashier: UserInfo) -> Self {
        let filter = OrderFilter {
            scope: DateScope::Today,
            status: Some(OrderStatus::EnAttentePaiement),
            ..OrderFilter::default()
        };
        Self {
            board: OrderBoard::new(ListSource::All, OrderListView::with_filter(filter)),
            cashier,
            receipt_width: WIDTH_80MM,
        }
    }

    pub fn with_receipt_width(mut self, width: usize) -> Self {
        self.receipt_width = width;
        self
    }

    pub fn actions(&self, order: &Order) -> Vec<OrderAction> {
        lifecycle::actions_for_role(order.status, Role::Caissier)
    }

    /// Settle an order: process the payment, mark it completed, resync
    /// and hand back the receipt text.
    ///
    /// An "already paid" rejection on the payment call is tolerated:
    /// the warning is logged and the flow proceeds to completion rather
    /// than blocking the cashier. Any other failure aborts with an
    /// alert and returns `None`.
    pub async fn settle_and_print(
        &mut self,
        backend: &impl OrderBackend,
        order: &Order,
        method: PaymentMethod,
        amount_received: f64,
    ) -> Option<String> {
        let Some(id) = order.id.as_deref() else {
            self.board.alert = Some("Commande sans identifiant".to_string());
            return None;
        };
        if !lifecycle::available_actions(order.status).contains(&OrderAction::ProcessPayment) {
            self.board.alert = Some(format!(
                "Encaissement impossible pour une commande « {} »",
                order.status.label()
            ));
            return None;
        }

        self.board.is_busy = true;
        let settled = self
            .settle(backend, id, order.total_amount, method.clone())
            .await;
        self.board.is_busy = false;

        let mut settled = match settled {
            Ok(order) => order,
            Err(err) => {
                tracing::error!(error = %err, "échec de l'encaissement");
                self.board.alert = Some(err.user_message());
                self.board.refresh(backend).await;
                return None;
            }
        };
        self.board.refresh(backend).await;

        // Older backends do not echo the method back on completion
        if settled.payment_method.is_none() {
            settled.payment_method = Some(method);
        }
        let receipt = ReceiptRenderer::new(&settled, self.receipt_width)
            .amount_received(amount_received)
            .cashier(self.cashier.name.clone())
            .render();
        Some(receipt)
    }

    async fn settle(
        &self,
        backend: &impl OrderBackend,
        id: &str,
        amount: f64,
        method: PaymentMethod,
    ) -> Result<Order, ClientError> {
        match backend.process_payment(id, method, amount).await {
            Ok(_) => {}
            Err(ClientError::Conflict(message)) => {
                // Already paid: proceed to completion instead of
                // blocking the cashier.
                tracing::warn!(order_id = %id, %message, "paiement déjà enregistré, poursuite");
            }
            Err(err) => return Err(err),
        }
        backend.mark_completed(id).await
    }

    /// Reprint the receipt of a completed order
    pub fn reprint(&self, order: &Order) -> Option<String> {
        (order.status == OrderStatus::Termine).then(|| {
            ReceiptRenderer::new(order, self.receipt_width)
                .cashier(self.cashier.name.clone())
                .reprint()
                .render()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use crate::backend::testing::MockBackend;
    use crate::testutil::order;

    use super::*;

    fn fatou() -> UserInfo {
        UserInfo {
            id: "u-9".to_string(),
            username: "fatou".to_string(),
            name: "Fatou".to_string(),
            role: Role::Caissier,
        }
    }

    fn awaiting(id: &str) -> Order {
        let mut order = order(id, OrderStatus::EnAttentePaiement);
        order.total_amount = 15000.0;
        order
    }

    #[tokio::test]
    async fn settle_processes_payment_then_completes() {
        let backend = MockBackend::with_orders(vec![awaiting("ord-1")]);
        let mut dashboard = CaissierDashboard::new(fatou());

        let receipt = dashboard
            .settle_and_print(&backend, &awaiting("ord-1"), PaymentMethod::Wave, 20000.0)
            .await
            .expect("receipt");

        let calls = backend.calls();
        assert_eq!(calls[0], "payment:ord-1");
        assert_eq!(calls[1], "mark-completed:ord-1");
        assert!(receipt.contains("Monnaie"));
        assert!(receipt.contains("5 000 XOF"));
        assert!(receipt.contains("Caissier"));
        assert!(receipt.contains("Fatou"));
    }

    #[tokio::test]
    async fn already_paid_conflict_proceeds_to_completion() {
        let backend = MockBackend::with_orders(vec![awaiting("ord-1")]);
        backend.payment_conflict.store(true, Ordering::SeqCst);
        let mut dashboard = CaissierDashboard::new(fatou());

        let receipt = dashboard
            .settle_and_print(&backend, &awaiting("ord-1"), PaymentMethod::Especes, 15000.0)
            .await;

        assert!(receipt.is_some());
        assert!(
            backend
                .calls()
                .contains(&"mark-completed:ord-1".to_string())
        );
        assert!(dashboard.board.alert().is_none());
    }

    #[tokio::test]
    async fn other_payment_failures_abort_with_an_alert() {
        let backend = MockBackend::with_orders(vec![awaiting("ord-1")]);
        backend.fail_payment.store(true, Ordering::SeqCst);
        let mut dashboard = CaissierDashboard::new(fatou());

        let receipt = dashboard
            .settle_and_print(&backend, &awaiting("ord-1"), PaymentMethod::Especes, 15000.0)
            .await;

        assert!(receipt.is_none());
        assert_eq!(dashboard.board.alert(), Some("Paiement refusé"));
        assert!(
            !backend
                .calls()
                .contains(&"mark-completed:ord-1".to_string())
        );
        assert!(!dashboard.board.is_busy());
    }

    #[tokio::test]
    async fn settling_is_only_offered_on_awaiting_payment() {
        let backend = MockBackend::default();
        let mut dashboard = CaissierDashboard::new(fatou());

        let done = order("ord-2", OrderStatus::Termine);
        let receipt = dashboard
            .settle_and_print(&backend, &done, PaymentMethod::Especes, 1000.0)
            .await;

        assert!(receipt.is_none());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn reprint_is_reserved_for_completed_orders() {
        let dashboard = CaissierDashboard::new(fatou());

        let done = order("ord-1", OrderStatus::Termine);
        let receipt = dashboard.reprint(&done).expect("reprint");
        assert!(receipt.contains("*** RÉIMPRESSION ***"));

        let pending = order("ord-2", OrderStatus::EnAttente);
        assert!(dashboard.reprint(&pending).is_none());
    }
}
