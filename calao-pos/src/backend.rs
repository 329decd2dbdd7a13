//! Backend seam
//!
//! The dashboards and the draft store talk to the backend through this
//! trait rather than the concrete REST client, so the behavior around
//! failures (stale data, retry screens, already-paid tolerance) is
//! unit-testable with a mock.

use async_trait::async_trait;

use calao_client::{ClientResult, OrderApi};
use shared::models::{Order, OrderStats, PaymentMethod};
use shared::order::requests::CreateOrderRequest;

#[async_trait]
pub trait OrderBackend: Send + Sync {
    async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order>;
    async fn update_order_complete(
        &self,
        id: &str,
        request: &CreateOrderRequest,
    ) -> ClientResult<Order>;
    async fn update_payment_method(
        &self,
        id: &str,
        method: PaymentMethod,
    ) -> ClientResult<Order>;
    async fn list_orders(&self) -> ClientResult<Vec<Order>>;
    async fn kitchen_orders(&self) -> ClientResult<Vec<Order>>;
    async fn get_order(&self, id: &str) -> ClientResult<Order>;
    async fn stats(&self) -> ClientResult<OrderStats>;
    async fn send_to_kitchen(&self, id: &str) -> ClientResult<Order>;
    async fn start_cooking(&self, id: &str) -> ClientResult<Order>;
    async fn finish_cooking(&self, id: &str) -> ClientResult<Order>;
    async fn mark_completed(&self, id: &str) -> ClientResult<Order>;
    async fn cancel_order(&self, id: &str, reason: Option<&str>) -> ClientResult<Order>;
    async fn process_payment(
        &self,
        id: &str,
        method: PaymentMethod,
        amount: f64,
    ) -> ClientResult<Order>;
}

#[async_trait]
impl OrderBackend for OrderApi {
    async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
        OrderApi::create_order(self, request).await
    }

    async fn update_order_complete(
        &self,
        id: &str,
        request: &CreateOrderRequest,
    ) -> ClientResult<Order> {
        OrderApi::update_order_complete(self, id, request).await
    }

    async fn update_payment_method(
        &self,
        id: &str,
        method: PaymentMethod,
    ) -> ClientResult<Order> {
        OrderApi::update_payment_method(self, id, method).await
    }

    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        OrderApi::list_orders(self).await
    }

    async fn kitchen_orders(&self) -> ClientResult<Vec<Order>> {
        OrderApi::kitchen_orders(self).await
    }

    async fn get_order(&self, id: &str) -> ClientResult<Order> {
        OrderApi::get_order(self, id).await
    }

    async fn stats(&self) -> ClientResult<OrderStats> {
        OrderApi::stats(self).await
    }

    async fn send_to_kitchen(&self, id: &str) -> ClientResult<Order> {
        OrderApi::send_to_kitchen(self, id).await
    }

    async fn start_cooking(&self, id: &str) -> ClientResult<Order> {
        OrderApi::start_cooking(self, id).await
    }

    async fn finish_cooking(&self, id: &str) -> ClientResult<Order> {
        OrderApi::finish_cooking(self, id).await
    }

    async fn mark_completed(&self, id: &str) -> ClientResult<Order> {
        OrderApi::mark_completed(self, id).await
    }

    async fn cancel_order(&self, id: &str, reason: Option<&str>) -> ClientResult<Order> {
        OrderApi::cancel_order(self, id, reason).await
    }

    async fn process_payment(
        &self,
        id: &str,
        method: PaymentMethod,
        amount: f64,
    ) -> ClientResult<Order> {
        OrderApi::process_payment(self, id, method, amount).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory backend for unit tests

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use calao_client::ClientError;
    use shared::models::OrderStatus;

    use super::*;

    #[derive(Default)]
    pub struct MockBackend {
        pub orders: Mutex<Vec<Order>>,
        pub stats: Mutex<OrderStats>,
        pub fail_list: AtomicBool,
        pub fail_stats: AtomicBool,
        pub fail_create: AtomicBool,
        pub fail_transitions: AtomicBool,
        pub payment_conflict: AtomicBool,
        pub fail_payment: AtomicBool,
        /// One entry per backend call, e.g. "create", "send-to-kitchen:ord-1"
        pub calls: Mutex<Vec<String>>,
    }

    impl MockBackend {
        pub fn with_orders(orders: Vec<Order>) -> Self {
            Self {
                orders: Mutex::new(orders),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn log(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn order_with_status(&self, id: &str, status: OrderStatus) -> Order {
            let mut order = self
                .orders
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.id.as_deref() == Some(id))
                .cloned()
                .unwrap_or_else(|| crate::testutil::order(id, status));
            order.status = status;
            order
        }
    }

    #[async_trait]
    impl OrderBackend for MockBackend {
        async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
            self.log("create");
            if self.fail_create.load(Ordering::SeqCst) {
                return Err(ClientError::Internal("Erreur serveur".to_string()));
            }
            let mut order = crate::testutil::order("ord-new", OrderStatus::EnAttente);
            order.table_number = request.table_number;
            order.notes = request.notes.clone();
            Ok(order)
        }

        async fn update_order_complete(
            &self,
            id: &str,
            _request: &CreateOrderRequest,
        ) -> ClientResult<Order> {
            self.log(format!("update-complete:{id}"));
            if self.fail_create.load(Ordering::SeqCst) {
                return Err(ClientError::Internal("Erreur serveur".to_string()));
            }
            Ok(self.order_with_status(id, OrderStatus::EnAttente))
        }

        async fn update_payment_method(
            &self,
            id: &str,
            _method: PaymentMethod,
        ) -> ClientResult<Order> {
            self.log(format!("update-payment:{id}"));
            Ok(self.order_with_status(id, OrderStatus::EnAttente))
        }

        async fn list_orders(&self) -> ClientResult<Vec<Order>> {
            self.log("list");
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(ClientError::Internal("Erreur serveur".to_string()));
            }
            Ok(self.orders.lock().unwrap().clone())
        }

        async fn kitchen_orders(&self) -> ClientResult<Vec<Order>> {
            self.log("kitchen");
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(ClientError::Internal("Erreur serveur".to_string()));
            }
            let orders = self.orders.lock().unwrap();
            Ok(orders
                .iter()
                .filter(|o| {
                    matches!(
                        o.status,
                        OrderStatus::EnAttente
                            | OrderStatus::EnPreparation
                            | OrderStatus::EnCours
                    )
                })
                .cloned()
                .collect())
        }

        async fn get_order(&self, id: &str) -> ClientResult<Order> {
            self.log(format!("get:{id}"));
            self.orders
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.id.as_deref() == Some(id))
                .cloned()
                .ok_or_else(|| ClientError::NotFound("Commande introuvable".to_string()))
        }

        async fn stats(&self) -> ClientResult<OrderStats> {
            self.log("stats");
            if self.fail_stats.load(Ordering::SeqCst) {
                return Err(ClientError::Internal("Erreur serveur".to_string()));
            }
            Ok(self.stats.lock().unwrap().clone())
        }

        async fn send_to_kitchen(&self, id: &str) -> ClientResult<Order> {
            self.log(format!("send-to-kitchen:{id}"));
            if self.fail_transitions.load(Ordering::SeqCst) {
                return Err(ClientError::Validation("Transition refusée".to_string()));
            }
            Ok(self.order_with_status(id, OrderStatus::EnPreparation))
        }

        async fn start_cooking(&self, id: &str) -> ClientResult<Order> {
            self.log(format!("start-cooking:{id}"));
            if self.fail_transitions.load(Ordering::SeqCst) {
                return Err(ClientError::Validation("Transition refusée".to_string()));
            }
            Ok(self.order_with_status(id, OrderStatus::EnCours))
        }

        async fn finish_cooking(&self, id: &str) -> ClientResult<Order> {
            self.log(format!("finish-cooking:{id}"));
            if self.fail_transitions.load(Ordering::SeqCst) {
                return Err(ClientError::Validation("Transition refusée".to_string()));
            }
            Ok(self.order_with_status(id, OrderStatus::Pret))
        }

        async fn mark_completed(&self, id: &str) -> ClientResult<Order> {
            self.log(format!("mark-completed:{id}"));
            if self.fail_transitions.load(Ordering::SeqCst) {
                return Err(ClientError::Validation("Transition refusée".to_string()));
            }
            Ok(self.order_with_status(id, OrderStatus::Termine))
        }

        async fn cancel_order(&self, id: &str, _reason: Option<&str>) -> ClientResult<Order> {
            self.log(format!("cancel:{id}"));
            if self.fail_transitions.load(Ordering::SeqCst) {
                return Err(ClientError::Validation("Transition refusée".to_string()));
            }
            Ok(self.order_with_status(id, OrderStatus::Annule))
        }

        async fn process_payment(
            &self,
            id: &str,
            _method: PaymentMethod,
            _amount: f64,
        ) -> ClientResult<Order> {
            self.log(format!("payment:{id}"));
            if self.payment_conflict.load(Ordering::SeqCst) {
                return Err(ClientError::Conflict("Commande déjà payée".to_string()));
            }
            if self.fail_payment.load(Ordering::SeqCst) {
                return Err(ClientError::Internal("Paiement refusé".to_string()));
            }
            Ok(self.order_with_status(id, OrderStatus::EnAttentePaiement))
        }
    }
}
