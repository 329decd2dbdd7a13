//! Order endpoints
//!
//! One method per backend route; every status transition is its own
//! call, the client never infers transitions locally.

use urlencoding::encode;
use uuid::Uuid;

use shared::models::{Order, OrderStats, PaymentMethod};
use shared::order::requests::{
    CancelRequest, CreateOrderRequest, PaymentRequest, UpdatePaymentRequest,
};
use shared::response::OrderListPayload;

use crate::{ClientResult, HttpClient};

/// Typed access to the order endpoints
#[derive(Debug, Clone)]
pub struct OrderApi {
    http: HttpClient,
}

impl OrderApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Underlying HTTP client (auth calls live there)
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    // ========== Queries ==========

    /// `GET /orders` — both historical response shapes normalize to a list
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        let payload: OrderListPayload = self.http.get("/orders").await?;
        Ok(payload.into_orders())
    }

    /// `GET /orders/kitchen` — the cook-facing subset
    pub async fn kitchen_orders(&self) -> ClientResult<Vec<Order>> {
        let payload: OrderListPayload = self.http.get("/orders/kitchen").await?;
        Ok(payload.into_orders())
    }

    /// `GET /orders/:id`
    pub async fn get_order(&self, id: &str) -> ClientResult<Order> {
        self.http.get(&format!("/orders/{}", encode(id))).await
    }

    /// `GET /orders/stats`
    pub async fn stats(&self) -> ClientResult<OrderStats> {
        self.http.get("/orders/stats").await
    }

    // ========== Mutations ==========

    /// `POST /orders`
    pub async fn create_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
        self.http.post("/orders", request).await
    }

    /// `PUT /orders/:id` — partial update, payment method only
    pub async fn update_payment_method(
        &self,
        id: &str,
        payment_method: PaymentMethod,
    ) -> ClientResult<Order> {
        let request = UpdatePaymentRequest { payment_method };
        self.http
            .put(&format!("/orders/{}", encode(id)), &request)
            .await
    }

    /// `PUT /orders/:id/complete` — full update including items, used by
    /// the edit-mode resubmission
    pub async fn update_order_complete(
        &self,
        id: &str,
        request: &CreateOrderRequest,
    ) -> ClientResult<Order> {
        self.http
            .put(&format!("/orders/{}/complete", encode(id)), request)
            .await
    }

    /// `DELETE /orders/:id` — cancel, with an optional reason
    pub async fn cancel_order(&self, id: &str, reason: Option<&str>) -> ClientResult<Order> {
        let request = CancelRequest {
            reason: reason.map(str::to_string),
        };
        self.http
            .delete(&format!("/orders/{}", encode(id)), &request)
            .await
    }

    // ========== Status transitions ==========

    /// `PATCH /orders/:id/send-to-kitchen`
    pub async fn send_to_kitchen(&self, id: &str) -> ClientResult<Order> {
        self.http
            .patch(&format!("/orders/{}/send-to-kitchen", encode(id)))
            .await
    }

    /// `PATCH /orders/:id/start-cooking`
    pub async fn start_cooking(&self, id: &str) -> ClientResult<Order> {
        self.http
            .patch(&format!("/orders/{}/start-cooking", encode(id)))
            .await
    }

    /// `PATCH /orders/:id/finish-cooking`
    pub async fn finish_cooking(&self, id: &str) -> ClientResult<Order> {
        self.http
            .patch(&format!("/orders/{}/finish-cooking", encode(id)))
            .await
    }

    /// `PATCH /orders/:id/mark-completed`
    pub async fn mark_completed(&self, id: &str) -> ClientResult<Order> {
        self.http
            .patch(&format!("/orders/{}/mark-completed", encode(id)))
            .await
    }

    // ========== Payments ==========

    /// `POST /orders/:id/payment` with a client-generated transaction
    /// reference.
    pub async fn process_payment(
        &self,
        id: &str,
        payment_method: PaymentMethod,
        amount: f64,
    ) -> ClientResult<Order> {
        let request = PaymentRequest {
            payment_method,
            amount,
            reference: Uuid::new_v4().to_string(),
        };
        self.http
            .post(&format!("/orders/{}/payment", encode(id)), &request)
            .await
    }
}
