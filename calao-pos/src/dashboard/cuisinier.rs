//! Cuisinier dashboard: the kitchen queue

use shared::client::Role;
use shared::lifecycle;
use shared::models::Order;
use shared::order::OrderAction;

use crate::backend::OrderBackend;
use crate::views::{OrderFilter, OrderListView, SortOrder};

use super::{ListSource, OrderBoard};

pub struct CuisinierDashboard {
    pub board: OrderBoard,
}

impl Default for CuisinierDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl CuisinierDashboard {
    /// Fed by the kitchen endpoint, oldest orders first
    pub fn new() -> Self {
        let mut view = OrderListView::with_filter(OrderFilter::default());
        view.set_sort(SortOrder::OldestFirst);
        Self {
            board: OrderBoard::new(ListSource::Kitchen, view),
        }
    }

    pub fn actions(&self, order: &Order) -> Vec<OrderAction> {
        lifecycle::actions_for_role(order.status, Role::Cuisinier)
    }

    pub async fn start_preparation(
        &mut self,
        backend: &impl OrderBackend,
        order: &Order,
    ) -> bool {
        self.board
            .transition(backend, order, OrderAction::StartPreparation)
            .await
    }

    pub async fn mark_ready(&mut self, backend: &impl OrderBackend, order: &Order) -> bool {
        self.board
            .transition(backend, order, OrderAction::MarkReady)
            .await
    }

    pub async fn cancel(
        &mut self,
        backend: &impl OrderBackend,
        order: &Order,
        reason: Option<&str>,
    ) -> bool {
        self.board.cancel(backend, order, reason).await
    }
}
