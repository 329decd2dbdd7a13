//! Serveur dashboard: compose orders, send them to the kitchen

use shared::client::{Role, UserInfo};
use shared::lifecycle;
use shared::models::Order;
use shared::order::OrderAction;

use crate::backend::OrderBackend;
use crate::draft::DraftOrder;
use crate::views::{DateScope, OrderFilter, OrderListView, SortOrder};

use super::{ListSource, OrderBoard};

pub struct ServeurDashboard {
    pub board: OrderBoard,
    user: UserInfo,
}

impl ServeurDashboard {
    /// Scoped to the logged-in serveur's own orders of the day
    pub fn new(user: UserInfo) -> Self {
        let filter = OrderFilter {
            scope: DateScope::Today,
            owner: Some(user.id.clone()),
            ..OrderFilter::default()
        };
        Self {
            board: OrderBoard::new(ListSource::All, OrderListView::with_filter(filter)),
            user,
        }
    }

    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    /// Buttons to expose for one order
    pub fn actions(&self, order: &Order) -> Vec<OrderAction> {
        lifecycle::actions_for_role(order.status, Role::Serveur)
    }

    /// Switch between today's service and the personal history view
    pub fn show_today(&mut self) {
        self.board.view.set_scope(DateScope::Today);
        self.board.view.set_sort(SortOrder::RecentFirst);
    }

    pub fn show_history(&mut self) {
        self.board.view.set_scope(DateScope::Past);
        self.board.view.set_sort(SortOrder::RecentFirst);
    }

    /// Start composing a new order
    pub fn compose(&self) -> DraftOrder {
        DraftOrder::new()
    }

    /// Reopen an order in the composer; only pending orders are editable
    pub fn edit(&self, order: &Order) -> Option<DraftOrder> {
        lifecycle::available_actions(order.status)
            .contains(&OrderAction::EditItems)
            .then(|| DraftOrder::from_order(order))
    }

    pub async fn send_to_kitchen(&mut self, backend: &impl OrderBackend, order: &Order) -> bool {
        self.board
            .transition(backend, order, OrderAction::SendToKitchen)
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
