//! Admin dashboard: every order, every action

use shared::client::Role;
use shared::lifecycle;
use shared::models::{Order, OrderStatus};
use shared::order::OrderAction;

use crate::views::{DateScope, OrderFilter, OrderListView};

use super::{ListSource, OrderBoard};

pub struct AdminDashboard {
    pub board: OrderBoard,
}

impl Default for AdminDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminDashboard {
    pub fn new() -> Self {
        let filter = OrderFilter {
            scope: DateScope::Today,
            ..OrderFilter::default()
        };
        Self {
            board: OrderBoard::new(ListSource::All, OrderListView::with_filter(filter)),
        }
    }

    pub fn actions(&self, order: &Order) -> Vec<OrderAction> {
        lifecycle::actions_for_role(order.status, Role::Admin)
    }

    /// Status tabs with their live counts, consistent with what each
    /// tab displays when selected
    pub fn status_tabs(&self) -> Vec<(OrderStatus, usize)> {
        OrderStatus::ALL
            .iter()
            .map(|s| (*s, self.board.view.status_count(*s)))
            .collect()
    }

    /// Full history: drop the date scope, most recent first
    pub fn show_history(&mut self) {
        self.board.view.set_scope(DateScope::All);
    }
}
