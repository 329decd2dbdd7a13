//! Role dashboards
//!
//! Each role gets a thin service over the same building blocks: an
//! [`OrderBoard`] (list + stats + refresh/transition plumbing), the
//! lifecycle table for which buttons to show, and the draft/workflow
//! pair for composition. Transition failures are non-fatal: the error
//! becomes an alert, the displayed status is never advanced locally,
//! and the board resyncs from the server.

mod admin;
mod caissier;
mod cuisinier;
mod serveur;

pub use admin::AdminDashboard;
pub use caissier::CaissierDashboard;
pub use cuisinier::CuisinierDashboard;
pub use serveur::ServeurDashboard;

use std::sync::Arc;

use tokio::sync::Mutex;

use shared::lifecycle;
use shared::models::{Order, OrderStats, PaymentMethod};
use shared::order::OrderAction;

use crate::backend::OrderBackend;
use crate::poll::{REFRESH_INTERVAL, RefreshTask};
use crate::views::OrderListView;

/// Which list endpoint feeds a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListSource {
    All,
    Kitchen,
}

/// Order list, stats and mutation plumbing shared by every dashboard
#[derive(Debug)]
pub struct OrderBoard {
    pub view: OrderListView,
    source: ListSource,
    stats: Option<OrderStats>,
    alert: Option<String>,
    is_busy: bool,
}

impl OrderBoard {
    fn new(source: ListSource, view: OrderListView) -> Self {
        Self {
            view,
            source,
            stats: None,
            alert: None,
            is_busy: false,
        }
    }

    pub fn stats(&self) -> Option<&OrderStats> {
        self.stats.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.is_busy
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Consume the pending alert for display
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Re-fetch the list and the stats. A failed fetch keeps the
    /// previous data on screen; only a warning is logged.
    pub async fn refresh(&mut self, backend: &impl OrderBackend) {
        let orders = match self.source {
            ListSource::All => backend.list_orders().await,
            ListSource::Kitchen => backend.kitchen_orders().await,
        };
        match orders {
            Ok(orders) => self.view.set_orders(orders),
            Err(err) => {
                tracing::warn!(error = %err, "échec du rafraîchissement, données conservées");
            }
        }

        match backend.stats().await {
            Ok(stats) => self.stats = Some(stats),
            Err(err) => {
                tracing::warn!(error = %err, "échec du chargement des statistiques");
            }
        }
    }

    /// Run one status transition. The action must be available for the
    /// order's current status; the backend stays the final authority
    /// and a rejection surfaces as an alert. The board resyncs either
    /// way, so the displayed status always comes from the server.
    pub async fn transition(
        &mut self,
        backend: &impl OrderBackend,
        order: &Order,
        action: OrderAction,
    ) -> bool {
        let Some(id) = order.id.as_deref() else {
            self.alert = Some("Commande sans identifiant".to_string());
            return false;
        };
        if !lifecycle::available_actions(order.status).contains(&action) {
            self.alert = Some(format!(
                "Action indisponible pour une commande « {} »",
                order.status.label()
            ));
            return false;
        }

        self.is_busy = true;
        let result = match action {
            OrderAction::SendToKitchen => backend.send_to_kitchen(id).await,
            OrderAction::StartPreparation => backend.start_cooking(id).await,
            OrderAction::MarkReady => backend.finish_cooking(id).await,
            OrderAction::MarkCompleted => backend.mark_completed(id).await,
            OrderAction::Cancel => backend.cancel_order(id, None).await,
            OrderAction::EditItems | OrderAction::RecordPayment | OrderAction::ProcessPayment => {
                self.is_busy = false;
                self.alert = Some("Action non prise en charge ici".to_string());
                return false;
            }
        };
        self.is_busy = false;

        let ok = match result {
            Ok(_) => {
                self.alert = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, ?action, "transition refusée");
                self.alert = Some(err.user_message());
                false
            }
        };

        self.refresh(backend).await;
        ok
    }

    /// Cancel with a reason; only available from the early states
    pub async fn cancel(
        &mut self,
        backend: &impl OrderBackend,
        order: &Order,
        reason: Option<&str>,
    ) -> bool {
        let Some(id) = order.id.as_deref() else {
            self.alert = Some("Commande sans identifiant".to_string());
            return false;
        };
        if !lifecycle::can_cancel(order.status) {
            self.alert = Some(format!(
                "Annulation impossible pour une commande « {} »",
                order.status.label()
            ));
            return false;
        }

        self.is_busy = true;
        let result = backend.cancel_order(id, reason).await;
        self.is_busy = false;

        let ok = match result {
            Ok(_) => {
                self.alert = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "annulation refusée");
                self.alert = Some(err.user_message());
                false
            }
        };

        self.refresh(backend).await;
        ok
    }

    /// Record or change the payment method without moving the status
    pub async fn record_payment_method(
        &mut self,
        backend: &impl OrderBackend,
        order: &Order,
        method: PaymentMethod,
    ) -> bool {
        let Some(id) = order.id.as_deref() else {
            self.alert = Some("Commande sans identifiant".to_string());
            return false;
        };
        if !lifecycle::available_actions(order.status).contains(&OrderAction::RecordPayment) {
            self.alert = Some(format!(
                "Mode de paiement non modifiable pour une commande « {} »",
                order.status.label()
            ));
            return false;
        }

        self.is_busy = true;
        let result = backend.update_payment_method(id, method).await;
        self.is_busy = false;

        let ok = match result {
            Ok(_) => {
                self.alert = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "mise à jour du paiement refusée");
                self.alert = Some(err.user_message());
                false
            }
        };

        self.refresh(backend).await;
        ok
    }
}

/// Start the periodic refresh for a board: one fixed-interval task per
/// dashboard instance, begun on mount. Dropping the returned handle
/// (dashboard teardown) stops it.
pub fn start_polling<B>(board: Arc<Mutex<OrderBoard>>, backend: Arc<B>) -> RefreshTask
where
    B: OrderBackend + 'static,
{
    RefreshTask::spawn(REFRESH_INTERVAL, move || {
        let board = board.clone();
        let backend = backend.clone();
        async move {
            board.lock().await.refresh(backend.as_ref()).await;
        }
    })
}
