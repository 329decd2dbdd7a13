//! Order status state machine
//!
//! One authoritative table of which actions a status admits and what
//! status each transition lands on. Every dashboard consults this table
//! instead of keeping its own copy; the backend remains the final
//! authority and rejections must be handled gracefully.
//!
//! ```text
//! EN_ATTENTE ─> EN_PREPARATION ─> EN_COURS ─> PRET ─> EN_ATTENTE_PAIEMENT ─> TERMINE
//!      │               │
//!      └───────────────┴──> ANNULE
//! ```

use crate::client::Role;
use crate::models::OrderStatus;

/// Actions the UI may expose on an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Reopen the draft composer on this order
    EditItems,
    /// Record or change the payment method, status unchanged
    RecordPayment,
    SendToKitchen,
    StartPreparation,
    MarkReady,
    MarkCompleted,
    /// Cashier settlement: process payment then terminate
    ProcessPayment,
    Cancel,
}

impl OrderAction {
    /// Status this action transitions to; `None` for actions that leave
    /// the status unchanged (item edits, payment-method edits).
    pub fn target(&self) -> Option<OrderStatus> {
        match self {
            OrderAction::EditItems | OrderAction::RecordPayment => None,
            OrderAction::SendToKitchen => Some(OrderStatus::EnPreparation),
            OrderAction::StartPreparation => Some(OrderStatus::EnCours),
            OrderAction::MarkReady => Some(OrderStatus::Pret),
            OrderAction::MarkCompleted => Some(OrderStatus::Termine),
            OrderAction::ProcessPayment => Some(OrderStatus::Termine),
            OrderAction::Cancel => Some(OrderStatus::Annule),
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::EditItems => "Modifier",
            OrderAction::RecordPayment => "Mode de paiement",
            OrderAction::SendToKitchen => "Envoyer en cuisine",
            OrderAction::StartPreparation => "Commencer la préparation",
            OrderAction::MarkReady => "Marquer prêt",
            OrderAction::MarkCompleted => "Terminer",
            OrderAction::ProcessPayment => "Encaisser",
            OrderAction::Cancel => "Annuler",
        }
    }
}

/// Actions available in a status. Terminal statuses (TERMINE, ANNULE)
/// yield an empty set; viewing and receipt reprint are not actions.
pub fn available_actions(status: OrderStatus) -> &'static [OrderAction] {
    match status {
        OrderStatus::EnAttente => &[
            OrderAction::EditItems,
            OrderAction::SendToKitchen,
            OrderAction::Cancel,
            OrderAction::RecordPayment,
        ],
        OrderStatus::EnPreparation => &[OrderAction::StartPreparation, OrderAction::Cancel],
        OrderStatus::EnCours => &[OrderAction::MarkReady],
        OrderStatus::Pret => &[OrderAction::MarkCompleted, OrderAction::RecordPayment],
        OrderStatus::EnAttentePaiement => &[OrderAction::ProcessPayment],
        OrderStatus::Termine | OrderStatus::Annule => &[],
    }
}

/// Cancellation is only reachable from the early states
pub fn can_cancel(status: OrderStatus) -> bool {
    available_actions(status).contains(&OrderAction::Cancel)
}

fn allowed_for_role(action: OrderAction, role: Role) -> bool {
    match role {
        Role::Admin => true,
        Role::Serveur => matches!(
            action,
            OrderAction::EditItems
                | OrderAction::SendToKitchen
                | OrderAction::Cancel
                | OrderAction::RecordPayment
        ),
        Role::Cuisinier => matches!(
            action,
            OrderAction::StartPreparation | OrderAction::MarkReady | OrderAction::Cancel
        ),
        Role::Caissier => matches!(
            action,
            OrderAction::ProcessPayment | OrderAction::MarkCompleted | OrderAction::RecordPayment
        ),
    }
}

/// The role-scoped subset of [`available_actions`] a dashboard exposes
pub fn actions_for_role(status: OrderStatus, role: Role) -> Vec<OrderAction> {
    available_actions(status)
        .iter()
        .copied()
        .filter(|a| allowed_for_role(*a, role))
        .collect()
}
