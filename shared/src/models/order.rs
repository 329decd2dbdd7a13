//! Order model
//!
//! The canonical order entity as returned by the backend. All durable
//! state lives server-side; the client never recomputes `total_amount`
//! for persistence, only for display before submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::menu_item::MenuItemRef;
use super::payment::PaymentMethod;
use super::staff::StaffRef;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    EnAttente,
    EnPreparation,
    EnCours,
    Pret,
    EnAttentePaiement,
    Termine,
    Annule,
}

impl OrderStatus {
    /// Terminal statuses admit no further transition
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Termine | OrderStatus::Annule)
    }

    /// Display label for dashboard tabs and receipts
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::EnAttente => "En attente",
            OrderStatus::EnPreparation => "En préparation",
            OrderStatus::EnCours => "En cours",
            OrderStatus::Pret => "Prêt",
            OrderStatus::EnAttentePaiement => "En attente de paiement",
            OrderStatus::Termine => "Terminé",
            OrderStatus::Annule => "Annulé",
        }
    }

    /// All statuses, in lifecycle order (used for dashboard tabs)
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::EnAttente,
        OrderStatus::EnPreparation,
        OrderStatus::EnCours,
        OrderStatus::Pret,
        OrderStatus::EnAttentePaiement,
        OrderStatus::Termine,
        OrderStatus::Annule,
    ];
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item: MenuItemRef,
    /// Name snapshot taken at order time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price captured at order time, decoupled from later catalog changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderItem {
    /// Captured unit price, falling back to the resolved catalog price
    pub fn unit_price(&self) -> f64 {
        self.price
            .or_else(|| self.menu_item.price())
            .unwrap_or(0.0)
    }

    /// Line total: unit price × quantity
    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }

    /// Display name: item snapshot, then resolved catalog name
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or_else(|| self.menu_item.name())
            .unwrap_or("")
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned id; older records use `_id`
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    /// Human-readable order number
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Server-computed total in XOF
    #[serde(default)]
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    /// The serveur who created the order
    #[serde(default, alias = "serveur", skip_serializing_if = "Option::is_none")]
    pub server: Option<StaffRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// Order-level note entered during composition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Only set when status is ANNULE
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Last-modification time, falling back to creation time
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }

    /// Whether the order was created by the given user, accepting the
    /// legacy id field on the staff reference.
    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.server
            .as_ref()
            .is_some_and(|s| s.is_user(user_id))
    }
}
