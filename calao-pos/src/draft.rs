//! Order draft store
//!
//! In-memory state for one order being composed or edited. Either
//! becomes a create/full-update request on submission or is discarded;
//! nothing here is persisted.

use thiserror::Error;

use shared::models::{MenuItem, Order, PaymentMethod};
use shared::order::requests::{CreateOrderRequest, OrderItemInput};

use crate::backend::OrderBackend;

/// Currency tag carried on draft items
pub const DEFAULT_CURRENCY: &str = "XOF";

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Impossible de créer une commande vide")]
    EmptyDraft,
}

/// Client-local line item, before submission
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub menu_item_id: String,
    pub name: String,
    /// Unit price in XOF
    pub price: f64,
    pub currency: &'static str,
    pub image: Option<String>,
    pub quantity: u32,
    pub notes: Option<String>,
}

/// The in-progress order
#[derive(Debug, Default)]
pub struct DraftOrder {
    items: Vec<DraftItem>,
    table_number: Option<u32>,
    notes: Option<String>,
    /// Id of the order being edited, `None` when composing a new one
    editing: Option<String>,
    error: Option<String>,
    is_creating: bool,
}

impl DraftOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an edit-mode draft from a persisted order.
    ///
    /// Populated menu-item objects and bare id strings both normalize to
    /// an id; an unresolvable reference leaves the id empty, which the
    /// composer tolerates but does not repair.
    pub fn from_order(order: &Order) -> Self {
        let items = order
            .items
            .iter()
            .map(|item| DraftItem {
                menu_item_id: item.menu_item.id().to_string(),
                name: item.display_name().to_string(),
                price: item.unit_price(),
                currency: DEFAULT_CURRENCY,
                image: None,
                quantity: item.quantity,
                notes: item.notes.clone(),
            })
            .collect();
        Self {
            items,
            table_number: order.table_number,
            notes: order.notes.clone(),
            editing: order.id.clone(),
            error: None,
            is_creating: false,
        }
    }

    // ========== Item operations ==========

    /// Add one unit of a menu item; an item already in the draft gets
    /// its quantity incremented instead of a duplicate entry.
    pub fn add_item(&mut self, menu_item: &MenuItem) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.menu_item_id == menu_item.id)
        {
            existing.quantity += 1;
            return;
        }
        self.items.push(DraftItem {
            menu_item_id: menu_item.id.clone(),
            name: menu_item.name.clone(),
            price: menu_item.price,
            currency: DEFAULT_CURRENCY,
            image: menu_item.image.clone(),
            quantity: 1,
            notes: None,
        });
    }

    /// Remove one unit; the item disappears when its quantity reaches
    /// zero. Unknown ids are a no-op.
    pub fn remove_item(&mut self, menu_item_id: &str) {
        let Some(pos) = self.items.iter().position(|i| i.menu_item_id == menu_item_id) else {
            return;
        };
        if self.items[pos].quantity > 1 {
            self.items[pos].quantity -= 1;
        } else {
            self.items.remove(pos);
        }
    }

    /// Set a quantity exactly; zero removes the item. No upper bound is
    /// enforced client-side.
    pub fn update_quantity(&mut self, menu_item_id: &str, quantity: u32) {
        let Some(pos) = self.items.iter().position(|i| i.menu_item_id == menu_item_id) else {
            return;
        };
        if quantity == 0 {
            self.items.remove(pos);
        } else {
            self.items[pos].quantity = quantity;
        }
    }

    /// Replace the per-item note; an empty string clears it
    pub fn update_item_notes(&mut self, menu_item_id: &str, notes: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.menu_item_id == menu_item_id) {
            item.notes = (!notes.is_empty()).then(|| notes.to_string());
        }
    }

    pub fn set_order_notes(&mut self, notes: &str) {
        self.notes = (!notes.is_empty()).then(|| notes.to_string());
    }

    pub fn set_table_number(&mut self, table_number: Option<u32>) {
        self.table_number = table_number;
    }

    /// Reset everything: items, notes, table number and error state.
    /// Called after a successful submission or an explicit cancel.
    pub fn clear(&mut self) {
        self.items.clear();
        self.table_number = None;
        self.notes = None;
        self.editing = None;
        self.error = None;
    }

    // ========== Derived state ==========

    /// Display total, recomputed on every read
    pub fn total_amount(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }

    /// Sum of quantities
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[DraftItem] {
        &self.items
    }

    pub fn table_number(&self) -> Option<u32> {
        self.table_number
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_creating(&self) -> bool {
        self.is_creating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ========== Submission ==========

    /// Serialize the draft into the create/update payload. Empty drafts
    /// are rejected here, before any network call.
    pub fn build_request(&self) -> Result<CreateOrderRequest, DraftError> {
        if self.items.is_empty() {
            return Err(DraftError::EmptyDraft);
        }
        Ok(CreateOrderRequest {
            items: self
                .items
                .iter()
                .map(|i| OrderItemInput {
                    menu_item: i.menu_item_id.clone(),
                    quantity: i.quantity,
                    notes: i.notes.clone(),
                })
                .collect(),
            table_number: self.table_number,
            notes: self.notes.clone(),
            payment_method: Some(PaymentMethod::Especes),
        })
    }

    /// Submit the draft: create a new order, or resubmit the full update
    /// when editing. On success the draft is cleared and the canonical
    /// order returned; on failure the error message is recorded and
    /// `None` returned. Callers check for `None`, nothing escapes this
    /// boundary.
    pub async fn submit(&mut self, backend: &impl OrderBackend) -> Option<Order> {
        self.error = None;
        let request = match self.build_request() {
            Ok(request) => request,
            Err(err) => {
                self.error = Some(err.to_string());
                return None;
            }
        };

        self.is_creating = true;
        let result = match self.editing.as_deref() {
            Some(id) => backend.update_order_complete(id, &request).await,
            None => backend.create_order(&request).await,
        };
        self.is_creating = false;

        match result {
            Ok(order) => {
                self.clear();
                Some(order)
            }
            Err(err) => {
                tracing::error!(error = %err, "échec de l'envoi de la commande");
                self.error = Some(err.user_message());
                None
            }
        }
    }
}
