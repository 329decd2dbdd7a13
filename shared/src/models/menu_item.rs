//! Menu item model and the menu-item reference sum type

use serde::{Deserialize, Serialize};

/// Menu item as served by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Backend id; older records use `_id`
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    /// Price in XOF
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Reference to a menu item inside an order item.
///
/// The backend sends either a bare id string or the populated object,
/// depending on whether the query expanded the reference. Both shapes
/// deserialize here; [`MenuItemRef::id`] is the single normalization
/// point the rest of the code goes through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MenuItemRef {
    Resolved(MenuItem),
    Unresolved(String),
}

impl MenuItemRef {
    /// The referenced id, whatever shape the backend sent.
    ///
    /// A populated object without an id yields an empty string; callers
    /// tolerate that rather than repair it.
    pub fn id(&self) -> &str {
        match self {
            MenuItemRef::Resolved(item) => &item.id,
            MenuItemRef::Unresolved(id) => id,
        }
    }

    /// Name snapshot, only available when resolved
    pub fn name(&self) -> Option<&str> {
        match self {
            MenuItemRef::Resolved(item) => Some(&item.name),
            MenuItemRef::Unresolved(_) => None,
        }
    }

    /// Catalog price, only available when resolved
    pub fn price(&self) -> Option<f64> {
        match self {
            MenuItemRef::Resolved(item) => Some(item.price),
            MenuItemRef::Unresolved(_) => None,
        }
    }
}
