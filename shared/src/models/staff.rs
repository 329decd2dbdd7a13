//! Staff reference embedded in orders

use serde::{Deserialize, Serialize};

/// Staff member assigned to an order (the serveur who created it)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffRef {
    /// Backend id; older records use `_id`
    #[serde(default, alias = "_id")]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

impl StaffRef {
    /// Whether this reference points at the given user id, accepting
    /// either the current or the legacy id field.
    pub fn is_user(&self, user_id: &str) -> bool {
        !self.id.is_empty() && self.id == user_id
    }
}
