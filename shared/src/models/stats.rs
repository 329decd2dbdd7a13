//! Order statistics snapshot
//!
//! Read-only aggregate fetched from `GET /orders/stats`. The client
//! never mutates it, only re-fetches.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::order::OrderStatus;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub today_orders: u64,
    #[serde(default)]
    pub yesterday_orders: u64,
    /// Revenue in XOF
    #[serde(default)]
    pub today_revenue: f64,
    #[serde(default)]
    pub yesterday_revenue: f64,
    /// Per-status counts, keyed by the wire status codes
    #[serde(default)]
    pub by_status: HashMap<OrderStatus, u64>,
}

impl OrderStats {
    /// Count for one status, absent statuses read as zero
    pub fn count(&self, status: OrderStatus) -> u64 {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
