//! Shared types for the Calao POS front-end
//!
//! Common types used across the client and dashboard crates: the order
//! model, the order lifecycle table, auth DTOs and response envelopes.

pub mod client;
pub mod models;
pub mod order;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{MenuItem, MenuItemRef, Order, OrderItem, OrderStats, OrderStatus, PaymentMethod, StaffRef};
pub use order::lifecycle::{self, OrderAction};
