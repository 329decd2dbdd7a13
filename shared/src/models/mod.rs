//! Domain models shared between the client and the dashboards

pub mod menu_item;
pub mod order;
pub mod payment;
pub mod staff;
pub mod stats;

pub use menu_item::{MenuItem, MenuItemRef};
pub use order::{Order, OrderItem, OrderStatus};
pub use payment::PaymentMethod;
pub use staff::StaffRef;
pub use stats::OrderStats;
