//! Order lifecycle and request payloads

pub mod lifecycle;
pub mod requests;

pub use lifecycle::OrderAction;
pub use requests::{CancelRequest, CreateOrderRequest, OrderItemInput, PaymentRequest, UpdatePaymentRequest};
