//! Wire response shapes
//!
//! The backend is not perfectly uniform: the order list endpoint has
//! returned both a bare array and a `{ "orders": [...] }` wrapper over
//! its lifetime. Both shapes normalize here; anything else reads as an
//! empty list.

use serde::Deserialize;

use crate::models::Order;

/// Payload of `GET /orders`, either shape
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrderListPayload {
    Wrapped { orders: Vec<Order> },
    Bare(Vec<Order>),
    Other(serde_json::Value),
}

impl OrderListPayload {
    /// Normalize to a plain list, defaulting to empty on unknown shapes
    pub fn into_orders(self) -> Vec<Order> {
        match self {
            OrderListPayload::Wrapped { orders } => orders,
            OrderListPayload::Bare(orders) => orders,
            OrderListPayload::Other(value) => {
                tracing::warn!(?value, "unrecognized order list shape, treating as empty");
                Vec::new()
            }
        }
    }
}

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best-effort message extraction from a raw response body
    pub fn extract_message(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed.message.or(parsed.error).filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_normalizes() {
        let payload: OrderListPayload =
            serde_json::from_str(r#"[{"status": "EN_ATTENTE"}]"#).unwrap();
        assert_eq!(payload.into_orders().len(), 1);
    }

    #[test]
    fn wrapped_array_normalizes() {
        let payload: OrderListPayload =
            serde_json::from_str(r#"{"orders": [{"status": "PRET"}, {"status": "TERMINE"}]}"#)
                .unwrap();
        assert_eq!(payload.into_orders().len(), 2);
    }

    #[test]
    fn unknown_shape_defaults_to_empty() {
        let payload: OrderListPayload =
            serde_json::from_str(r#"{"count": 3}"#).unwrap();
        assert!(payload.into_orders().is_empty());
    }

    #[test]
    fn extracts_backend_message() {
        assert_eq!(
            ErrorBody::extract_message(r#"{"message": "Commande introuvable"}"#),
            Some("Commande introuvable".to_string())
        );
        assert_eq!(
            ErrorBody::extract_message(r#"{"error": "invalid"}"#),
            Some("invalid".to_string())
        );
        assert_eq!(ErrorBody::extract_message("not json"), None);
        assert_eq!(ErrorBody::extract_message(r#"{"message": ""}"#), None);
    }
}
