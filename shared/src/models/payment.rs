//! Payment methods
//!
//! The backend enum has drifted over time; the variants below are the
//! superset seen on the wire. Codes outside the known set deserialize
//! into [`PaymentMethod::Other`] and are displayed verbatim.

use serde::{Deserialize, Serialize};

/// Payment method codes accepted by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Especes,
    CarteBancaire,
    Wave,
    MtnMoney,
    OrangeMoney,
    MoovMoney,
    /// Unknown code, kept verbatim
    #[serde(untagged)]
    Other(String),
}

impl PaymentMethod {
    /// Display label for receipts and dashboards
    pub fn label(&self) -> &str {
        match self {
            PaymentMethod::Especes => "Espèces",
            PaymentMethod::CarteBancaire => "Carte bancaire",
            PaymentMethod::Wave => "Wave",
            PaymentMethod::MtnMoney => "MTN Money",
            PaymentMethod::OrangeMoney => "Orange Money",
            PaymentMethod::MoovMoney => "Moov Money",
            PaymentMethod::Other(code) => code,
        }
    }

    /// Label for an optional method; absent renders as "Non défini"
    pub fn label_or_default(method: Option<&PaymentMethod>) -> &str {
        method.map(PaymentMethod::label).unwrap_or("Non défini")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(PaymentMethod::Wave.label(), "Wave");
        assert_eq!(PaymentMethod::Especes.label(), "Espèces");
        assert_eq!(PaymentMethod::CarteBancaire.label(), "Carte bancaire");
        assert_eq!(PaymentMethod::MtnMoney.label(), "MTN Money");
    }

    #[test]
    fn unknown_code_passes_through() {
        let method: PaymentMethod = serde_json::from_str("\"XYZ\"").unwrap();
        assert_eq!(method, PaymentMethod::Other("XYZ".to_string()));
        assert_eq!(method.label(), "XYZ");
    }

    #[test]
    fn absent_method_renders_non_defini() {
        assert_eq!(PaymentMethod::label_or_default(None), "Non défini");
        assert_eq!(
            PaymentMethod::label_or_default(Some(&PaymentMethod::Wave)),
            "Wave"
        );
    }

    #[test]
    fn wire_codes_round_trip() {
        let method: PaymentMethod = serde_json::from_str("\"ESPECES\"").unwrap();
        assert_eq!(method, PaymentMethod::Especes);
        assert_eq!(serde_json::to_string(&method).unwrap(), "\"ESPECES\"");

        let method: PaymentMethod = serde_json::from_str("\"ORANGE_MONEY\"").unwrap();
        assert_eq!(method, PaymentMethod::OrangeMoney);
    }
}
