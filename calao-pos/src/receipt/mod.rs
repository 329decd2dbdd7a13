//! Receipt formatting
//!
//! Deterministic transformation of an order plus payment info into a
//! fixed-width text layout matching the 80mm/58mm thermal printers.
//! Printing itself (the dialog) is the caller's concern.

pub mod text;

use chrono::Utc;

use shared::models::{Order, OrderStatus, PaymentMethod};

use crate::format::{format_amount, format_datetime, format_xof};

use self::text::{TextBuilder, pad_to_width};

/// 80mm paper, 48 columns
pub const WIDTH_80MM: usize = 48;
/// 58mm paper, 32 columns
pub const WIDTH_58MM: usize = 32;

const QTY_WIDTH: usize = 3;
const UNIT_WIDTH: usize = 8;
const TOTAL_WIDTH: usize = 10;

/// Store identity block printed at the top
#[derive(Debug, Clone)]
pub struct StoreHeader {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Optional payment/context info for the totals section
#[derive(Debug, Clone, Default)]
pub struct ReceiptOptions {
    /// Cash tendered; change due is derived and only shown when
    /// strictly positive
    pub amount_received: Option<f64>,
    pub cashier: Option<String>,
    pub reprint: bool,
    pub store: Option<StoreHeader>,
}

/// Renders one order into receipt text
pub struct ReceiptRenderer<'a> {
    order: &'a Order,
    width: usize,
    options: ReceiptOptions,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(order: &'a Order, width: usize) -> Self {
        Self {
            order,
            width,
            options: ReceiptOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReceiptOptions) -> Self {
        self.options = options;
        self
    }

    pub fn amount_received(mut self, amount: f64) -> Self {
        self.options.amount_received = Some(amount);
        self
    }

    pub fn cashier(mut self, name: impl Into<String>) -> Self {
        self.options.cashier = Some(name.into());
        self
    }

    pub fn reprint(mut self) -> Self {
        self.options.reprint = true;
        self
    }

    fn name_width(&self) -> usize {
        self.width
            .saturating_sub(QTY_WIDTH + UNIT_WIDTH + TOTAL_WIDTH + 3)
    }

    pub fn render(&self) -> String {
        let mut b = TextBuilder::new(self.width);

        if self.options.reprint {
            b.center("*** RÉIMPRESSION ***");
            b.blank();
        }
        if self.order.status == OrderStatus::Annule {
            b.center("*** ANNULÉE ***");
            if let Some(reason) = &self.order.cancel_reason {
                b.center(&format!("Motif: {reason}"));
            }
            b.blank();
        }

        if let Some(store) = &self.options.store {
            b.center(&store.name);
            if let Some(address) = &store.address {
                b.center(address);
            }
            if let Some(phone) = &store.phone {
                b.center(&format!("Tel: {phone}"));
            }
            b.blank();
        }

        b.eq_sep();
        // Missing date degrades to "now", display only
        let date = self.order.created_at.unwrap_or_else(Utc::now);
        b.line_lr(
            &format!("Commande N° {}", self.order.order_number),
            &format_datetime(date),
        );
        let table = match self.order.table_number {
            Some(n) => format!("Table: {n}"),
            None => "À emporter".to_string(),
        };
        let server = self
            .order
            .server
            .as_ref()
            .map(|s| format!("Serveur: {}", s.name))
            .unwrap_or_default();
        b.line_lr(&table, &server);
        b.dash_sep();

        // Items: designation / qty / unit price / amount
        let name_width = self.name_width();
        b.write_line(&format!(
            "{} {} {} {}",
            pad_to_width("QTE", QTY_WIDTH, true),
            pad_to_width("DESIGNATION", name_width, false),
            pad_to_width("P.U.", UNIT_WIDTH, true),
            pad_to_width("MONTANT", TOTAL_WIDTH, true),
        ));
        for item in &self.order.items {
            b.write_line(&format!(
                "{} {} {} {}",
                pad_to_width(&item.quantity.to_string(), QTY_WIDTH, true),
                pad_to_width(item.display_name(), name_width, false),
                pad_to_width(&format_amount(item.unit_price()), UNIT_WIDTH, true),
                pad_to_width(&format_amount(item.line_total()), TOTAL_WIDTH, true),
            ));
            if let Some(notes) = &item.notes {
                b.write_line(&format!("    > {notes}"));
            }
        }
        b.dash_sep();

        // Totals
        b.line_lr("TOTAL", &format_xof(self.order.total_amount));
        b.line_lr(
            "Paiement",
            PaymentMethod::label_or_default(self.order.payment_method.as_ref()),
        );
        if let Some(received) = self.options.amount_received {
            b.line_lr("Reçu", &format_xof(received));
            let change = received - self.order.total_amount;
            if change > 0.0 {
                b.line_lr("Monnaie", &format_xof(change));
            }
        }
        if let Some(cashier) = &self.options.cashier {
            b.line_lr("Caissier", cashier);
        }
        if let Some(notes) = &self.order.notes {
            b.line_lr("Note", notes);
        }
        b.dash_sep();
        b.center("*** MERCI DE VOTRE VISITE ***");

        b.finalize()
    }
}
