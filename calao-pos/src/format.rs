//! Price and date formatting
//!
//! Single source of truth for the formats repeated across dashboards
//! and receipts. Amounts are XOF: no decimals, space-grouped thousands.

use chrono::{DateTime, Local, Utc};

/// Format an amount without the currency tag, e.g. `15 000`
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format an amount with the currency tag, e.g. `15 000 XOF`
pub fn format_xof(amount: f64) -> String {
    format!("{} XOF", format_amount(amount))
}

/// Local short date, e.g. `06/08/2026`
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%d/%m/%Y").to_string()
}

/// Local date and time, e.g. `06/08/2026 14:30`
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}
