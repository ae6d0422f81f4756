//! Upload Preview Helpers
//!
//! Display formatting and the client-side sums shown under the preview
//! table. Batch totals always come from the backend response.

use crate::models::BillRecord;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewTotals {
    pub units: f64,
    pub amount: f64,
    /// Preview rows with a linked chat
    pub linked: usize,
}

pub fn preview_totals(records: &[BillRecord]) -> PreviewTotals {
    records.iter().fold(PreviewTotals::default(), |mut acc, r| {
        acc.units += r.units_consumed;
        acc.amount += r.amount_due;
        if r.telegram_chat_id.as_deref().is_some_and(|id| !id.is_empty()) {
            acc.linked += 1;
        }
        acc
    })
}

pub fn format_units(units: f64) -> String {
    format!("{:.2}", units)
}

pub fn format_amount(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Human-readable file size for the picked spreadsheet
pub fn format_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes as u64)
    }
}
