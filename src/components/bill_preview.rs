//! Bill Preview Component
//!
//! Batch counters from the backend and the first rows of the batch.

use leptos::prelude::*;

use crate::billing::{format_amount, format_units, preview_totals};
use crate::config::PREVIEW_LIMIT;
use crate::models::BillBatchResult;

#[component]
pub fn BillPreview(result: BillBatchResult) -> impl IntoView {
    let totals = preview_totals(&result.preview);
    let shown = result.preview.len();

    let rows = result
        .preview
        .into_iter()
        .map(|record| {
            let linked = record.telegram_chat_id.as_deref().is_some_and(|id| !id.is_empty());
            view! {
                <tr class=if linked { "" } else { "unlinked" }>
                    <td>{record.flat_no}</td>
                    <td>{record.name}</td>
                    <td class="num">{format_units(record.units_consumed)}</td>
                    <td class="num">{format_amount(record.amount_due)}</td>
                    <td>{record.telegram_chat_id.unwrap_or_else(|| "not linked".to_string())}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section class="bill-preview">
            <div class="summary-cards">
                <div class="summary-card">
                    <span class="summary-value">{result.total_records_processed}</span>
                    <span class="summary-label">"records processed"</span>
                </div>
                <div class="summary-card ok">
                    <span class="summary-value">{result.notifications_ready}</span>
                    <span class="summary-label">"notifications ready"</span>
                </div>
                <div class="summary-card warn">
                    <span class="summary-value">{result.skipped_records}</span>
                    <span class="summary-label">"skipped (no Telegram chat)"</span>
                </div>
            </div>

            <h2>{format!("Preview (first {} of {})", shown.min(PREVIEW_LIMIT), result.total_records_processed)}</h2>
            <table class="preview-table">
                <thead>
                    <tr>
                        <th>"Flat"</th>
                        <th>"Name"</th>
                        <th class="num">"Units"</th>
                        <th class="num">"Amount"</th>
                        <th>"Telegram chat"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
                <tfoot>
                    <tr>
                        <td colspan="2">{format!("Preview total ({} linked)", totals.linked)}</td>
                        <td class="num">{format_units(totals.units)}</td>
                        <td class="num">{format_amount(totals.amount)}</td>
                        <td></td>
                    </tr>
                </tfoot>
            </table>
        </section>
    }
}
