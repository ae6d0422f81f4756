//! Dashboard View
//!
//! Upload form on top, result of the latest upload underneath.

use leptos::prelude::*;

use crate::components::{BillPreview, UploadPanel};
use crate::models::BillBatchResult;

#[component]
pub fn DashboardView() -> impl IntoView {
    let (result, set_result) = signal::<Option<BillBatchResult>>(None);

    view! {
        <section class="dashboard-view">
            <h1>"Monthly Water Bills"</h1>
            <p class="view-hint">
                "Upload the meter readings. Bills are computed by the server and sent to every flat with a linked Telegram chat."
            </p>

            <UploadPanel on_result=move |r: BillBatchResult| set_result.set(Some(r)) />

            {move || result.get().map(|result| view! { <BillPreview result=result /> })}
        </section>
    }
}
