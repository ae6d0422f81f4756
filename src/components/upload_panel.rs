//! Upload Panel Component
//!
//! Picks one spreadsheet (file picker or drag-and-drop) and posts it for
//! bill generation.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};

use crate::api::ApiClient;
use crate::billing::format_size;
use crate::context::AppContext;
use crate::models::BillBatchResult;
use crate::rules;
use crate::store::{session_token, use_app_store};

const SPREADSHEET_TYPES: &str = ".xlsx,.xls";

/// Forget the picked file and reset the native picker
fn clear_selection<F: 'static>(
    set_file: WriteSignal<Option<F>, LocalStorage>,
    input: Option<HtmlInputElement>,
) {
    set_file.set(None);
    if let Some(input) = input {
        input.set_value("");
    }
}

#[component]
pub fn UploadPanel(#[prop(into)] on_result: Callback<BillBatchResult>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_app_store();

    // web_sys::File is !Send, so it lives in a thread-local signal
    let (file, set_file) = signal_local::<Option<web_sys::File>>(None);
    let (uploading, set_uploading) = signal(false);
    let (drag_over, set_drag_over) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_pick = move |ev: web_sys::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        set_file.set(picked);
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let dropped = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(dropped) = dropped {
            log::debug!("[UPLOAD] Dropped {}", dropped.name());
            set_file.set(Some(dropped));
        }
    };

    let clear = move |_| clear_selection(set_file, input_ref.get_untracked());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(picked) = file.get_untracked() else { return };
        if !rules::can_upload(true, uploading.get_untracked()) {
            return;
        }
        let Some(token) = session_token(&store) else {
            ctx.error("Your session has ended. Please log in again.");
            return;
        };

        set_uploading.set(true);
        let api = api.clone();
        spawn_local(async move {
            log::info!("[UPLOAD] Sending {} ({} bytes)", picked.name(), picked.size());
            match api.generate_bills(&token, picked).await {
                Ok(result) => {
                    ctx.success(format!(
                        "Processed {} records: {} notifications queued, {} skipped.",
                        result.total_records_processed, result.notifications_ready, result.skipped_records
                    ));
                    on_result.run(result);
                    clear_selection(set_file, input_ref.get_untracked());
                }
                Err(e) => ctx.error(e.to_string()),
            }
            set_uploading.set(false);
        });
    };

    view! {
        <form class="upload-panel" on:submit=submit>
            <div
                class=move || if drag_over.get() { "drop-zone active" } else { "drop-zone" }
                on:dragover=on_dragover
                on:dragleave=move |_: DragEvent| set_drag_over.set(false)
                on:drop=on_drop
            >
                <p>"Drop the meter-readings spreadsheet here, or"</p>
                <input
                    type="file"
                    accept=SPREADSHEET_TYPES
                    node_ref=input_ref
                    on:change=on_pick
                />
            </div>

            {move || file.with(|f| f.as_ref().map(|f| format!("{} ({})", f.name(), format_size(f.size()))))
                .map(|label| view! {
                    <div class="picked-file">
                        <span>{label}</span>
                        <button type="button" class="link-btn" on:click=clear>"Clear"</button>
                    </div>
                })}

            <button
                type="submit"
                class="primary-btn"
                disabled=move || !rules::can_upload(file.with(Option::is_some), uploading.get())
            >
                {move || if uploading.get() { "Generating bills..." } else { "Generate bills & notify" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_selection_blocks_resend() {
        let owner = Owner::new();
        owner.set();
        let (file, set_file) = signal_local(Some("readings-march.xlsx".to_string()));
        assert!(rules::can_upload(file.with_untracked(Option::is_some), false));

        clear_selection(set_file, None);
        assert_eq!(file.get_untracked(), None);
        assert!(!rules::can_upload(file.with_untracked(Option::is_some), false));
    }
}
