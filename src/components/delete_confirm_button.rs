//! Delete Confirm Button Component
//!
//! Inline two-step removal: the first click asks, the second commits.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows `label` initially. When clicked, shows "Remove?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - text of the initial button
/// * `busy` - disables the confirm button while a removal is in flight
/// * `on_confirm` - runs when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || {
                let label = label.clone();
                view! {
                    <button class="remove-btn" on:click=move |_| set_confirming.set(true)>
                        {label}
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Remove?"</span>
                <button
                    class="confirm-btn"
                    disabled=move || busy.get()
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}
