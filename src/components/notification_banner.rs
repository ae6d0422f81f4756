//! Notification Banner Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Transient status line; clears itself after the configured delay
#[component]
pub fn NotificationBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.notice.get().map(|notice| {
            view! {
                <div class=notice.kind.css_class() role="status">
                    <span class="notice-text">{notice.text}</span>
                    <button class="notice-close" title="Dismiss" on:click=move |_| ctx.dismiss()>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
