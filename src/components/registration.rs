//! Telegram Registration View
//!
//! Public form a flat owner uses to link their Telegram chat to a flat.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::AppContext;
use crate::models::TelegramRegistration;
use crate::rules;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields, View};

#[component]
pub fn RegistrationView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_app_store();

    let (flat_no, set_flat_no) = signal(String::new());
    let (chat_id, set_chat_id) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let registration = TelegramRegistration {
            flat_no: flat_no.get_untracked().trim().to_string(),
            telegram_chat_id: chat_id.get_untracked(),
        };
        if !rules::can_register(&registration.flat_no, &registration.telegram_chat_id) || busy.get_untracked() {
            return;
        }

        set_busy.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.register_telegram(&registration).await {
                Ok(owner) => {
                    let who = owner.name.map(|n| format!(" ({})", n)).unwrap_or_default();
                    let chat = owner.telegram_chat_id.unwrap_or(registration.telegram_chat_id);
                    ctx.success(format!("Chat {} linked to flat {}{}.", chat, owner.flat_no, who));
                    set_flat_no.set(String::new());
                    set_chat_id.set(String::new());
                }
                Err(e) => ctx.error(e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let back_label = move || {
        if store.session().with(Option::is_some) { "Back to bills" } else { "Back to login" }
    };

    view! {
        <section class="registration-view">
            <h1>"Link Telegram"</h1>
            <p class="view-hint">
                "Flat owners: send any message to the society bot to get your chat ID, then link it to your flat to receive water bills."
            </p>

            <form class="registration-form" on:submit=register>
                <label for="reg-flat">"Flat number"</label>
                <input
                    id="reg-flat"
                    type="text"
                    placeholder="G1"
                    prop:value=move || flat_no.get()
                    on:input=move |ev| set_flat_no.set(rules::normalize_flat_no(&event_target_value(&ev)))
                />

                <label for="reg-chat">"Telegram chat ID"</label>
                <input
                    id="reg-chat"
                    type="text"
                    inputmode="numeric"
                    placeholder="1234567890"
                    prop:value=move || chat_id.get()
                    on:input=move |ev| set_chat_id.set(rules::sanitize_chat_id(&event_target_value(&ev)))
                />

                <button
                    type="submit"
                    disabled=move || busy.get() || !rules::can_register(&flat_no.get(), &chat_id.get())
                >
                    {move || if busy.get() { "Linking..." } else { "Link chat" }}
                </button>
            </form>

            <button type="button" class="link-btn" on:click=move |_| store_navigate(&store, View::Login)>
                {back_label}
            </button>
        </section>
    }
}
