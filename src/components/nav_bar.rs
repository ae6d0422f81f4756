//! Navigation Bar Component
//!
//! Title, backend health badge, view switching and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::AppContext;
use crate::models::ApiStatus;
use crate::session::{self, LocalSessionCache};
use crate::store::{store_navigate, store_sign_out, use_app_store, AppStateStoreFields, View};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_app_store();
    let (health, set_health) = signal::<Option<Result<ApiStatus, String>>>(None);

    // Probe backend once on mount
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.status().await.map_err(|e| e.to_string());
            if let Err(e) = &result {
                log::warn!("[NAV] Backend status check failed: {}", e);
            }
            set_health.set(Some(result));
        });
    });

    let logout = move |_| {
        session::logout(&LocalSessionCache);
        store_sign_out(&store);
        ctx.info("You have been logged out.");
    };

    let signed_in = move || store.session().with(Option::is_some);
    let tab_class = move |view: View| {
        move || if store.view().get() == view { "nav-tab active" } else { "nav-tab" }
    };

    view! {
        <header class="nav-bar">
            <span class="nav-title">"Water Bill Console"</span>

            {move || match health.get() {
                None => view! { <span class="health-badge pending">"connecting"</span> }.into_any(),
                Some(Ok(status)) => {
                    let service = status.service.unwrap_or_else(|| "Billing API".to_string());
                    let title = match status.cost_per_unit {
                        Some(rate) => format!("{}: ₹{:.2} per unit", service, rate),
                        None => service,
                    };
                    view! { <span class="health-badge ok" title=title>{status.status}</span> }.into_any()
                }
                Some(Err(e)) => view! { <span class="health-badge down" title=e>"offline"</span> }.into_any(),
            }}

            <nav class="nav-tabs">
                <Show when=signed_in>
                    <button class=tab_class(View::Dashboard) on:click=move |_| store_navigate(&store, View::Dashboard)>
                        "Bills"
                    </button>
                    <button class=tab_class(View::Settings) on:click=move |_| store_navigate(&store, View::Settings)>
                        "Committee"
                    </button>
                </Show>
                <button class=tab_class(View::Registration) on:click=move |_| store_navigate(&store, View::Registration)>
                    "Link Telegram"
                </button>
            </nav>

            <Show
                when=signed_in
                fallback=move || view! {
                    <button class="nav-login" on:click=move |_| store_navigate(&store, View::Login)>"Log in"</button>
                }
            >
                <span class="nav-user">
                    {move || store.session().with(|s| s.as_ref().map(|s| s.email.clone()).unwrap_or_default())}
                </span>
                <button class="nav-logout" on:click=logout>"Log out"</button>
            </Show>
        </header>
    }
}
