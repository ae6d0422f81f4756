//! Water Bill Console App
//!
//! Root controller: revalidates the cached session on mount and routes
//! between the login, dashboard, committee and Telegram-link views.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{ApiClient, FetchTransport};
use crate::components::{
    DashboardView, LoginView, NavBar, NotificationBanner, RegistrationView, SettingsView,
};
use crate::config::AppConfig;
use crate::context::{AppContext, Notice};
use crate::session::{self, LocalSessionCache};
use crate::store::{store_restored, AppState, AppStateStoreFields, View};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("[APP] Starting, API base {}", config.api_base);

    let api = ApiClient::new(FetchTransport, config.clone());
    let store = Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    // Provide context to all children
    provide_context(store);
    provide_context(api.clone());
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (notice, set_notice),
        config.notice_timeout_ms,
    ));

    // Revalidate cached session on mount
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let restored = session::restore(&api, &LocalSessionCache).await;
            store_restored(&store, restored);
        });
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <NotificationBanner />

            <main class="main-content">
                {move || {
                    if store.restoring().get() {
                        return view! { <p class="loading">"Checking your session..."</p> }.into_any();
                    }
                    match store.view().get() {
                        View::Login => view! { <LoginView /> }.into_any(),
                        View::Dashboard => view! { <DashboardView /> }.into_any(),
                        View::Settings => view! { <SettingsView /> }.into_any(),
                        View::Registration => view! { <RegistrationView /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
