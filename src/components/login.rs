//! Login View
//!
//! Two-step OTP challenge: email first, then the emailed 6-digit code.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::OTP_LENGTH;
use crate::context::AppContext;
use crate::rules;
use crate::session::{self, LocalSessionCache};
use crate::store::{store_navigate, store_sign_in, use_app_store, View};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Step {
    Email,
    Code,
}

/// Leave the code step, unless a request is still in flight
fn back_to_email(
    busy: ReadSignal<bool>,
    set_code: WriteSignal<String>,
    set_step: WriteSignal<Step>,
) {
    if busy.get_untracked() {
        return;
    }
    set_code.set(String::new());
    set_step.set(Step::Email);
}

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (step, set_step) = signal(Step::Email);
    let (busy, set_busy) = signal(false);

    let request_code = {
        let api = api.clone();
        move || {
            let address = email.get_untracked().trim().to_string();
            if !rules::can_request_otp(&address) || busy.get_untracked() {
                return;
            }
            set_busy.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.request_otp(&address).await {
                    Ok(message) => {
                        ctx.success(message.unwrap_or_else(|| format!("A code was sent to {}.", address)));
                        set_code.set(String::new());
                        set_step.set(Step::Code);
                    }
                    Err(e) => ctx.error(e.to_string()),
                }
                set_busy.set(false);
            });
        }
    };
    let resend_code = request_code.clone();

    let verify_code = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        let otp = code.get_untracked();
        if !rules::can_verify_otp(&otp) || busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let api = api.clone();
        spawn_local(async move {
            match session::login(&api, &LocalSessionCache, &address, &otp).await {
                Ok(session) => {
                    ctx.success(format!("Welcome, {}.", session.email));
                    store_sign_in(&store, session);
                }
                Err(e) => {
                    ctx.error(e.to_string());
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <section class="login-view">
            <h1>"Committee Login"</h1>

            {move || match step.get() {
                Step::Email => {
                    let request_code = request_code.clone();
                    view! {
                        <form class="login-form" on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            request_code();
                        }>
                            <label for="login-email">"Committee email"</label>
                            <input
                                id="login-email"
                                type="email"
                                placeholder="committee.head@apt.com"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            <button
                                type="submit"
                                disabled=move || busy.get() || !rules::can_request_otp(&email.get())
                            >
                                {move || if busy.get() { "Sending..." } else { "Send code" }}
                            </button>
                        </form>
                    }.into_any()
                }
                Step::Code => {
                    let resend_code = resend_code.clone();
                    let verify_code = verify_code.clone();
                    view! {
                        <form class="login-form" on:submit=verify_code>
                            <p class="login-hint">
                                "Enter the " {OTP_LENGTH} "-digit code sent to " <strong>{move || email.get()}</strong>
                            </p>
                            <input
                                class="otp-input"
                                type="text"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                maxlength=OTP_LENGTH.to_string()
                                placeholder="123456"
                                prop:value=move || code.get()
                                on:input=move |ev| set_code.set(rules::sanitize_otp(&event_target_value(&ev)))
                            />
                            <button
                                type="submit"
                                disabled=move || busy.get() || !rules::can_verify_otp(&code.get())
                            >
                                {move || if busy.get() { "Verifying..." } else { "Log in" }}
                            </button>
                            <div class="login-actions">
                                <button type="button" class="link-btn" disabled=move || busy.get() on:click=move |_| resend_code()>
                                    "Resend code"
                                </button>
                                <button
                                    type="button"
                                    class="link-btn"
                                    disabled=move || busy.get()
                                    on:click=move |_| back_to_email(busy, set_code, set_step)
                                >
                                    "Use a different email"
                                </button>
                            </div>
                        </form>
                    }.into_any()
                }
            }}

            <p class="login-footer">
                "Flat owner? "
                <button type="button" class="link-btn" on:click=move |_| store_navigate(&store, View::Registration)>
                    "Link your Telegram chat"
                </button>
            </p>
        </section>
    }
}
