//! Committee Settings View
//!
//! Lists committee members, adds new ones and removes others. Every change
//! refetches the list from the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::DeleteConfirmButton;
use crate::config::MAX_MEMBERS;
use crate::context::AppContext;
use crate::models::{CommitteeMember, NewMember};
use crate::rules;
use crate::store::{session_email, session_token, use_app_store};

/// Date part of an ISO timestamp
fn member_since(created_at: Option<&str>) -> String {
    created_at
        .and_then(|ts| ts.get(..10))
        .map(|date| format!("since {}", date))
        .unwrap_or_default()
}

#[component]
pub fn SettingsView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_app_store();

    let (members, set_members) = signal(Vec::<CommitteeMember>::new());
    let (loading, set_loading) = signal(true);
    let (busy, set_busy) = signal(false);
    let (new_email, set_new_email) = signal(String::new());
    let (new_phone, set_new_phone) = signal(String::new());
    let own_email = session_email(&store).unwrap_or_default();

    // Load members on mount and after each change
    Effect::new({
        let api = api.clone();
        move |_| {
            let _ = ctx.reload_trigger.get();
            let Some(token) = session_token(&store) else { return };
            let api = api.clone();
            spawn_local(async move {
                match api.list_members(&token).await {
                    Ok(loaded) => {
                        log::info!("[SETTINGS] Loaded {} members", loaded.len());
                        set_members.set(loaded);
                    }
                    Err(e) => ctx.error(e.to_string()),
                }
                set_loading.set(false);
            });
        }
    });

    let add_member = {
        let api = api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let email = new_email.get_untracked().trim().to_string();
            if !rules::can_add_member(members.with_untracked(Vec::len), &email) || busy.get_untracked() {
                return;
            }
            let Some(token) = session_token(&store) else { return };
            let member = NewMember {
                email,
                phone_number: rules::optional_phone(&new_phone.get_untracked()),
            };

            set_busy.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.add_member(&token, &member).await {
                    Ok(created) => {
                        ctx.success(format!("Added {} to the committee.", created.email));
                        set_new_email.set(String::new());
                        set_new_phone.set(String::new());
                        ctx.reload();
                    }
                    Err(e) => ctx.error(e.to_string()),
                }
                set_busy.set(false);
            });
        }
    };

    let remove_member = move |member: CommitteeMember| {
        let Some(token) = session_token(&store) else { return };
        let own = session_email(&store).unwrap_or_default();
        let count = members.with_untracked(Vec::len);
        if !rules::can_confirm_removal(count, &member.email, &own, busy.get_untracked()) {
            return;
        }
        set_busy.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.remove_member(&token, &member.id).await {
                Ok(()) => {
                    ctx.success(format!("Removed {}.", member.email));
                    ctx.reload();
                }
                Err(e) => ctx.error(e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let count = move || members.with(Vec::len);
    let full = move || count() >= MAX_MEMBERS;

    view! {
        <section class="settings-view">
            <h1>"Committee Members"</h1>
            <p class="view-hint">
                {move || format!("{} / {} members. Only committee members can log in.", count(), MAX_MEMBERS)}
            </p>

            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading members..."</p> }>
                <ul class="member-list">
                    <For
                        each=move || members.get()
                        key=|m| m.id.clone()
                        children={
                            let own_email = own_email.clone();
                            let remove_member = remove_member.clone();
                            move |member| {
                                let is_self = rules::is_same_email(&member.email, &own_email);
                                let target_email = member.email.clone();
                                let own = own_email.clone();
                                let removable = move || rules::can_remove_member(count(), &target_email, &own);
                                let on_confirm = {
                                    let remove_member = remove_member.clone();
                                    let member = member.clone();
                                    Callback::new(move |_| remove_member(member.clone()))
                                };
                                view! {
                                    <li class="member-row">
                                        <span class="member-email">{member.email.clone()}</span>
                                        {is_self.then(|| view! { <span class="member-self">"(you)"</span> })}
                                        {(!member.is_active).then(|| view! { <span class="member-inactive">"inactive"</span> })}
                                        <span class="member-since">{member_since(member.created_at.as_deref())}</span>
                                        <span class="member-phone">{member.phone_number.clone().unwrap_or_default()}</span>
                                        <Show when=removable>
                                            <DeleteConfirmButton label="Remove" busy=busy on_confirm=on_confirm />
                                        </Show>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>

            <form class="member-add-form" on:submit=add_member>
                <h2>"Add a member"</h2>
                <input
                    type="email"
                    placeholder="Email address"
                    prop:value=move || new_email.get()
                    prop:disabled=full
                    on:input=move |ev| set_new_email.set(event_target_value(&ev))
                />
                <input
                    type="tel"
                    placeholder="Phone number (optional)"
                    prop:value=move || new_phone.get()
                    prop:disabled=full
                    on:input=move |ev| set_new_phone.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    disabled=move || busy.get() || !rules::can_add_member(count(), &new_email.get())
                >
                    "Add"
                </button>
                <Show when=full>
                    <p class="form-note">"The committee is full. Remove a member before adding another."</p>
                </Show>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_since() {
        assert_eq!(member_since(Some("2025-03-01T10:22:33.123456")), "since 2025-03-01");
        assert_eq!(member_since(Some("2025")), "");
        assert_eq!(member_since(None), "");
    }
}
