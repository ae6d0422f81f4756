//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::session::Session;

/// Top-level screens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Login,
    Dashboard,
    Settings,
    Registration,
}

impl View {
    pub fn requires_session(self) -> bool {
        matches!(self, View::Dashboard | View::Settings)
    }
}

/// Session and routing state shared by every view
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Logged-in member, if any
    pub session: Option<Session>,
    /// Screen currently shown
    pub view: View,
    /// True until the cached session has been revalidated
    pub restoring: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            restoring: true,
            ..Default::default()
        }
    }
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Where a navigation request actually lands
pub fn resolve_view(requested: View, signed_in: bool) -> View {
    match requested {
        v if v.requires_session() && !signed_in => View::Login,
        View::Login if signed_in => View::Dashboard,
        v => v,
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_navigate(store: &AppStore, requested: View) {
    let signed_in = store.session().with_untracked(Option::is_some);
    let target = resolve_view(requested, signed_in);
    log::debug!("[NAV] {:?} -> {:?}", requested, target);
    *store.view().write() = target;
}

pub fn store_sign_in(store: &AppStore, session: Session) {
    *store.session().write() = Some(session);
    *store.view().write() = View::Dashboard;
}

pub fn store_sign_out(store: &AppStore) {
    *store.session().write() = None;
    *store.view().write() = View::Login;
}

/// Finish startup revalidation
pub fn store_restored(store: &AppStore, session: Option<Session>) {
    let view = if session.is_some() { View::Dashboard } else { View::Login };
    *store.session().write() = session;
    *store.view().write() = view;
    *store.restoring().write() = false;
}

pub fn session_token(store: &AppStore) -> Option<String> {
    store.session().with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
}

pub fn session_email(store: &AppStore) -> Option<String> {
    store.session().with_untracked(|s| s.as_ref().map(|s| s.email.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_views_need_session() {
        assert_eq!(resolve_view(View::Dashboard, false), View::Login);
        assert_eq!(resolve_view(View::Settings, false), View::Login);
        assert_eq!(resolve_view(View::Settings, true), View::Settings);
    }

    #[test]
    fn test_registration_is_public() {
        assert_eq!(resolve_view(View::Registration, false), View::Registration);
        assert_eq!(resolve_view(View::Registration, true), View::Registration);
    }

    #[test]
    fn test_login_redirects_when_signed_in() {
        assert_eq!(resolve_view(View::Login, true), View::Dashboard);
        assert_eq!(resolve_view(View::Login, false), View::Login);
    }

    #[test]
    fn test_sign_in_lands_on_dashboard() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::new());
        store_restored(&store, None);
        assert_eq!(store.view().get_untracked(), View::Login);
        assert!(!store.restoring().get_untracked());

        store_sign_in(&store, Session { token: "jwt-abc".into(), email: "admin@example.com".into() });
        assert_eq!(store.view().get_untracked(), View::Dashboard);
        assert_eq!(session_token(&store).as_deref(), Some("jwt-abc"));

        store_navigate(&store, View::Login);
        assert_eq!(store.view().get_untracked(), View::Dashboard);

        store_sign_out(&store);
        assert_eq!(store.view().get_untracked(), View::Login);
        assert_eq!(session_email(&store), None);
    }

    #[test]
    fn test_initial_state_is_restoring() {
        let state = AppState::new();
        assert!(state.restoring);
        assert_eq!(state.view, View::Login);
        assert!(state.session.is_none());
    }
}
