//! Session Handling
//!
//! The bearer token and member email survive reloads in `localStorage`.
//! A cached session is trusted only after `/auth/me` accepts its token.

use crate::api::{ApiClient, Transport};
use crate::config::{EMAIL_KEY, TOKEN_KEY};
use crate::error::{js_message, ApiError, ApiResult};
use crate::rules;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
}

/// Persistent slot for the current session
pub trait SessionCache {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> ApiResult<()>;
    fn clear(&self);
}

/// `window.localStorage` backed cache
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionCache;

impl LocalSessionCache {
    fn storage() -> ApiResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ApiError::Storage("no browser window".into()))?
            .local_storage()
            .map_err(|e| ApiError::Storage(js_message(&e)))?
            .ok_or_else(|| ApiError::Storage("localStorage is disabled".into()))
    }
}

impl SessionCache for LocalSessionCache {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage().ok()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let email = storage.get_item(EMAIL_KEY).ok()??;
        (!token.is_empty()).then_some(Session { token, email })
    }

    fn save(&self, session: &Session) -> ApiResult<()> {
        let storage = Self::storage()?;
        storage
            .set_item(TOKEN_KEY, &session.token)
            .and_then(|_| storage.set_item(EMAIL_KEY, &session.email))
            .map_err(|e| ApiError::Storage(js_message(&e)))
    }

    fn clear(&self) {
        if let Ok(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(EMAIL_KEY);
        }
    }
}

/// Exchange email + passcode for a token and persist the session.
pub async fn login<T: Transport, C: SessionCache>(
    client: &ApiClient<T>,
    cache: &C,
    email: &str,
    otp: &str,
) -> ApiResult<Session> {
    let email = email.trim();
    if !rules::can_request_otp(email) {
        return Err(ApiError::Invalid("Enter your committee email first.".into()));
    }
    if !rules::can_verify_otp(otp) {
        return Err(ApiError::Invalid("The code must be exactly 6 digits.".into()));
    }

    let token = client.verify_otp(email, otp).await?;
    if !token.token_type.eq_ignore_ascii_case("bearer") {
        log::warn!("[SESSION] Unexpected token type {:?}, sending it as bearer", token.token_type);
    }
    let session = Session {
        token: token.access_token,
        email: email.to_string(),
    };
    cache.save(&session)?;
    log::info!("[SESSION] Logged in as {}", session.email);
    Ok(session)
}

/// Revalidate a cached session. Any failure clears the cache.
pub async fn restore<T: Transport, C: SessionCache>(
    client: &ApiClient<T>,
    cache: &C,
) -> Option<Session> {
    let cached = cache.load()?;
    match client.me(&cached.token).await {
        Ok(member) => {
            let session = Session { token: cached.token, email: member.email };
            if session.email != cached.email {
                if let Err(e) = cache.save(&session) {
                    log::warn!("[SESSION] Could not refresh cached email: {}", e);
                }
            }
            log::info!("[SESSION] Restored session for {}", session.email);
            Some(session)
        }
        Err(e) => {
            log::info!("[SESSION] Cached token rejected (status {:?}): {}", e.status(), e);
            cache.clear();
            None
        }
    }
}

pub fn logout<C: SessionCache>(cache: &C) {
    cache.clear();
    log::info!("[SESSION] Logged out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryCache {
        slot: RefCell<Option<Session>>,
        saves: RefCell<usize>,
    }

    impl SessionCache for MemoryCache {
        fn load(&self) -> Option<Session> {
            self.slot.borrow().clone()
        }
        fn save(&self, session: &Session) -> ApiResult<()> {
            *self.saves.borrow_mut() += 1;
            *self.slot.borrow_mut() = Some(session.clone());
            Ok(())
        }
        fn clear(&self) {
            *self.slot.borrow_mut() = None;
        }
    }

    fn cached(token: &str, email: &str) -> MemoryCache {
        let cache = MemoryCache::default();
        *cache.slot.borrow_mut() = Some(Session { token: token.into(), email: email.into() });
        cache
    }

    #[test]
    fn test_request_then_verify_persists_token() {
        let api = client(ScriptedTransport::default()
            .reply(200, r#"{"message":"OTP sent successfully to your email address."}"#)
            .reply(200, r#"{"access_token":"jwt-abc","token_type":"bearer"}"#));
        let cache = MemoryCache::default();

        block_on(api.request_otp("admin@example.com")).unwrap();
        let session = block_on(login(&api, &cache, "admin@example.com", "123456")).unwrap();

        let sent = api.transport().sent.borrow();
        let verifies: Vec<_> = sent.iter().filter(|r| r.url.ends_with("/auth/otp/verify")).collect();
        assert_eq!(verifies.len(), 1);
        drop(sent);
        assert_eq!(api.transport().json_body(1), json!({"email": "admin@example.com", "otp": "123456"}));

        assert_eq!(session, Session { token: "jwt-abc".into(), email: "admin@example.com".into() });
        assert_eq!(cache.load(), Some(session));
    }

    #[test]
    fn test_short_code_never_reaches_backend() {
        let api = client(ScriptedTransport::default());
        let cache = MemoryCache::default();
        let err = block_on(login(&api, &cache, "admin@example.com", "12345")).unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
        assert!(api.transport().sent.borrow().is_empty());
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn test_rejected_code_leaves_cache_empty() {
        let api = client(ScriptedTransport::default().reply(401, r#"{"detail":"Invalid OTP."}"#));
        let cache = MemoryCache::default();
        let err = block_on(login(&api, &cache, "admin@example.com", "000000")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid OTP.");
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn test_restore_without_cache_skips_network() {
        let api = client(ScriptedTransport::default());
        assert_eq!(block_on(restore(&api, &MemoryCache::default())), None);
        assert!(api.transport().sent.borrow().is_empty());
    }

    #[test]
    fn test_restore_accepted_token() {
        let api = client(ScriptedTransport::default()
            .reply(200, r#"{"id":"1","email":"admin@example.com","phone_number":null}"#));
        let cache = cached("jwt-abc", "admin@example.com");
        let session = block_on(restore(&api, &cache)).unwrap();
        assert_eq!(session.token, "jwt-abc");
        assert_eq!(*cache.saves.borrow(), 0);
        assert_eq!(api.transport().sent.borrow()[0].token.as_deref(), Some("jwt-abc"));
    }

    #[test]
    fn test_restore_expired_token_clears_cache() {
        let api = client(ScriptedTransport::default()
            .reply(401, r#"{"detail":"Could not validate credentials"}"#));
        let cache = cached("stale", "admin@example.com");
        assert_eq!(block_on(restore(&api, &cache)), None);
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn test_restore_takes_email_from_backend() {
        let api = client(ScriptedTransport::default()
            .reply(200, r#"{"id":"1","email":"head@apt.com","phone_number":null}"#));
        let cache = cached("jwt", "old@apt.com");
        let session = block_on(restore(&api, &cache)).unwrap();
        assert_eq!(session.email, "head@apt.com");
        assert_eq!(cache.load().unwrap().email, "head@apt.com");
    }
}
