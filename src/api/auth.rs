//! Auth Endpoints
//!
//! OTP challenge and identity lookup.

use super::{ApiClient, Body, Method, Transport};
use crate::error::ApiResult;
use crate::models::{AccessToken, CommitteeMember, Message, OtpRequest, OtpVerification};

impl<T: Transport> ApiClient<T> {
    /// Ask the backend to email a passcode. Returns its acknowledgement text, if any.
    pub async fn request_otp(&self, email: &str) -> ApiResult<Option<String>> {
        let body = Body::json(&OtpRequest { email })?;
        let reply = self.call(Method::Post, "/auth/otp/request", None, body).await?;
        let message = reply
            .and_then(|text| serde_json::from_str::<Message>(&text).ok())
            .and_then(|m| m.message);
        Ok(message)
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> ApiResult<AccessToken> {
        let body = Body::json(&OtpVerification { email, otp })?;
        self.call_json(Method::Post, "/auth/otp/verify", None, body).await
    }

    /// Member that owns `token`
    pub async fn me(&self, token: &str) -> ApiResult<CommitteeMember> {
        self.call_json(Method::Get, "/auth/me", Some(token), Body::Empty).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::*;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_request_otp_body_and_message() {
        let api = client(ScriptedTransport::default()
            .reply(200, r#"{"message":"OTP sent successfully to your email address."}"#));
        let msg = block_on(api.request_otp("admin@example.com")).unwrap();
        assert_eq!(msg.as_deref(), Some("OTP sent successfully to your email address."));
        assert_eq!(api.transport().json_body(0), json!({"email": "admin@example.com"}));
        assert_eq!(api.transport().sent.borrow()[0].token, None);
    }

    #[test]
    fn test_request_otp_tolerates_unusual_body() {
        let api = client(ScriptedTransport::default().reply(200, "null"));
        assert_eq!(block_on(api.request_otp("a@b.c")).unwrap(), None);
    }

    #[test]
    fn test_me_sends_bearer() {
        let api = client(ScriptedTransport::default()
            .reply(200, r#"{"id":"1","email":"admin@example.com","phone_number":null,"is_active":true}"#));
        let me = block_on(api.me("tok-1")).unwrap();
        assert_eq!(me.email, "admin@example.com");
        let sent = api.transport().sent.borrow();
        assert!(sent[0].url.ends_with("/auth/me"));
        assert_eq!(sent[0].token.as_deref(), Some("tok-1"));
    }
}
