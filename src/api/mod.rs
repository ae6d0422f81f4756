//! Backend REST Client
//!
//! `ApiClient` turns typed calls into `ApiRequest`s and hands them to a
//! `Transport`. The browser uses `FetchTransport`; tests script their own.

mod auth;
mod bill;
mod fetch;
mod members;
mod status;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};

pub use fetch::FetchTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload. `F` is the transport's file handle.
#[derive(Debug, Clone)]
pub enum Body<F> {
    Empty,
    Json(String),
    /// Single-file multipart form
    File { field: &'static str, file: F },
}

impl<F> Body<F> {
    pub fn json<S: Serialize>(value: &S) -> ApiResult<Self> {
        Ok(Body::Json(serde_json::to_string(value)?))
    }
}

#[derive(Debug, Clone)]
pub struct ApiRequest<F> {
    pub method: Method,
    pub url: String,
    /// Bearer token, attached as `Authorization` when present
    pub token: Option<String>,
    pub body: Body<F>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// One HTTP round trip. No retries.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// What a multipart upload carries
    type File;

    async fn send(&self, request: ApiRequest<Self::File>) -> ApiResult<ApiResponse>;
}

#[derive(Debug, Clone)]
pub struct ApiClient<T = FetchTransport> {
    transport: T,
    config: AppConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: AppConfig) -> Self {
        Self { transport, config }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request; `Ok(None)` for 204 or an empty body
    async fn call(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Body<T::File>,
    ) -> ApiResult<Option<String>> {
        log::debug!("[API] {} {}", method, path);
        let request = ApiRequest {
            method,
            url: self.config.url(path),
            token: token.map(str::to_string),
            body,
        };
        let response = self.transport.send(request).await?;

        if !(200..300).contains(&response.status) {
            let err = ApiError::from_response(response.status, &response.body);
            log::warn!("[API] {} {} failed ({}): {}", method, path, response.status, err);
            return Err(err);
        }
        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(response.body))
    }

    async fn call_json<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Body<T::File>,
    ) -> ApiResult<R> {
        match self.call(method, path, token, body).await? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Err(ApiError::Decode(format!("empty response from {}", path))),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport shared by module tests.

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Uploads are stood in for by their file name
    #[derive(Default)]
    pub struct ScriptedTransport {
        pub sent: RefCell<Vec<ApiRequest<String>>>,
        replies: RefCell<VecDeque<ApiResult<ApiResponse>>>,
    }

    impl ScriptedTransport {
        pub fn reply(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_string() }));
            self
        }

        pub fn fail(self, err: ApiError) -> Self {
            self.replies.borrow_mut().push_back(Err(err));
            self
        }

        pub fn json_body(&self, index: usize) -> serde_json::Value {
            match &self.sent.borrow()[index].body {
                Body::Json(text) => serde_json::from_str(text).unwrap(),
                other => panic!("expected JSON body, got {:?}", other),
            }
        }
    }

    impl Transport for ScriptedTransport {
        type File = String;

        async fn send(&self, request: ApiRequest<String>) -> ApiResult<ApiResponse> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".into())))
        }
    }

    pub fn client(transport: ScriptedTransport) -> ApiClient<ScriptedTransport> {
        ApiClient::new(transport, AppConfig::with_api_base("http://test/api/v1"))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_no_content_is_empty_success() {
        let api = client(ScriptedTransport::default().reply(204, ""));
        let out = block_on(api.call(Method::Delete, "/auth/members/1", Some("t"), Body::Empty)).unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn test_non_2xx_surfaces_detail() {
        let api = client(ScriptedTransport::default().reply(401, r#"{"detail":"Invalid OTP."}"#));
        let err = block_on(api.call(Method::Post, "/auth/otp/verify", None, Body::Empty)).unwrap_err();
        assert_eq!(err.to_string(), "Invalid OTP.");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_transport_error_passes_through() {
        let api = client(ScriptedTransport::default().fail(ApiError::Network("offline".into())));
        let err = block_on(api.call(Method::Get, "/status", None, Body::Empty)).unwrap_err();
        assert_eq!(err, ApiError::Network("offline".into()));
    }

    #[test]
    fn test_url_and_token_forwarded() {
        let api = client(ScriptedTransport::default().reply(200, "[]"));
        block_on(api.call(Method::Get, "/auth/members", Some("tok"), Body::Empty)).unwrap();
        let sent = api.transport().sent.borrow();
        assert_eq!(sent[0].url, "http://test/api/v1/auth/members");
        assert_eq!(sent[0].token.as_deref(), Some("tok"));
        assert_eq!(sent[0].method, Method::Get);
    }

    #[test]
    fn test_empty_body_where_json_expected() {
        let api = client(ScriptedTransport::default().reply(200, ""));
        let err = block_on(api.call_json::<serde_json::Value>(Method::Get, "/auth/me", Some("t"), Body::Empty)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
