//! Bill Endpoints
//!
//! Spreadsheet upload and self-service Telegram linking.

use super::{ApiClient, Body, Method, Transport};
use crate::error::ApiResult;
use crate::models::{BillBatchResult, FlatOwner, TelegramRegistration};

impl<T: Transport> ApiClient<T> {
    /// Upload a readings spreadsheet as multipart field `file`
    pub async fn generate_bills(
        &self,
        token: &str,
        file: T::File,
    ) -> ApiResult<BillBatchResult> {
        let body = Body::File { field: "file", file };
        self.call_json(Method::Post, "/bill/generate", Some(token), body).await
    }

    /// Unauthenticated; the backend decides whether the flat exists
    pub async fn register_telegram(
        &self,
        registration: &TelegramRegistration,
    ) -> ApiResult<FlatOwner> {
        let body = Body::json(registration)?;
        self.call_json(Method::Post, "/bill/telegram/register", None, body).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::testing::*;
    use crate::api::{Body, Method};
    use crate::models::TelegramRegistration;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_generate_bills_uploads_spreadsheet() {
        let api = client(ScriptedTransport::default().reply(200, r#"{
            "message":"Bills generated",
            "total_records_processed":2,
            "notifications_ready":1,
            "skipped_records":1,
            "preview":[]
        }"#));
        let result = block_on(api.generate_bills("jwt-abc", "readings-march.xlsx".into())).unwrap();
        assert_eq!(result.total_records_processed, 2);

        let sent = api.transport().sent.borrow();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "http://test/api/v1/bill/generate");
        assert_eq!(sent[0].token.as_deref(), Some("jwt-abc"));
        match &sent[0].body {
            Body::File { field, file } => {
                assert_eq!(*field, "file");
                assert_eq!(file, "readings-march.xlsx");
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }

    #[test]
    fn test_register_telegram() {
        let api = client(ScriptedTransport::default()
            .reply(200, r#"{"flat_no":"G1","name":"Asha","telegram_chat_id":"1234567890","phone_number":null}"#));
        let registration = TelegramRegistration { flat_no: "G1".into(), telegram_chat_id: "1234567890".into() };
        let owner = block_on(api.register_telegram(&registration)).unwrap();
        assert_eq!(owner.flat_no, "G1");
        assert_eq!(api.transport().json_body(0), json!({"flat_no": "G1", "telegram_chat_id": "1234567890"}));
        assert_eq!(api.transport().sent.borrow()[0].token, None);
    }

    #[test]
    fn test_register_unknown_flat() {
        let api = client(ScriptedTransport::default().reply(404,
            r#"{"detail":"Flat number not found. Please ensure the committee has added you to the master list."}"#));
        let registration = TelegramRegistration { flat_no: "Z9".into(), telegram_chat_id: "1".into() };
        let err = block_on(api.register_telegram(&registration)).unwrap_err();
        assert!(err.to_string().starts_with("Flat number not found."));
    }
}
