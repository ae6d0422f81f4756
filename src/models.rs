//! Frontend Models
//!
//! Request and response bodies for the billing backend.

use serde::{Deserialize, Serialize};

/// Committee member (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitteeMember {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_bearer() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMember {
    pub email: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtpRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtpVerification<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default = "default_bearer")]
    pub token_type: String,
}

/// Plain `{message}` acknowledgement
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub message: Option<String>,
}

/// One computed bill from an upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    pub flat_no: String,
    pub name: String,
    pub units_consumed: f64,
    pub amount_due: f64,
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
}

/// Summary of one spreadsheet upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillBatchResult {
    pub total_records_processed: u32,
    pub notifications_ready: u32,
    pub skipped_records: u32,
    #[serde(default)]
    pub preview: Vec<BillRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelegramRegistration {
    pub flat_no: String,
    pub telegram_chat_id: String,
}

/// Flat record returned after linking a chat
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlatOwner {
    pub flat_no: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
}

/// Backend health probe
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub cost_per_unit: Option<f64>,
}
