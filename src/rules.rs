//! Form Rules
//!
//! Guards that enable or disable the console's controls, plus the
//! as-you-type input filters. Kept free of Leptos so they test natively.

use crate::config::{MAX_MEMBERS, MIN_MEMBERS, OTP_LENGTH};

pub fn can_request_otp(email: &str) -> bool {
    !email.trim().is_empty()
}

/// Exactly six ASCII digits
pub fn can_verify_otp(code: &str) -> bool {
    code.len() == OTP_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

/// Digits only, capped at the passcode length
pub fn sanitize_otp(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(OTP_LENGTH).collect()
}

pub fn can_add_member(member_count: usize, email: &str) -> bool {
    member_count < MAX_MEMBERS && !email.trim().is_empty()
}

/// A member may not remove themself, and the committee never drops below one
pub fn can_remove_member(member_count: usize, target_email: &str, own_email: &str) -> bool {
    member_count > MIN_MEMBERS && !is_same_email(target_email, own_email)
}

/// Guard for the confirmed removal itself
pub fn can_confirm_removal(
    member_count: usize,
    target_email: &str,
    own_email: &str,
    busy: bool,
) -> bool {
    !busy && can_remove_member(member_count, target_email, own_email)
}

pub fn is_same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Blank input means "no phone number"
pub fn optional_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn can_upload(file_selected: bool, uploading: bool) -> bool {
    file_selected && !uploading
}

pub fn normalize_flat_no(raw: &str) -> String {
    raw.to_uppercase()
}

pub fn sanitize_chat_id(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

pub fn can_register(flat_no: &str, chat_id: &str) -> bool {
    !flat_no.trim().is_empty() && !chat_id.is_empty()
}
