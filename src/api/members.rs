//! Committee Member Endpoints

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{ApiClient, Body, Method, Transport};
use crate::error::ApiResult;
use crate::models::{CommitteeMember, NewMember};

/// Unreserved characters stay literal in a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

impl<T: Transport> ApiClient<T> {
    pub async fn list_members(&self, token: &str) -> ApiResult<Vec<CommitteeMember>> {
        self.call_json(Method::Get, "/auth/members", Some(token), Body::Empty).await
    }

    pub async fn add_member(&self, token: &str, member: &NewMember) -> ApiResult<CommitteeMember> {
        let body = Body::json(member)?;
        self.call_json(Method::Post, "/auth/members", Some(token), body).await
    }

    pub async fn remove_member(&self, token: &str, member_id: &str) -> ApiResult<()> {
        let path = format!("/auth/members/{}", utf8_percent_encode(member_id, SEGMENT));
        self.call(Method::Delete, &path, Some(token), Body::Empty).await?;
        Ok(())
    }
}
