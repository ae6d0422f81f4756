//! Health Endpoint

use super::{ApiClient, Body, Method, Transport};
use crate::error::ApiResult;
use crate::models::ApiStatus;

impl<T: Transport> ApiClient<T> {
    pub async fn status(&self) -> ApiResult<ApiStatus> {
        self.call_json(Method::Get, "/status", None, Body::Empty).await
    }
}
