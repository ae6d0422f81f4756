//! Browser `fetch` transport.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use super::{ApiRequest, ApiResponse, Body, Transport};
use crate::error::{js_message, ApiError, ApiResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn network(value: JsValue) -> ApiError {
    ApiError::Network(js_message(&value))
}

impl Transport for FetchTransport {
    type File = web_sys::File;

    async fn send(&self, request: ApiRequest<web_sys::File>) -> ApiResult<ApiResponse> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no browser window".into()))?;

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(network)?;
        if let Some(token) = &request.token {
            headers.set("Authorization", &format!("Bearer {}", token)).map_err(network)?;
        }

        match &request.body {
            Body::Empty => {}
            Body::Json(json) => {
                headers.set("Content-Type", "application/json").map_err(network)?;
                init.set_body(&JsValue::from_str(json));
            }
            Body::File { field, file } => {
                // Browser sets the multipart boundary itself
                let form = FormData::new().map_err(network)?;
                form.append_with_blob_and_filename(field, file, &file.name()).map_err(network)?;
                init.set_body(&form);
            }
        }
        init.set_headers(&headers);

        let req = Request::new_with_str_and_init(&request.url, &init).map_err(network)?;
        let value = JsFuture::from(window.fetch_with_request(&req)).await.map_err(network)?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| ApiError::Decode("fetch did not resolve to a Response".into()))?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(network)?).await.map_err(network)?;

        Ok(ApiResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
