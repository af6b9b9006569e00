//! HTTP request helpers (json).

use secrecy::ExposeSecret;

use super::{HttpExecutionConfig, notify_on_error, send_and_read};
use crate::error::InvokeError;
use crate::execution::http::headers::json_request_headers;
use crate::execution::http::interceptor::HttpRequestContext;
use crate::types::{InvokeResponse, JsonPayload, PayloadKind};

/// POST a JSON object and read the response.
///
/// Sets `Content-Type: application/json` and `Accept: application/json`. The
/// body is the `serde_json` encoding of the payload, byte for byte.
pub async fn execute_json_request(
    config: &HttpExecutionConfig,
    url: &str,
    body: &JsonPayload,
) -> Result<InvokeResponse, InvokeError> {
    let ctx = HttpRequestContext::new(url, PayloadKind::Json);

    let result = send_json(config, &ctx, url, body).await;
    notify_on_error(config, &ctx, result)
}

async fn send_json(
    config: &HttpExecutionConfig,
    ctx: &HttpRequestContext,
    url: &str,
    body: &JsonPayload,
) -> Result<InvokeResponse, InvokeError> {
    let headers = json_request_headers(config.credential.expose_secret())?;
    let bytes = body.to_bytes()?;
    let rb = config
        .http_client
        .post(url)
        .headers(headers.clone())
        .body(bytes);
    send_and_read(config, ctx, rb, &headers).await
}
