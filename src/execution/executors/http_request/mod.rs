//! Basic HTTP request helpers (non-stream)
//!
//! Stable entry points for the two body encodings, JSON and multipart. Each
//! call sends exactly one POST request, with interceptor hooks, and reads the
//! whole response body. Nothing is retried.

use std::sync::Arc;

use secrecy::SecretString;

use crate::error::InvokeError;
use crate::execution::http::interceptor::{HttpInterceptor, HttpRequestContext};
use crate::types::InvokeResponse;

mod json;
mod multipart;

pub use json::execute_json_request;
pub use multipart::{build_multipart_form, execute_multipart_request};

/// Everything an executor needs besides the URL and body.
#[derive(Clone)]
pub struct HttpExecutionConfig {
    pub http_client: reqwest::Client,
    pub credential: SecretString,
    pub interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl std::fmt::Debug for HttpExecutionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutionConfig")
            .field("credential", &self.credential)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

/// Run before-send interceptors, send the request and read the full body.
async fn send_and_read(
    config: &HttpExecutionConfig,
    ctx: &HttpRequestContext,
    mut rb: reqwest::RequestBuilder,
    headers: &reqwest::header::HeaderMap,
) -> Result<InvokeResponse, InvokeError> {
    for interceptor in &config.interceptors {
        rb = interceptor.on_before_send(ctx, rb, headers)?;
    }

    let resp = rb
        .send()
        .await
        .map_err(|e| InvokeError::Transport(e.to_string()))?;

    for interceptor in &config.interceptors {
        interceptor.on_response(ctx, &resp)?;
    }

    let status = resp.status().as_u16();
    let headers = resp.headers().clone();
    let body = resp
        .bytes()
        .await
        .map_err(|e| InvokeError::Transport(e.to_string()))?;

    tracing::debug!(
        target: "regolo_invoke::http",
        request_id = %ctx.request_id,
        status,
        bytes = body.len(),
        "response read"
    );

    Ok(InvokeResponse {
        status,
        headers,
        body,
    })
}

/// Notify interceptors of a failed invocation and pass the result through.
fn notify_on_error(
    config: &HttpExecutionConfig,
    ctx: &HttpRequestContext,
    result: Result<InvokeResponse, InvokeError>,
) -> Result<InvokeResponse, InvokeError> {
    if let Err(error) = &result {
        for interceptor in &config.interceptors {
            interceptor.on_error(ctx, error);
        }
    }
    result
}
