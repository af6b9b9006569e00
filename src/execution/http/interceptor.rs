//! HTTP Interceptor interfaces
//!
//! Interceptors observe an invocation: they may tweak the request builder
//! before send, look at the response, and are told about errors. Hooks are
//! best-effort and must not log credentials or bodies.

use crate::error::InvokeError;
use crate::types::PayloadKind;
use reqwest::header::HeaderMap;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub request_id: String,
    pub url: String,
    pub payload_kind: PayloadKind,
}

impl HttpRequestContext {
    pub fn new(url: impl Into<String>, payload_kind: PayloadKind) -> Self {
        Self {
            request_id: generate_request_id(),
            url: url.into(),
            payload_kind,
        }
    }
}

/// Generate a unique id for correlating the hooks of one request.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Return the (possibly modified)
    /// builder or an error to short-circuit the request.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _headers: &HeaderMap,
    ) -> Result<reqwest::RequestBuilder, InvokeError> {
        Ok(builder)
    }

    /// Called once the response head has arrived, whatever its status.
    fn on_response(
        &self,
        _ctx: &HttpRequestContext,
        _response: &reqwest::Response,
    ) -> Result<(), InvokeError> {
        Ok(())
    }

    /// Called when the invocation fails.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &InvokeError) {}
}

/// A simple logging interceptor backed by `tracing` (no sensitive data).
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _headers: &HeaderMap,
    ) -> Result<reqwest::RequestBuilder, InvokeError> {
        tracing::debug!(target: "regolo_invoke::http", request_id=%ctx.request_id, url=%ctx.url, payload=%ctx.payload_kind, "sending request");
        Ok(builder)
    }

    fn on_response(
        &self,
        ctx: &HttpRequestContext,
        response: &reqwest::Response,
    ) -> Result<(), InvokeError> {
        tracing::debug!(target: "regolo_invoke::http", request_id=%ctx.request_id, url=%ctx.url, status=%response.status().as_u16(), "response received");
        Ok(())
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &InvokeError) {
        tracing::warn!(target: "regolo_invoke::http", request_id=%ctx.request_id, url=%ctx.url, kind=%error.kind(), err=%error, "request error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn request_ids_are_unique() {
        let a = HttpRequestContext::new("http://x", PayloadKind::Json);
        let b = HttpRequestContext::new("http://x", PayloadKind::Json);
        assert_ne!(a.request_id, b.request_id);
    }

    #[traced_test]
    #[test]
    fn logging_interceptor_reports_error_kind() {
        let ctx = HttpRequestContext::new("http://example.test/chat", PayloadKind::Json);
        LoggingInterceptor.on_error(&ctx, &InvokeError::Transport("refused".into()));
        assert!(logs_contain("request error"));
        assert!(logs_contain("kind=transport"));
    }
}
