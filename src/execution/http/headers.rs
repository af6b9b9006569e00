//! HTTP Headers Utility
//!
//! Builds the per-request headers an invocation sends.

use crate::error::InvokeError;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};
use std::collections::HashMap;

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Bearer token authorization. An empty token is sent as-is.
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, InvokeError> {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            InvokeError::Configuration(format!("Invalid credential format: {e}"))
        })?;
        auth_value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, auth_value);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Ask for a JSON response
    pub fn with_accept_json(mut self) -> Self {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        self
    }

    /// Add user agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, InvokeError> {
        self.headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|e| InvokeError::Configuration(format!("Invalid user agent: {e}")))?,
        );
        Ok(self)
    }

    /// Add a custom header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, InvokeError> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Add multiple custom headers from a HashMap
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, InvokeError> {
        for (key, value) in custom_headers {
            let (name, value) = parse_header(key, value)?;
            self.headers.insert(name, value);
        }
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), InvokeError> {
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
        InvokeError::Configuration(format!("Invalid header name '{name}': {e}"))
    })?;
    let header_value = HeaderValue::from_str(value).map_err(|e| {
        InvokeError::Configuration(format!("Invalid header value for '{name}': {e}"))
    })?;
    Ok((header_name, header_value))
}

/// Headers for a JSON invocation: bearer auth, JSON content type, JSON accept.
pub fn json_request_headers(credential: &str) -> Result<HeaderMap, InvokeError> {
    Ok(HttpHeaderBuilder::new()
        .with_bearer_auth(credential)?
        .with_json_content_type()
        .with_accept_json()
        .build())
}

/// Headers for a multipart invocation. Content-Type is left to the form
/// encoder, which owns the boundary.
pub fn multipart_request_headers(credential: &str) -> Result<HeaderMap, InvokeError> {
    Ok(HttpHeaderBuilder::new().with_bearer_auth(credential)?.build())
}
