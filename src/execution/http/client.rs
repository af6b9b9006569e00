//! `reqwest::Client` construction from [`HttpConfig`].

use crate::error::InvokeError;
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::types::HttpConfig;

/// Build an HTTP client from `HttpConfig`. Extra headers become client
/// defaults, so headers set per request (auth, content type) win over them.
pub fn build_http_client_from_config(cfg: &HttpConfig) -> Result<reqwest::Client, InvokeError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = cfg.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = cfg.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(proxy_url) = &cfg.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| InvokeError::Configuration(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }
    if let Some(user_agent) = &cfg.user_agent {
        builder = builder.user_agent(user_agent);
    }

    // Default headers
    if !cfg.headers.is_empty() {
        let headers = HttpHeaderBuilder::new()
            .with_custom_headers(&cfg.headers)?
            .build();
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| InvokeError::Configuration(format!("Failed to build HTTP client: {e}")))
}
