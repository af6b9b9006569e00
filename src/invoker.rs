//! Request Invoker
//!
//! [`Invoker`] sends one POST per call to a configured endpoint and returns the
//! fully read response. The body encoder follows the [`Payload`] variant.
//!
//! ```rust,ignore
//! use regolo_invoke::{ChatCompletionRequest, Invoker};
//!
//! let invoker = Invoker::builder()
//!     .endpoint("https://api.example.test/v1/chat/completions")
//!     .credential(token)
//!     .build()?;
//! let payload = ChatCompletionRequest::new("m").user("hi").into_payload()?;
//! let reply = invoker.invoke_json(payload).await?;
//! println!("{:?}", reply.json);
//! ```

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::config::InvokerConfig;
use crate::error::InvokeError;
use crate::execution::executors::http_request::{
    HttpExecutionConfig, execute_json_request, execute_multipart_request,
};
use crate::execution::http::client::build_http_client_from_config;
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::execution::http::interceptor::{HttpInterceptor, LoggingInterceptor};
use crate::types::{HttpConfig, InvokeResponse, JsonResponse, Payload};

/// Configured request invoker. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct Invoker {
    endpoint: String,
    exec: HttpExecutionConfig,
}

impl Invoker {
    /// Build an invoker from an explicit configuration.
    pub fn new(config: InvokerConfig) -> Result<Self, InvokeError> {
        InvokerBuilder::from_config(config).build()
    }

    pub fn builder() -> InvokerBuilder {
        InvokerBuilder::default()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `payload` to the configured endpoint.
    pub async fn invoke(&self, payload: impl Into<Payload>) -> Result<InvokeResponse, InvokeError> {
        self.invoke_at(&self.endpoint, payload).await
    }

    /// Send `payload` to `url` with this invoker's credential and client.
    pub async fn invoke_at(
        &self,
        url: &str,
        payload: impl Into<Payload>,
    ) -> Result<InvokeResponse, InvokeError> {
        match payload.into() {
            Payload::Json(body) => execute_json_request(&self.exec, url, &body).await,
            Payload::Multipart(form) => execute_multipart_request(&self.exec, url, &form).await,
        }
    }

    /// Send `payload` and decode the response body as a JSON object.
    ///
    /// A body that is not a JSON object yields [`InvokeError::Decode`], which
    /// carries the raw body.
    pub async fn invoke_json(
        &self,
        payload: impl Into<Payload>,
    ) -> Result<JsonResponse, InvokeError> {
        let response = self.invoke(payload).await?;
        JsonResponse::try_from(response)
    }
}

/// One-shot invocation: `endpoint`, `credential` and `payload` in, response out.
pub async fn invoke(
    endpoint: &str,
    credential: &str,
    payload: impl Into<Payload>,
) -> Result<InvokeResponse, InvokeError> {
    Invoker::builder()
        .endpoint(endpoint)
        .credential(credential)
        .build()?
        .invoke(payload)
        .await
}

/// Builder for [`Invoker`].
#[derive(Default)]
pub struct InvokerBuilder {
    endpoint: Option<String>,
    credential: Option<String>,
    http_config: HttpConfig,
    http_client: Option<reqwest::Client>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl InvokerBuilder {
    /// Start from an explicit configuration.
    pub fn from_config(config: InvokerConfig) -> Self {
        Self {
            endpoint: Some(config.endpoint),
            credential: Some(config.credential.expose_secret().to_string()),
            http_config: config.http,
            ..Self::default()
        }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Use an existing client instead of building one from `HttpConfig`.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn with_interceptors(mut self, interceptors: Vec<Arc<dyn HttpInterceptor>>) -> Self {
        self.interceptors.extend(interceptors);
        self
    }

    /// Install [`LoggingInterceptor`].
    pub fn with_http_debug(self) -> Self {
        self.interceptor(Arc::new(LoggingInterceptor))
    }

    pub fn build(self) -> Result<Invoker, InvokeError> {
        let endpoint = self
            .endpoint
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| InvokeError::Configuration("Endpoint not specified".to_string()))?;
        let config = InvokerConfig::new(endpoint, self.credential.unwrap_or_default())
            .with_http_config(self.http_config);
        // Rejects credentials that cannot form an Authorization header.
        HttpHeaderBuilder::new().with_bearer_auth(config.credential.expose_secret())?;
        if config.credential_is_empty() {
            tracing::debug!(target: "regolo_invoke::http", endpoint = %config.endpoint, "empty credential");
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => build_http_client_from_config(&config.http)?,
        };

        Ok(Invoker {
            endpoint: config.endpoint,
            exec: HttpExecutionConfig {
                http_client,
                credential: config.credential,
                interceptors: self.interceptors,
            },
        })
    }
}
