//! Invoker configuration.
//!
//! The invoker never looks at process state. Whatever the caller knows about
//! the endpoint and credential goes in here, explicitly.

use secrecy::{ExposeSecret, SecretString};

use crate::error::InvokeError;
use crate::types::HttpConfig;

/// Endpoint, credential and HTTP settings for an [`crate::Invoker`].
#[derive(Debug, Clone)]
pub struct InvokerConfig {
    pub endpoint: String,
    pub credential: SecretString,
    pub http: HttpConfig,
}

impl InvokerConfig {
    pub fn new(endpoint: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential: SecretString::from(credential.into()),
            http: HttpConfig::default(),
        }
    }

    pub fn with_http_config(mut self, http: HttpConfig) -> Self {
        self.http = http;
        self
    }

    /// Read endpoint and credential from the named environment variables.
    ///
    /// A missing endpoint is an error. A missing credential becomes an empty
    /// one, which the server is left to reject.
    pub fn from_env(endpoint_var: &str, credential_var: &str) -> Result<Self, InvokeError> {
        Self::from_lookup(endpoint_var, credential_var, |name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`] with a caller-supplied lookup.
    pub fn from_lookup<F>(
        endpoint_var: &str,
        credential_var: &str,
        lookup: F,
    ) -> Result<Self, InvokeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(endpoint_var)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                InvokeError::Configuration(format!("{endpoint_var} is not set"))
            })?;
        let credential = lookup(credential_var).unwrap_or_else(|| {
            tracing::warn!(var = credential_var, "credential variable not set, sending empty bearer token");
            String::new()
        });
        Ok(Self::new(endpoint, credential))
    }

    pub(crate) fn credential_is_empty(&self) -> bool {
        self.credential.expose_secret().is_empty()
    }
}
