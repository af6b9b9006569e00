//! Type Conversions for InvokeError
//!
//! `From` implementations for the error types of the crates the invoker sits on.

use super::types::InvokeError;

impl From<reqwest::Error> for InvokeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for InvokeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
            raw: bytes::Bytes::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: InvokeError = json_err.into();
        assert!(err.is_decode());
        assert_eq!(err.raw_body(), Some(&b""[..]));
    }

    #[tokio::test]
    async fn test_from_reqwest_error_is_transport() {
        let reqwest_err = reqwest::Client::new()
            .post("not a url")
            .send()
            .await
            .unwrap_err();
        let err: InvokeError = reqwest_err.into();
        assert!(err.is_transport());
    }
}
