//! Response returned by an invocation.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::InvokeError;

/// Fully read response. Non-success statuses are reported here, not as errors.
#[derive(Debug, Clone)]
pub struct InvokeResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl InvokeResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body as text; invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as a JSON object. On failure the raw body travels with
    /// the error and stays available on `self`.
    pub fn json(&self) -> Result<Map<String, Value>, InvokeError> {
        match serde_json::from_slice::<Value>(&self.body) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(InvokeError::decode(
                "response body is JSON but not an object",
                self.body.clone(),
            )),
            Err(e) => Err(InvokeError::decode(e.to_string(), self.body.clone())),
        }
    }

    /// Decode the body into a caller-chosen type.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, InvokeError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| InvokeError::decode(e.to_string(), self.body.clone()))
    }
}

/// Response decoded as a JSON object, with the raw response kept alongside.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    pub json: Map<String, Value>,
    pub raw: InvokeResponse,
}

impl TryFrom<InvokeResponse> for JsonResponse {
    type Error = InvokeError;

    fn try_from(raw: InvokeResponse) -> Result<Self, Self::Error> {
        let json = raw.json()?;
        Ok(Self { json, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &'static str) -> InvokeResponse {
        InvokeResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn decodes_object_body() {
        let resp = response(200, r#"{"id":"x"}"#);
        let map = resp.json().unwrap();
        assert_eq!(map.get("id"), Some(&Value::String("x".into())));
        assert!(resp.is_success());
    }

    #[test]
    fn non_json_body_is_decode_error_with_raw_body() {
        let resp = response(502, "Bad Gateway");
        let err = resp.json().unwrap_err();
        assert!(err.is_decode());
        assert_eq!(err.raw_body(), Some(&b"Bad Gateway"[..]));
        assert_eq!(resp.text(), "Bad Gateway");
        assert!(!resp.is_success());
    }

    #[test]
    fn json_array_is_not_an_object() {
        let err = response(200, "[1,2]").json().unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn json_as_decodes_typed_values() {
        #[derive(serde::Deserialize)]
        struct Transcript {
            text: String,
        }
        let t: Transcript = response(200, r#"{"text":"ciao"}"#).json_as().unwrap();
        assert_eq!(t.text, "ciao");
    }
}
