//! Request payloads.
//!
//! A [`Payload`] is either a JSON object or a multipart form. The variant picks
//! the encoder: JSON bodies go through `serde_json`, multipart bodies through
//! `reqwest::multipart` with file contents streamed from disk.

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::InvokeError;

/// Body of a single invocation.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(JsonPayload),
    Multipart(MultipartPayload),
}

/// Short name of a payload variant, used in logs and interceptor contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Json,
    Multipart,
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Multipart => f.write_str("multipart"),
        }
    }
}

impl From<JsonPayload> for Payload {
    fn from(value: JsonPayload) -> Self {
        Self::Json(value)
    }
}

impl From<MultipartPayload> for Payload {
    fn from(value: MultipartPayload) -> Self {
        Self::Multipart(value)
    }
}

/// JSON object body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonPayload {
    fields: Map<String, Value>,
}

impl JsonPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a top-level field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Build from any serializable value that encodes to a JSON object.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, InvokeError> {
        match serde_json::to_value(value).map_err(encode_error)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(InvokeError::Configuration(format!(
                "JSON payload must be an object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// UTF-8 JSON encoding of the body, exactly as sent.
    pub fn to_bytes(&self) -> Result<Vec<u8>, InvokeError> {
        serde_json::to_vec(&self.fields).map_err(encode_error)
    }
}

impl From<Map<String, Value>> for JsonPayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for JsonPayload {
    type Error = InvokeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(InvokeError::Configuration(format!(
                "JSON payload must be an object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn encode_error(e: serde_json::Error) -> InvokeError {
    InvokeError::Configuration(format!("Failed to encode JSON payload: {e}"))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A file field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub filename: String,
    pub path: PathBuf,
    /// MIME type; guessed from the filename when unset.
    pub mime: Option<String>,
}

impl FilePart {
    /// File part named after the last component of `path`.
    pub fn new(field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Self {
            field: field.into(),
            filename,
            path,
            mime: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Explicit MIME type, or the one implied by the filename.
    pub fn effective_mime(&self) -> String {
        self.mime
            .clone()
            .unwrap_or_else(|| crate::utils::mime::guess_mime_from_path(&self.filename))
    }
}

/// multipart/form-data body: ordered text fields followed by file parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    fields: Vec<(String, String)>,
    files: Vec<FilePart>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain value part.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add a file part read from `path`, named after the file.
    pub fn file(self, field: impl Into<String>, path: impl AsRef<Path>) -> Self {
        self.file_part(FilePart::new(field, path.as_ref()))
    }

    pub fn file_part(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn files(&self) -> &[FilePart] {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_payload_roundtrips_through_encoding() {
        let payload = JsonPayload::new()
            .field("model", "m")
            .field("messages", json!([{"role": "user", "content": "hi"}]))
            .field("temperature", 0.2)
            .field("n", 2);

        let bytes = payload.to_bytes().unwrap();
        let decoded: Map<String, Value> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(&decoded, payload.fields());
    }

    #[test]
    fn json_payload_rejects_non_objects() {
        let err = JsonPayload::try_from(json!(["a", "b"])).unwrap_err();
        assert!(err.to_string().contains("array"));
        assert!(JsonPayload::from_serializable(&"plain").is_err());
    }

    #[test]
    fn file_part_defaults_filename_and_mime() {
        let part = FilePart::new("file", "/tmp/audio/sample.mp3");
        assert_eq!(part.filename, "sample.mp3");
        assert_eq!(part.effective_mime(), "audio/mpeg");

        let part = part.with_filename("clip.bin").with_mime("audio/wav");
        assert_eq!(part.effective_mime(), "audio/wav");
    }

    #[test]
    fn multipart_keeps_field_order() {
        let form = MultipartPayload::new()
            .text("model", "whisper-1")
            .text("language", "it")
            .file("file", "file.mp3");
        assert_eq!(form.fields()[0].0, "model");
        assert_eq!(form.fields()[1].0, "language");
        assert_eq!(form.files().len(), 1);
        assert!(matches!(Payload::from(form), Payload::Multipart(_)));
    }
}
