//! Typed request shapes for the hosted endpoints.
//!
//! Each request knows how to turn itself into a [`Payload`]; the invoker
//! does not care which endpoint it talks to.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::payload::{FilePart, JsonPayload, MultipartPayload, Payload};
use crate::error::InvokeError;

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Chat completion body: `{"model": ..., "messages": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
        }
    }

    pub fn message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn user(self, content: impl Into<String>) -> Self {
        self.message(ChatMessage::user(content))
    }

    pub fn into_payload(self) -> Result<Payload, InvokeError> {
        Ok(JsonPayload::from_serializable(&self)?.into())
    }
}

/// Image generation body: `{"data": ["<prompt>", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub data: Vec<String>,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            data: vec![prompt.into()],
        }
    }

    pub fn into_payload(self) -> Result<Payload, InvokeError> {
        Ok(JsonPayload::from_serializable(&self)?.into())
    }
}

/// Audio transcription form: a `model` value part and a `file` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    pub model: String,
    pub file: PathBuf,
    /// Filename sent in the part header; defaults to the file's own name.
    pub filename: Option<String>,
    /// Additional plain form fields (e.g. `language`).
    pub extra_fields: Vec<(String, String)>,
}

impl TranscriptionRequest {
    pub fn new(model: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            file: file.into(),
            filename: None,
            extra_fields: Vec::new(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_fields.push((name.into(), value.into()));
        self
    }

    pub fn into_payload(self) -> Payload {
        let mut part = FilePart::new("file", self.file);
        if let Some(filename) = self.filename {
            part = part.with_filename(filename);
        }
        let mut form = MultipartPayload::new().text("model", self.model);
        for (name, value) in self.extra_fields {
            form = form.text(name, value);
        }
        form.file_part(part).into()
    }
}

impl From<TranscriptionRequest> for Payload {
    fn from(req: TranscriptionRequest) -> Self {
        req.into_payload()
    }
}
