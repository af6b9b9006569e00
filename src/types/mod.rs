//! Core data types: HTTP configuration, request payloads, typed request
//! shapes and responses.

pub mod http;
pub mod payload;
pub mod requests;
pub mod response;

pub use http::{HttpConfig, HttpConfigBuilder};
pub use payload::{FilePart, JsonPayload, MultipartPayload, Payload, PayloadKind};
pub use requests::{
    ChatCompletionRequest, ChatMessage, ChatRole, ImageGenerationRequest, TranscriptionRequest,
};
pub use response::{InvokeResponse, JsonResponse};
