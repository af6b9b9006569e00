//! regolo-invoke
//!
//! A minimal typed invoker for hosted inference APIs: one POST per call with
//! a bearer credential, a JSON or multipart body, and the full response body
//! handed back to the caller.
#![deny(unsafe_code)]

pub mod config;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod invoker;
pub mod types;
pub mod utils;

pub use config::InvokerConfig;
pub use error::{ErrorKind, InvokeError};
pub use invoker::{Invoker, InvokerBuilder, invoke};
pub use types::{
    ChatCompletionRequest, ChatMessage, ChatRole, FilePart, HttpConfig, ImageGenerationRequest,
    InvokeResponse, JsonPayload, JsonResponse, MultipartPayload, Payload, TranscriptionRequest,
};
