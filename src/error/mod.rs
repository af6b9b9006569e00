//! Error Handling Module
//!
//! Every invocation fails with one [`InvokeError`], whose [`ErrorKind`] tells the
//! caller which stage went wrong:
//! - `Transport`: DNS, connect, TLS, timeout or body-read failures from the HTTP client
//! - `Io`: a local file referenced by a multipart payload could not be opened
//! - `Decode`: the response body was not the expected JSON object
//! - `Configuration`: the invoker could not be constructed (bad header value, missing env var)
//!
//! # Example
//!
//! ```rust,ignore
//! use regolo_invoke::error::{ErrorKind, InvokeError};
//!
//! let error = InvokeError::Transport("connection refused".into());
//! assert_eq!(error.kind(), ErrorKind::Transport);
//! ```

mod conversions;
pub mod types;

pub use types::*;
