//! Core error types.

use bytes::Bytes;
use std::path::PathBuf;
use thiserror::Error;

/// Which stage of an invocation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    Io,
    Decode,
    Configuration,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Transport => "transport",
            Self::Io => "io",
            Self::Decode => "decode",
            Self::Configuration => "configuration",
        };
        f.write_str(s)
    }
}

/// Error returned by the invoker.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// The request could not be delivered or its response could not be read.
    #[error("HTTP transport error: {0}")]
    Transport(String),

    /// A local file could not be opened or inspected. Raised before any
    /// request is sent.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The response body did not decode as expected. `raw` holds the body
    /// as received so the caller can fall back to treating it as text.
    #[error("Failed to decode response: {message}")]
    Decode { message: String, raw: Bytes },

    /// The invoker or its request headers could not be constructed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl InvokeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(message: impl Into<String>, raw: impl Into<Bytes>) -> Self {
        Self::Decode {
            message: message.into(),
            raw: raw.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Io { .. } => ErrorKind::Io,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Raw response body carried by a decode failure.
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            Self::Decode { raw, .. } => Some(raw.as_ref()),
            _ => None,
        }
    }

    /// Raw response body of a decode failure, lossily converted to text.
    pub fn raw_text(&self) -> Option<String> {
        self.raw_body()
            .map(|raw| String::from_utf8_lossy(raw).into_owned())
    }
}
