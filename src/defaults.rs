//! Default Configuration Values

/// HTTP client default configurations
pub mod http {
    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("regolo-invoke/", env!("CARGO_PKG_VERSION"));
}

/// Environment variable names used by the demo programs.
///
/// The invoker never reads these on its own; see `InvokerConfig::from_env`.
pub mod env {
    pub const ENDPOINT: &str = "ENDPOINT";
    pub const TOKEN: &str = "REGOLO_TOKEN";
}

/// Hosted endpoints used by the demo programs.
pub mod endpoints {
    pub const TRANSCRIPTION: &str =
        "https://api.regolo.ai/v1/models/whisper-large-v3/transcriptions";
}
