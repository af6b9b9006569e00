//! Executors

pub mod http_request;
