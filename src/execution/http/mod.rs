//! HTTP plumbing shared by the executors: client construction, header
//! building and interceptor hooks.

pub mod client;
pub mod headers;
pub mod interceptor;
