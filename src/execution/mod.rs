//! Request execution: HTTP plumbing and the executors that send one
//! request per invocation.

pub mod executors;
pub mod http;
