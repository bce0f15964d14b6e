//! HTTP client layer — `CoinerHttp` with a configurable retry policy.

pub mod client;
pub mod retry;

pub use client::CoinerHttp;
pub use retry::{RetryConfig, RetryPolicy};
