//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types with parsed values and display helpers
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `From` conversions, where text-encoded numbers get parsed
//! - `client.rs` — Sub-client with HTTP methods

pub mod coin;
pub mod history;
