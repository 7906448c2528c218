//! A minimal SDK for the wit.ai HTTP API, as described at
//! https://wit.ai/docs/http.
//!
//! This only has the endpoints and types that are required for the wit CLI.

pub mod client;
pub mod entities;
