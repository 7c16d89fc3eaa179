//! Shared types for the Brezel API client.
//!
//! Connection configuration and the unified error type live here so that
//! both the HTTP client crate and downstream consumers can depend on them
//! without pulling in the transport stack.

pub mod config;
pub mod error;

pub use config::ClientOptions;
pub use error::{BrezelError, BrezelResult, ErrorBody};
