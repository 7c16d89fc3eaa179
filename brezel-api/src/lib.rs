//! Typed HTTP client for the Brezel resource-management REST API.
//!
//! The API organizes data into modules containing typed entities, with
//! notifications, files, views, and webhook-style events alongside. This
//! crate is the single point of contact for application code: it builds
//! authenticated requests, encodes query parameters (including compound
//! filter expressions), and normalizes HTTP error responses into the
//! structured [`BrezelError::Api`] variant.
//!
//! The client is a stateless façade: it owns only the immutable connection
//! configuration and performs no caching, retrying, or offline queueing.
//!
//! ```no_run
//! use brezel_api::{Client, ClientOptions, EntitiesQuery};
//! use brezel_api::models::{FilterClause, FilterOperator};
//!
//! # async fn run() -> brezel_api::BrezelResult<()> {
//! let client = Client::new(
//!     ClientOptions::new("https://api.example.com", "test").with_key("secret"),
//! )?;
//! let entities = client
//!     .fetch_entities(
//!         "module1",
//!         &EntitiesQuery::new()
//!             .filters(vec![FilterClause::new("title", FilterOperator::Eq, "Perfect")]),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod models;
pub mod response;
pub mod url;

// Re-export key types
pub use brezel_core::config::ClientOptions;
pub use brezel_core::error::{BrezelError, BrezelResult, ErrorBody};
pub use client::Client;
pub use endpoints::{EntitiesQuery, Event, FileSize, HistoryQuery};
pub use response::{EntityResponse, ValidationErrors};
pub use url::{api_link, Params, Segment};
