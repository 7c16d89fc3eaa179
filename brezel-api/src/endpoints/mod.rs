//! API endpoint catalog organized by category.
//!
//! Each module adds typed operations to [`crate::client::Client`] for one
//! group of related endpoints. Every operation is a fixed recipe of verb,
//! path, parameter shape, body shape, and decode step; all of them propagate
//! dispatcher errors unchanged.

pub mod entities;
pub mod events;
pub mod files;
pub mod modules;
pub mod notifications;
pub mod system;
pub mod views;

pub use entities::{EntitiesQuery, HistoryQuery};
pub use events::Event;
pub use files::FileSize;
