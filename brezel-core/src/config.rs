//! Client connection configuration.
//!
//! Holds everything needed to reach one Brezel system: the API base URI, the
//! tenant (system) identifier, and optional credentials. Immutable after
//! construction.

use serde::{Deserialize, Serialize};

/// Connection options for a [`Client`](../../brezel_api/client/struct.Client.html).
///
/// Both credentials are optional and independent: the API key is sent as
/// `X-Api-Key`, the token as `Authorization: Bearer`. When both are set,
/// both headers are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientOptions {
    /// API base URI, e.g. "https://api.example.com".
    pub uri: String,

    /// Tenant/system identifier namespacing every call.
    pub system: String,

    /// Optional API key.
    #[serde(default)]
    pub key: Option<String>,

    /// Optional bearer token.
    #[serde(default)]
    pub token: Option<String>,
}

impl ClientOptions {
    /// Create options for an unauthenticated connection.
    pub fn new(uri: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            uri: sanitize_base_uri(&uri.into()),
            system: system.into(),
            key: None,
            token: None,
        }
    }

    /// Set the API key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Trim whitespace and trailing slashes from a base URI.
///
/// The URL builder strips one trailing slash from assembled URLs; a base URI
/// carrying its own trailing slash would still produce doubled slashes in
/// every path, so it is normalized here once.
pub fn sanitize_base_uri(uri: &str) -> String {
    uri.trim().trim_end_matches('/').to_string()
}
