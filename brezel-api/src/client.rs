//! HTTP client for the Brezel REST API.
//!
//! One generic dispatcher handles URL assembly, authentication headers,
//! cookie handling, and response-status classification. The endpoint catalog
//! in [`crate::endpoints`] is built entirely on the verb wrappers here.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use brezel_core::config::ClientOptions;
use brezel_core::error::{BrezelError, BrezelResult, ErrorBody};

use crate::url::{api_link, Params, Segment};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Client for one Brezel system.
///
/// Holds the immutable connection configuration and a `reqwest::Client`;
/// cloning is cheap and concurrent calls are independent. The client keeps
/// no other state: every operation is a single request/response exchange.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    uri: String,
    system: String,
    key: Option<String>,
    token: Option<String>,
}

impl Client {
    /// Create a client with a default HTTP transport.
    ///
    /// The transport carries a cookie store: the API may exchange a bearer
    /// token for a session cookie during redirect-based flows, so cookies
    /// must be sent and stored on every call.
    pub fn new(options: ClientOptions) -> BrezelResult<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| BrezelError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_http_client(options, http))
    }

    /// Create a client with an injected HTTP transport.
    ///
    /// Seam for tests and for callers that need custom transport settings
    /// (proxies, certificates, timeouts). The library imposes no timeout of
    /// its own; configure one here or wrap calls in a timeout future.
    pub fn with_http_client(options: ClientOptions, http: reqwest::Client) -> Self {
        Self {
            http,
            uri: options.uri,
            system: options.system,
            key: options.key,
            token: options.token,
        }
    }

    /// The configured API base URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The configured tenant/system identifier.
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Dispatch a request for a structured path.
    ///
    /// Fails with [`BrezelError::Api`] when the response status is in
    /// [400, 599]. Any other status resolves with the raw response; callers
    /// decide how to decode the body.
    pub async fn request(
        &self,
        method: Method,
        path: &[Segment],
        params: &Params,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> BrezelResult<Response> {
        let url = api_link(path, params, &self.uri, Some(&self.system))?;
        self.request_url(method, url, body, headers).await
    }

    /// Dispatch a request for a prebuilt URL.
    ///
    /// Escape hatch for callers that already hold a fully-formed URL (e.g.
    /// links returned by the API itself).
    pub async fn request_url(
        &self,
        method: Method,
        url: Url,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> BrezelResult<Response> {
        debug!("{} {}", method, url);

        let mut headers = headers;
        if let Some(token) = &self.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|e| BrezelError::Http(format!("invalid bearer token: {e}")))?,
            );
        }
        if let Some(key) = &self.key {
            headers.insert(
                API_KEY_HEADER,
                HeaderValue::from_str(key)
                    .map_err(|e| BrezelError::Http(format!("invalid api key: {e}")))?,
            );
        }

        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify_transport_error)?;
        check_status(response).await
    }

    // --- Verb wrappers ---

    /// GET request.
    pub async fn get(&self, path: &[Segment], params: &Params) -> BrezelResult<Response> {
        self.request(Method::GET, path, params, None, HeaderMap::new())
            .await
    }

    /// PUT request with an optional JSON body.
    pub async fn put(
        &self,
        path: &[Segment],
        params: &Params,
        body: Option<&Value>,
    ) -> BrezelResult<Response> {
        self.request(Method::PUT, path, params, body, HeaderMap::new())
            .await
    }

    /// POST request with an optional JSON body.
    pub async fn post(
        &self,
        path: &[Segment],
        params: &Params,
        body: Option<&Value>,
    ) -> BrezelResult<Response> {
        self.request(Method::POST, path, params, body, HeaderMap::new())
            .await
    }

    /// PATCH request with an optional JSON body.
    pub async fn patch(
        &self,
        path: &[Segment],
        params: &Params,
        body: Option<&Value>,
    ) -> BrezelResult<Response> {
        self.request(Method::PATCH, path, params, body, HeaderMap::new())
            .await
    }

    /// DELETE request with an optional JSON body.
    pub async fn delete(
        &self,
        path: &[Segment],
        params: &Params,
        body: Option<&Value>,
    ) -> BrezelResult<Response> {
        self.request(Method::DELETE, path, params, body, HeaderMap::new())
            .await
    }

    // --- Decode helpers ---

    /// Decode a response body as JSON.
    pub async fn decode_json<T: DeserializeOwned>(response: Response) -> BrezelResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| BrezelError::Serialization(format!("failed to parse response: {e}")))
    }

    /// Decode a response body as text.
    pub async fn decode_text(response: Response) -> BrezelResult<String> {
        response
            .text()
            .await
            .map_err(|e| BrezelError::Http(format!("failed to read response body: {e}")))
    }

    /// Decode a response body as raw bytes (file downloads).
    pub async fn decode_bytes(response: Response) -> BrezelResult<Vec<u8>> {
        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| BrezelError::Http(format!("failed to read response bytes: {e}")))
    }
}

/// Classify a response: statuses in [400, 599] become [`BrezelError::Api`],
/// everything else passes through untouched.
async fn check_status(response: Response) -> BrezelResult<Response> {
    let status = response.status().as_u16();
    if !(400..=599).contains(&status) {
        return Ok(response);
    }

    let url = response.url().to_string();
    let headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    // Decoding the error body must never itself fail; substitute a
    // placeholder when the body is unreadable or claims JSON but is not.
    let body = match response.text().await {
        Ok(text) if is_json => serde_json::from_str(&text)
            .map(ErrorBody::Json)
            .unwrap_or_else(|_| ErrorBody::Text("Failed to parse response".into())),
        Ok(text) => ErrorBody::Text(text),
        Err(_) => ErrorBody::Text("Failed to parse response".into()),
    };

    Err(BrezelError::Api {
        status,
        url,
        body,
        headers,
    })
}

/// Map a reqwest transport error onto the client error taxonomy.
fn classify_transport_error(e: reqwest::Error) -> BrezelError {
    if e.is_timeout() {
        BrezelError::Timeout(e.to_string())
    } else if e.is_connect() {
        BrezelError::Http(format!("connection failed: {e}"))
    } else {
        BrezelError::Http(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        Client::new(
            ClientOptions::new("https://api.example.com", "test")
                .with_key("testkey")
                .with_token("testtoken"),
        )
        .unwrap()
    }

    #[test]
    fn test_client_holds_config() {
        let client = test_client();
        assert_eq!(client.uri(), "https://api.example.com");
        assert_eq!(client.system(), "test");
    }

    #[test]
    fn test_client_is_cloneable() {
        let client = test_client();
        let clone = client.clone();
        assert_eq!(clone.system(), client.system());
    }
}
