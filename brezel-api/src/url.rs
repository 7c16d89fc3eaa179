//! URL assembly for API requests.
//!
//! [`api_link`] is a pure function: a structured path plus a parameter set
//! in, an absolute `Url` out. No state, no I/O. The client calls it for
//! every request that does not already carry a prebuilt URL.

use std::fmt::Write as _;

use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use brezel_core::error::{BrezelError, BrezelResult};

/// One path segment of an API request.
///
/// `Skip` segments are dropped entirely: they contribute no slash and no
/// placeholder. This is how optional path parts (e.g. the save id of a
/// restore call) collapse out of the URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal string segment.
    Str(String),
    /// Numeric segment (entity ids, comment ids).
    Num(i64),
    /// Absent segment; skipped during assembly.
    Skip,
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Str(s.to_string())
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Segment::Str(s)
    }
}

impl From<i64> for Segment {
    fn from(n: i64) -> Self {
        Segment::Num(n)
    }
}

impl From<Option<i64>> for Segment {
    fn from(n: Option<i64>) -> Self {
        n.map_or(Segment::Skip, Segment::Num)
    }
}

impl From<Option<&str>> for Segment {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Segment::Skip, Segment::from)
    }
}

impl From<Option<String>> for Segment {
    fn from(s: Option<String>) -> Self {
        s.map_or(Segment::Skip, Segment::Str)
    }
}

/// Order-stable query parameter set.
///
/// String values are appended to the query verbatim; every other value
/// (numbers, booleans, arrays, filter expressions) is JSON-serialized.
/// Absent optional values are never inserted, so they never appear in the
/// query string.
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(String, Value)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    /// Insert a parameter only when the value is present.
    pub fn insert_opt<V: Into<Value>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Build a parameter set from any serializable query struct.
    ///
    /// The struct must serialize to a JSON object; fields skipped by serde
    /// (absent options) are omitted from the result.
    pub fn from_query<T: Serialize>(query: &T) -> BrezelResult<Self> {
        let value = serde_json::to_value(query)?;
        match value {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            Value::Null => Ok(Self::new()),
            other => Err(BrezelError::Serialization(format!(
                "query must serialize to an object, got {other}"
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Assemble the absolute URL for an API request.
///
/// Layout: `{base_uri}[/{system}][/{segment}...][?{params}]`. A single
/// trailing slash is stripped after assembly: the API answers trailing
/// slashes with a redirect, which breaks credentialed cross-origin requests,
/// so they must never be emitted in the first place.
pub fn api_link(
    path: &[Segment],
    params: &Params,
    base_uri: &str,
    system: Option<&str>,
) -> BrezelResult<Url> {
    let mut assembled = String::from(base_uri);
    if let Some(system) = system {
        assembled.push('/');
        assembled.push_str(system);
    }
    for segment in path {
        match segment {
            Segment::Str(s) => {
                assembled.push('/');
                assembled.push_str(s);
            }
            Segment::Num(n) => {
                // write! to a String cannot fail
                let _ = write!(assembled, "/{n}");
            }
            Segment::Skip => {}
        }
    }
    if assembled.ends_with('/') {
        assembled.pop();
    }

    let mut url = Url::parse(&assembled)
        .map_err(|e| BrezelError::InvalidUrl(format!("{assembled}: {e}")))?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params.iter() {
            match value {
                Value::String(s) => pairs.append_pair(key, s),
                other => pairs.append_pair(key, &other.to_string()),
            };
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com";

    #[test]
    fn test_basic_path() {
        let url = api_link(&["modules".into()], &Params::new(), BASE, Some("test")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/test/modules");
    }

    #[test]
    fn test_skip_segments_are_dropped() {
        let path: [Segment; 3] = ["a".into(), Segment::Skip, "b".into()];
        let url = api_link(&path, &Params::new(), BASE, Some("test")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/test/a/b");
    }

    #[test]
    fn test_trailing_skip_collapses() {
        let path: [Segment; 4] = [
            "modules".into(),
            "m".into(),
            "resources".into(),
            Segment::from(None::<i64>),
        ];
        let url = api_link(&path, &Params::new(), BASE, Some("test")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/test/modules/m/resources");
    }

    #[test]
    fn test_no_system() {
        let url = api_link(&["modules".into()], &Params::new(), BASE, None).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/modules");
    }

    #[test]
    fn test_empty_path_strips_trailing_slash() {
        let url = api_link(&[], &Params::new(), "https://api.example.com/", None).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/");
        // Url normalizes a bare origin to a trailing slash; the assembled
        // string itself carried none. Nested paths show the stripping:
        let path: [Segment; 2] = ["a".into(), Segment::Skip];
        let url = api_link(&path, &Params::new(), BASE, Some("test")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/test/a");
    }

    #[test]
    fn test_numeric_segments() {
        let path: [Segment; 4] = ["modules".into(), "m".into(), "resources".into(), 42.into()];
        let url = api_link(&path, &Params::new(), BASE, Some("test")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/test/modules/m/resources/42"
        );
    }

    #[test]
    fn test_string_params_verbatim() {
        let mut params = Params::new();
        params.insert("view", "overview");
        let url = api_link(&["views".into()], &params, BASE, Some("test")).unwrap();
        assert_eq!(url.query(), Some("view=overview"));
    }

    #[test]
    fn test_non_string_params_json_encoded() {
        let mut params = Params::new();
        params.insert("layouts", false);
        params.insert("page", 3);
        let url = api_link(&["modules".into()], &params, BASE, Some("test")).unwrap();
        assert_eq!(url.query(), Some("layouts=false&page=3"));
    }

    #[test]
    fn test_array_param_json_encoded() {
        let mut params = Params::new();
        params.insert(
            "filters",
            serde_json::json!([{"column": "title", "operator": "=", "value": "Perfect"}]),
        );
        let url = api_link(
            &["modules".into(), "module1".into(), "resources".into()],
            &params,
            BASE,
            Some("test"),
        )
        .unwrap();
        let query = url.query().unwrap();
        assert!(query.starts_with("filters="));
        let encoded = query.trim_start_matches("filters=");
        let decoded: String = url
            .query_pairs()
            .find(|(k, _)| k == "filters")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(
            decoded,
            r#"[{"column":"title","operator":"=","value":"Perfect"}]"#
        );
        assert!(encoded.contains("%22"));
    }

    #[test]
    fn test_absent_params_omitted() {
        let mut params = Params::new();
        params.insert_opt("history", None::<bool>);
        params.insert_opt("page", Some(1));
        let url = api_link(&["notifications".into()], &params, BASE, Some("test")).unwrap();
        assert_eq!(url.query(), Some("page=1"));
    }

    #[test]
    fn test_order_stable() {
        let mut params = Params::new();
        params.insert("b", 1);
        params.insert("a", 2);
        let first = api_link(&["x".into()], &params, BASE, None).unwrap();
        let second = api_link(&["x".into()], &params, BASE, None).unwrap();
        assert_eq!(first.query(), second.query());
        assert_eq!(first.query(), Some("b=1&a=2"));
    }

    #[test]
    fn test_invalid_base_uri() {
        let err = api_link(&["modules".into()], &Params::new(), "not a url", None).unwrap_err();
        assert!(matches!(err, BrezelError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_query_skips_absent_fields() {
        #[derive(Serialize)]
        struct Query {
            page: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            user: Option<String>,
        }
        let params = Params::from_query(&Query { page: 1, user: None }).unwrap();
        let keys: Vec<_> = params.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["page"]);
    }
}
