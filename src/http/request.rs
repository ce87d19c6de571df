//! Request descriptors as plain data.
//!
//! An [`Endpoint`] says what to call; [`ResolvedRequest::resolve`] turns it
//! into exactly what goes on the wire (URL, headers, encoded body, timeout)
//! for a given [`ClientConfig`]. Nothing here touches the network.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::network::join_url;

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_USER_AGENT: &str = "User-Agent";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }

    /// Whether requests with this method always carry a form content type.
    pub fn sends_form(self) -> bool {
        matches!(self, Method::Post | Method::Patch)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Params ──────────────────────────────────────────────────────────────────

/// Ordered body/query parameters.
///
/// Absent values are kept in the list but never encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, Option<String>)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter that may be absent.
    pub fn push<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.0.push((key.into(), value.map(|v| v.to_string())));
        self
    }

    /// Add a parameter that is always present.
    pub fn set(self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, Some(value))
    }

    /// Present key/value pairs, in insertion order.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
            .collect()
    }

    /// Owned copy of [`Params::pairs`].
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.pairs()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// `application/x-www-form-urlencoded` encoding of the present pairs.
    pub fn to_form(&self) -> ApiResult<String> {
        serde_urlencoded::to_string(self.pairs())
            .map_err(|e| ApiError::InvalidParameter(format!("Failed to encode form: {}", e)))
    }
}

// ─── Endpoint ────────────────────────────────────────────────────────────────

/// One API call: method, path and optional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub body: Option<Params>,
    pub query: Option<Params>,
}

impl Endpoint {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn with_body(mut self, body: Params) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query(mut self, query: Params) -> Self {
        self.query = Some(query);
        self
    }
}

// ─── ResolvedRequest ─────────────────────────────────────────────────────────

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl ResolvedRequest {
    /// Resolve an endpoint against a configuration snapshot.
    ///
    /// - `Authorization: Token <key>` only when a key is configured.
    /// - `User-Agent` always.
    /// - Form content type for POST/PATCH or whenever a body is given.
    pub fn resolve(config: &ClientConfig, endpoint: Endpoint) -> ApiResult<Self> {
        let mut headers = Vec::with_capacity(3);
        if let Some(key) = &config.api_key {
            headers.push((HEADER_AUTHORIZATION.to_string(), format!("Token {}", key)));
        }
        headers.push((HEADER_USER_AGENT.to_string(), config.user_agent()));
        if endpoint.method.sends_form() || endpoint.body.is_some() {
            headers.push((HEADER_CONTENT_TYPE.to_string(), FORM_URLENCODED.to_string()));
        }

        let body = endpoint.body.as_ref().map(Params::to_form).transpose()?;
        let query = endpoint
            .query
            .as_ref()
            .map(Params::to_pairs)
            .unwrap_or_default();

        Ok(Self {
            method: endpoint.method,
            url: join_url(config.api_base(), &endpoint.path),
            headers,
            query,
            body,
            timeout: config.timeout,
        })
    }

    /// First header value with this name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
