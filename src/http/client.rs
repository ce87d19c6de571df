//! Low-level transport: `CoinGateHttp`.
//!
//! Sends a [`ResolvedRequest`] over a pooled `reqwest` session and hands the
//! raw response to [`check_response`]. No retries: every failure goes straight
//! back to the caller.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use crate::error::{error_from_body, ApiError, ApiResult};
use crate::http::request::{Method, ResolvedRequest};

/// Connection/session holder shared by every request of one client.
#[derive(Debug, Clone)]
pub struct CoinGateHttp {
    client: Client,
}

impl CoinGateHttp {
    /// Create a transport with a fresh connection pool.
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Issue one HTTP call. Fails only on transport faults.
    pub async fn send(&self, request: ResolvedRequest) -> ApiResult<reqwest::Response> {
        let headers = header_map(&request.headers)?;

        tracing::debug!(method = %request.method, url = %request.url, "Dispatching request");

        let mut builder = self
            .client
            .request(reqwest_method(request.method), &request.url)
            .headers(headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.send().await?)
    }

    /// Send and classify.
    pub async fn execute(&self, request: ResolvedRequest) -> ApiResult<reqwest::Response> {
        let response = self.send(request).await?;
        check_response(response).await
    }
}

/// Pass 2xx responses through unchanged; turn anything else into an [`ApiError`].
pub async fn check_response(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let status_code = status.as_u16();
    // A fault while reading the body is a transport fault, not an API error.
    let body = response.text().await?;
    let error = error_from_body(status_code, &body);

    tracing::debug!(
        status = status_code,
        reason = error.reason().unwrap_or("-"),
        "Request failed"
    );

    Err(error)
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
    }
}

fn header_map(headers: &[(String, String)]) -> ApiResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
            ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
        })?;
        // The value may hold the API key; keep it out of the message.
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| ApiError::InvalidParameter(format!("Invalid header value for '{}'", name)))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map_rejects_control_characters() {
        let headers = vec![("Authorization".to_string(), "Token bad\nkey".to_string())];
        let err = header_map(&headers).unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter(_)));
        assert!(!err.to_string().contains("bad"));
    }

    #[test]
    fn test_header_map_builds() {
        let headers = vec![
            ("User-Agent".to_string(), "CoinGate/v2 (Rust Library v0.1.0)".to_string()),
            ("Authorization".to_string(), "Token K".to_string()),
        ];
        let map = header_map(&headers).unwrap();
        assert_eq!(map.get("authorization").unwrap(), "Token K");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(reqwest_method(Method::Get), reqwest::Method::GET);
        assert_eq!(reqwest_method(Method::Post), reqwest::Method::POST);
        assert_eq!(reqwest_method(Method::Patch), reqwest::Method::PATCH);
    }
}
