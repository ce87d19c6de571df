//! API hosts and endpoint URL composition.

/// Production REST API base URL.
pub const API_URL: &str = "https://api.coingate.com";

/// Sandbox REST API base URL.
pub const SANDBOX_API_URL: &str = "https://api-sandbox.coingate.com";

/// Base URL for the selected environment.
pub fn base_url(sandbox: bool) -> &'static str {
    if sandbox {
        SANDBOX_API_URL
    } else {
        API_URL
    }
}

/// Absolute URL for an endpoint path on one of the two fixed hosts.
///
/// The path is lower-cased and joined with exactly one slash.
pub fn build_url(sandbox: bool, endpoint_path: &str) -> String {
    join_url(base_url(sandbox), endpoint_path)
}

/// Join `path` onto `base` with exactly one slash between them.
///
/// The path is lower-cased; nothing is escaped.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/').to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_selects_host() {
        assert_eq!(build_url(false, "v2/ping"), "https://api.coingate.com/v2/ping");
        assert_eq!(
            build_url(true, "v2/ping"),
            "https://api-sandbox.coingate.com/v2/ping"
        );
    }

    #[test]
    fn test_build_url_lowercases_path() {
        for sandbox in [true, false] {
            let url = build_url(sandbox, "V2/Orders/123/CHECKOUT");
            assert!(url.ends_with("/v2/orders/123/checkout"));
        }
    }

    #[test]
    fn test_join_single_slash() {
        let expected = "https://api.coingate.com/v2/orders";
        assert_eq!(join_url("https://api.coingate.com", "v2/orders"), expected);
        assert_eq!(join_url("https://api.coingate.com/", "v2/orders"), expected);
        assert_eq!(join_url("https://api.coingate.com/", "/v2/orders"), expected);
        assert_eq!(join_url("https://api.coingate.com//", "//v2/orders"), expected);
    }

    #[test]
    fn test_base_is_not_lowercased() {
        assert_eq!(
            join_url("http://127.0.0.1:1234/Mock", "V2/Ping"),
            "http://127.0.0.1:1234/Mock/v2/ping"
        );
    }

    #[test]
    fn test_build_url_is_pure() {
        assert_eq!(build_url(true, "v2/Rates"), build_url(true, "v2/Rates"));
        assert_eq!(build_url(false, "v2/Rates"), build_url(false, "v2/Rates"));
    }
}
