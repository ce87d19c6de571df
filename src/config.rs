//! Client configuration shared by every request.

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Product and API version prefix of the user agent.
pub const USER_AGENT_PRODUCT: &str = "CoinGate/v2";

/// Identity of the application embedding the SDK, appended to the user agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl AppInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Mutable client configuration.
///
/// Requests read a snapshot of this at dispatch time.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub sandbox: bool,
    /// `None` disables the per-request deadline.
    pub timeout: Option<Duration>,
    pub app_info: Option<AppInfo>,
    /// Replaces both fixed hosts when set (local mock servers).
    pub base_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            sandbox: false,
            timeout: Some(DEFAULT_TIMEOUT),
            app_info: None,
            base_url: None,
        }
    }
}

impl ClientConfig {
    /// Base URL requests are joined onto.
    pub fn api_base(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| crate::network::base_url(self.sandbox))
    }

    /// Value of the `User-Agent` header.
    pub fn user_agent(&self) -> String {
        let library = format!("Rust Library v{}", env!("CARGO_PKG_VERSION"));
        match &self.app_info {
            Some(app) => format!(
                "{} ({}, {} v{})",
                USER_AGENT_PRODUCT, library, app.name, app.version
            ),
            None => format!("{} ({})", USER_AGENT_PRODUCT, library),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("sandbox", &self.sandbox)
            .field("timeout", &self.timeout)
            .field("app_info", &self.app_info)
            .field("base_url", &self.base_url)
            .finish()
    }
}
