//! High-level client: `CoinGateClient` with nested sub-client accessors.
//!
//! Each resource family has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared configuration and the
//! `request` pipeline every sub-client routes through.

use crate::config::{AppInfo, ClientConfig};
use crate::domain::ledger::client::Ledger;
use crate::domain::order::client::Orders;
use crate::domain::public::client::Public;
use crate::domain::refund::client::Refunds;
use crate::domain::withdrawal::client::Withdrawals;
use crate::error::{ApiError, ApiResult};
use crate::http::{CoinGateHttp, Endpoint, ResolvedRequest};

use async_lock::RwLock;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::ledger::client::Ledger as LedgerClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::public::client::Public as PublicClient;
pub use crate::domain::refund::client::Refunds as RefundsClient;
pub use crate::domain::withdrawal::client::Withdrawals as WithdrawalsClient;

/// The primary entry point for the CoinGate SDK.
///
/// Provides nested sub-client accessors for each resource family:
/// `client.orders()`, `client.refunds()`, etc. Clones share configuration
/// and the connection pool.
#[derive(Debug, Clone)]
pub struct CoinGateClient {
    pub(crate) http: CoinGateHttp,
    /// Read at dispatch time by every request. Never held across an await.
    pub(crate) config: Arc<RwLock<ClientConfig>>,
}

impl CoinGateClient {
    pub fn builder() -> CoinGateClientBuilder {
        CoinGateClientBuilder::default()
    }

    /// Client with default timeout and no application info.
    pub fn new(api_key: Option<&str>, sandbox: bool) -> ApiResult<Self> {
        let mut builder = Self::builder().sandbox(sandbox);
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn refunds(&self) -> Refunds<'_> {
        Refunds { client: self }
    }

    pub fn ledger(&self) -> Ledger<'_> {
        Ledger { client: self }
    }

    pub fn withdrawals(&self) -> Withdrawals<'_> {
        Withdrawals { client: self }
    }

    pub fn public(&self) -> Public<'_> {
        Public { client: self }
    }

    // ── Configuration ────────────────────────────────────────────────────

    /// Snapshot of the current configuration.
    pub async fn config(&self) -> ClientConfig {
        self.config.read().await.clone()
    }

    pub async fn is_sandbox(&self) -> bool {
        self.config.read().await.sandbox
    }

    /// Set or clear the API key used by subsequent requests.
    pub async fn set_api_key(&self, api_key: Option<String>) {
        self.config.write().await.api_key = api_key;
    }

    /// Set the per-request timeout; `None` disables it.
    pub async fn set_timeout(&self, timeout: Option<Duration>) {
        self.config.write().await.timeout = timeout;
    }

    /// Identify the embedding application in the user agent.
    pub async fn set_app_info(&self, name: impl Into<String>, version: impl Into<String>) {
        self.config.write().await.app_info = Some(AppInfo::new(name, version));
    }

    // ── Request pipeline ─────────────────────────────────────────────────

    /// Resolve an endpoint against the configuration as it is right now.
    pub async fn resolve(&self, endpoint: Endpoint) -> ApiResult<ResolvedRequest> {
        let config = self.config.read().await.clone();
        ResolvedRequest::resolve(&config, endpoint)
    }

    /// Build, send and classify one request. The 2xx response is returned
    /// untouched.
    pub async fn request(&self, endpoint: Endpoint) -> ApiResult<reqwest::Response> {
        let resolved = self.resolve(endpoint).await?;
        self.http.execute(resolved).await
    }

    /// [`request`](Self::request) and decode the JSON body.
    pub async fn request_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<T> {
        let body = self.request(endpoint).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::Deserialize(format!("Failed to deserialize response: {}", e))
        })
    }

    /// [`request`](Self::request) and return the body as text.
    pub async fn request_text(&self, endpoint: Endpoint) -> ApiResult<String> {
        Ok(self.request(endpoint).await?.text().await?)
    }

    /// Release the connection pool. Other clones keep their own handle.
    pub fn close(self) {
        drop(self);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct CoinGateClientBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
}

impl CoinGateClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Use the sandbox host instead of production.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.config.sandbox = sandbox;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Send requests without a deadline.
    pub fn no_timeout(mut self) -> Self {
        self.config.timeout = None;
        self
    }

    pub fn app_info(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.config.app_info = Some(AppInfo::new(name, version));
        self
    }

    /// Send every request to `url` instead of the production/sandbox hosts.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Reuse an existing `reqwest` client (proxies, custom TLS, ...).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> ApiResult<CoinGateClient> {
        let http = match self.http_client {
            Some(client) => CoinGateHttp::with_client(client),
            None => CoinGateHttp::new()?,
        };
        Ok(CoinGateClient {
            http,
            config: Arc::new(RwLock::new(self.config)),
        })
    }
}
