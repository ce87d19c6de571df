//! # CoinGate SDK
//!
//! An async Rust client for the CoinGate payment API: orders, checkouts,
//! refunds, ledger accounts, withdrawals and public exchange-rate data.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Response shapes, request descriptors, the error taxonomy and
//!    response classifier (always available, no I/O)
//! 2. **HTTP**: `CoinGateHttp` transport over a pooled `reqwest` session
//! 3. **High-Level Client**: `CoinGateClient` with shared configuration and
//!    nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coingate::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let client = CoinGateClient::builder()
//!     .api_key("YOUR_API_KEY")
//!     .sandbox(true)
//!     .build()?;
//!
//! let order = client
//!     .orders()
//!     .create(&CreateOrder::new(Decimal::from(10), "EUR", "EUR"))
//!     .await?;
//! println!("Pay at {}", order.base.payment_url);
//!
//! match client.orders().get(1).await {
//!     Err(ApiError::OrderNotFound(details)) => println!("{:?}", details.message),
//!     other => println!("{:?}", other),
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared value types and serde helpers.
pub mod shared;

/// Resource families: response shapes, request parameters, sub-clients.
pub mod domain;

/// Error taxonomy and response classifier.
pub mod error;

/// API hosts and URL composition.
pub mod network;

/// Client configuration.
pub mod config;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request descriptors and transport.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinGateClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Currency, PageParams, Platform};

    // Orders
    pub use crate::domain::order::{
        Checkout, CheckoutRequest, CreateOrder, NewOrder, Order, OrderBase, OrderListParams,
        OrderSort, OrderStatus, PaginatedOrders,
    };

    // Refunds
    pub use crate::domain::refund::{CreateRefund, PaginatedRefunds, Refund, RefundSummary};

    // Ledger, withdrawals
    pub use crate::domain::ledger::{LedgerAccount, PaginatedLedgerAccounts};
    pub use crate::domain::withdrawal::{PaginatedWithdrawals, PayoutSetting, Withdrawal};

    // Public data
    pub use crate::domain::public::{
        CurrencyKind, CurrencyListParams, ExchangeRates, Ping, PublicCurrency, PublicPlatform,
        RateTable, TradeSide, TraderRates,
    };

    // Errors
    pub use crate::error::{ApiError, ApiResult, ErrorDetails, ErrorReason};

    // Configuration + network
    pub use crate::config::{AppInfo, ClientConfig, DEFAULT_TIMEOUT};
    pub use crate::network::{build_url, API_URL, SANDBOX_API_URL};

    // Request pipeline
    pub use crate::http::{Endpoint, Method, Params, ResolvedRequest};

    // Client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CoinGateClient, CoinGateClientBuilder, LedgerClient, OrdersClient, PublicClient,
        RefundsClient, WithdrawalsClient,
    };
}
