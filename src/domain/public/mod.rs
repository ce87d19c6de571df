//! Public reference data: exchange rates, ping, server IPs, currencies,
//! platforms. None of these endpoints need an API key.

#[cfg(feature = "http")]
pub mod client;
pub mod request;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use request::{CurrencyKind, CurrencyListParams, TradeSide};

// ─── Rates ───────────────────────────────────────────────────────────────────

/// Rates keyed by source currency, then target currency.
///
/// A `None` rate means the pair exists but has no current quote.
pub type RateTable = HashMap<String, HashMap<String, Option<Decimal>>>;

/// Buy and sell tables for traders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TraderRates {
    pub buy: RateTable,
    pub sell: RateTable,
}

/// Response of `GET v2/rates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExchangeRates {
    pub merchant: RateTable,
    pub trader: TraderRates,
}

/// Look up a single pair in a rate table.
pub fn lookup_rate(table: &RateTable, from: &str, to: &str) -> Option<Decimal> {
    table.get(from).and_then(|row| row.get(to)).copied().flatten()
}

// ─── Ping ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ping {
    pub ping: String,
    pub time: DateTime<Utc>,
}

// ─── Currencies ──────────────────────────────────────────────────────────────

/// Merchant capabilities of a currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyMerchant {
    pub price: bool,
    pub pay: bool,
    pub receive: bool,
}

/// Platform a currency is available on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyPlatform {
    pub id: i64,
    pub id_name: String,
    pub title: String,
    pub enabled: bool,
}

/// Entry of `GET v2/currencies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicCurrency {
    pub id: i64,
    pub title: String,
    pub kind: String,
    pub symbol: String,
    pub native: bool,
    pub disabled: bool,
    #[serde(default)]
    pub disabled_message: Option<String>,
    #[serde(default)]
    pub merchant: Option<CurrencyMerchant>,
    #[serde(default)]
    pub platforms: Option<Vec<CurrencyPlatform>>,
}

// ─── Platforms ───────────────────────────────────────────────────────────────

/// Currency available on a platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformCurrency {
    pub id: i64,
    pub title: String,
    pub symbol: String,
    pub enabled: bool,
}

/// Entry of `GET v2/platforms`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicPlatform {
    pub id: i64,
    pub title: String,
    pub id_name: String,
    pub disabled: bool,
    #[serde(default)]
    pub disabled_message: Option<String>,
    pub currencies: Vec<PlatformCurrency>,
}
