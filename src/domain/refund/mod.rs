//! Refund domain: order refunds and refund listings.
//!
//! A full [`Refund`] and a listing row ([`RefundSummary`]) are different
//! shapes on the wire and are kept apart.

#[cfg(feature = "http")]
pub mod client;
pub mod request;

use crate::shared::{Currency, Platform};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use request::CreateRefund;

/// Order a refund belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefundOrder {
    pub id: i64,
}

/// Currency a refund is paid out in, with its platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefundCurrency {
    pub id: i64,
    pub title: String,
    pub symbol: String,
    pub platform: Platform,
}

/// Ledger account a refund is debited from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefundLedgerAccount {
    pub id: String,
    pub currency: Currency,
}

/// A single refund.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Refund {
    pub id: i64,
    pub request_amount: Decimal,
    pub refund_amount: Decimal,
    pub address: String,
    pub status: String,
    #[serde(default)]
    pub memo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub order: RefundOrder,
    pub refund_currency: RefundCurrency,
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
    pub ledger_account: RefundLedgerAccount,
}

/// A refund row inside a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefundSummary {
    pub id: i64,
    pub request_amount: Decimal,
    pub refund_amount: Decimal,
    pub crypto_address: String,
    #[serde(default)]
    pub crypto_address_memo: Option<String>,
    pub status: String,
    pub order: RefundOrder,
    pub refund_currency: RefundCurrency,
}

/// One page of refunds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedRefunds {
    pub current_page: u32,
    pub per_page: u32,
    pub total_refunds: u64,
    pub total_pages: u32,
    pub refunds: Vec<RefundSummary>,
}
