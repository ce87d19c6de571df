//! Withdrawal domain: payouts from ledger accounts.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::{Currency, Platform};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payout destination a withdrawal was sent to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutSetting {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Withdrawal {
    pub id: i64,
    pub status: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    /// `None` while the withdrawal is still processing.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    pub currency: Currency,
    #[serde(default)]
    pub payout_setting: Option<PayoutSetting>,
    #[serde(default)]
    pub platform: Option<Platform>,
}

/// One page of withdrawals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedWithdrawals {
    pub current_page: u32,
    pub per_page: u32,
    pub total_withdrawals: u64,
    pub total_pages: u32,
    pub withdrawals: Vec<Withdrawal>,
}
