//! Ledger domain: merchant balance accounts.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerAccount {
    pub id: String,
    pub balance: Decimal,
    pub status: String,
    pub currency: Currency,
}

/// One page of ledger accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedLedgerAccounts {
    pub current_page: u32,
    pub per_page: u32,
    pub total_accounts: u64,
    pub total_pages: u32,
    pub accounts: Vec<LedgerAccount>,
}
