//! Value types and helpers shared by several resource families.

pub mod serde_util;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format a filter date the way the API expects (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ─── Currency / Platform ─────────────────────────────────────────────────────

/// Currency reference embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    pub id: i64,
    pub title: String,
    pub symbol: String,
}

/// Blockchain platform reference embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Platform {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub id_name: Option<String>,
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// `page` / `per_page` query parameters for listing calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub(crate) fn to_params(self) -> crate::http::Params {
        crate::http::Params::new()
            .push("page", self.page)
            .push("per_page", self.per_page)
    }
}
