//! Order domain: invoices, checkout, order listings.

#[cfg(feature = "http")]
pub mod client;
pub mod request;

use crate::shared::{serde_util, Platform};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use request::{CheckoutRequest, CreateOrder, OrderListParams, OrderSort};

// ─── OrderStatus ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Pending,
    Confirming,
    Paid,
    Invalid,
    Expired,
    Canceled,
    Refunded,
    PartiallyRefunded,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Whether the order can no longer change state by itself.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            OrderStatus::Paid
                | OrderStatus::Invalid
                | OrderStatus::Expired
                | OrderStatus::Canceled
                | OrderStatus::Refunded
        )
    }
}

// ─── Order shapes ────────────────────────────────────────────────────────────

/// Fields common to every order response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBase {
    pub id: i64,
    pub status: OrderStatus,
    pub do_not_convert: bool,
    pub price_currency: String,
    pub price_amount: Decimal,
    pub lightning_network: bool,
    pub receive_currency: String,
    /// `None` until the order is paid (sent as `""`).
    #[serde(default, deserialize_with = "serde_util::optional_decimal::deserialize")]
    pub receive_amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub order_id: String,
    pub payment_url: String,
    pub underpaid_amount: Decimal,
    pub overpaid_amount: Decimal,
    pub is_refundable: bool,
}

/// Response to order creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOrder {
    #[serde(flatten)]
    pub base: OrderBase,
    pub token: String,
}

/// Response to checkout with a pre-selected pay currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Checkout {
    #[serde(flatten)]
    pub base: OrderBase,
    pub pay_currency: String,
    pub pay_amount: Decimal,
    pub expire_at: DateTime<Utc>,
    pub payment_address: String,
    pub platform: Platform,
}

/// A single order as returned by `GET v2/orders/{id}` and listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(flatten)]
    pub base: OrderBase,
    pub orderable_type: String,
    pub orderable_id: i64,
    pub payment_address: String,
}

/// One page of orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedOrders {
    pub current_page: u32,
    pub per_page: u32,
    #[serde(alias = "total_order")]
    pub total_orders: u64,
    pub total_pages: u32,
    pub orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_unknown_value() {
        let status: OrderStatus = serde_json::from_str(r#""something_new""#).unwrap();
        assert_eq!(status, OrderStatus::Unknown);
        let status: OrderStatus = serde_json::from_str(r#""partially_refunded""#).unwrap();
        assert_eq!(status, OrderStatus::PartiallyRefunded);
    }

    #[test]
    fn test_status_is_final() {
        assert!(OrderStatus::Paid.is_final());
        assert!(OrderStatus::Expired.is_final());
        assert!(!OrderStatus::New.is_final());
        assert!(!OrderStatus::Confirming.is_final());
    }
}
