//! Order request parameters.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::http::Params;
use crate::shared::format_date;

/// Body of `POST v2/orders`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrder {
    pub price_amount: Decimal,
    /// ISO 4217 code the price is set in.
    pub price_currency: String,
    /// Settlement currency, or `DO_NOT_CONVERT`.
    pub receive_currency: String,
    /// Merchant's own order reference.
    pub order_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub callback_url: Option<String>,
    pub cancel_url: Option<String>,
    pub success_url: Option<String>,
    /// Token echoed back in payment callbacks.
    pub token: Option<String>,
    pub purchaser_email: Option<String>,
}

impl CreateOrder {
    pub fn new(
        price_amount: Decimal,
        price_currency: impl Into<String>,
        receive_currency: impl Into<String>,
    ) -> Self {
        Self {
            price_amount,
            price_currency: price_currency.into(),
            receive_currency: receive_currency.into(),
            order_id: None,
            title: None,
            description: None,
            callback_url: None,
            cancel_url: None,
            success_url: None,
            token: None,
            purchaser_email: None,
        }
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = Some(url.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_purchaser_email(mut self, email: impl Into<String>) -> Self {
        self.purchaser_email = Some(email.into());
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .push("order_id", self.order_id.as_deref())
            .set("price_amount", self.price_amount)
            .set("price_currency", &self.price_currency)
            .set("receive_currency", &self.receive_currency)
            .push("title", self.title.as_deref())
            .push("description", self.description.as_deref())
            .push("callback_url", self.callback_url.as_deref())
            .push("cancel_url", self.cancel_url.as_deref())
            .push("success_url", self.success_url.as_deref())
            .push("token", self.token.as_deref())
            .push("purchaser_email", self.purchaser_email.as_deref())
    }
}

/// Body of `POST v2/orders/{id}/checkout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub pay_currency: String,
    /// Only available for BTC and LTC.
    pub lightning_network: Option<bool>,
    pub purchaser_email: Option<String>,
    /// Blockchain to receive on; the currency's native chain when unset.
    pub platform_id: Option<i64>,
}

impl CheckoutRequest {
    pub fn new(pay_currency: impl Into<String>) -> Self {
        Self {
            pay_currency: pay_currency.into(),
            lightning_network: None,
            purchaser_email: None,
            platform_id: None,
        }
    }

    pub fn with_lightning_network(mut self, enabled: bool) -> Self {
        self.lightning_network = Some(enabled);
        self
    }

    pub fn with_purchaser_email(mut self, email: impl Into<String>) -> Self {
        self.purchaser_email = Some(email.into());
        self
    }

    pub fn with_platform_id(mut self, platform_id: i64) -> Self {
        self.platform_id = Some(platform_id);
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .set("pay_currency", &self.pay_currency)
            .push("lightning_network", self.lightning_network)
            .push("purchaser_email", self.purchaser_email.as_deref())
            .push("platform_id", self.platform_id)
    }
}

/// Sort order for order listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSort {
    CreatedAtAsc,
    CreatedAtDesc,
}

impl OrderSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSort::CreatedAtAsc => "created_at_asc",
            OrderSort::CreatedAtDesc => "created_at_desc",
        }
    }
}

impl std::fmt::Display for OrderSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query of `GET v2/orders`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListParams {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub sort: Option<OrderSort>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
}

impl OrderListParams {
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

    pub fn with_sort(mut self, sort: OrderSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_created_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.created_from = from;
        self.created_to = to;
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .push("per_page", self.per_page)
            .push("page", self.page)
            .push("sort", self.sort)
            .push("created_at[from]", self.created_from.map(format_date))
            .push("created_at[to]", self.created_to.map(format_date))
    }
}
