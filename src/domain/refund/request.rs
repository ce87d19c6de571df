//! Refund request parameters.

use rust_decimal::Decimal;

use crate::http::Params;

/// Body of `POST v2/orders/{id}/refunds`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRefund {
    /// Amount in the order's price currency.
    pub amount: Decimal,
    pub address: String,
    pub address_memo: Option<String>,
    pub currency_id: i64,
    pub platform_id: i64,
    pub reason: String,
    /// Receives refund status updates.
    pub email: String,
    pub ledger_account_id: String,
}

impl CreateRefund {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        amount: Decimal,
        address: impl Into<String>,
        currency_id: i64,
        platform_id: i64,
        reason: impl Into<String>,
        email: impl Into<String>,
        ledger_account_id: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            address: address.into(),
            address_memo: None,
            currency_id,
            platform_id,
            reason: reason.into(),
            email: email.into(),
            ledger_account_id: ledger_account_id.into(),
        }
    }

    pub fn with_address_memo(mut self, memo: impl Into<String>) -> Self {
        self.address_memo = Some(memo.into());
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .set("amount", self.amount)
            .set("address", &self.address)
            .push("address_memo", self.address_memo.as_deref())
            .set("currency_id", self.currency_id)
            .set("platform_id", self.platform_id)
            .set("reason", &self.reason)
            .set("email", &self.email)
            .set("ledger_account_id", &self.ledger_account_id)
    }
}
