//! Public endpoint parameters.

use crate::http::Params;

/// Side of a trader rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyKind {
    Crypto,
    Fiat,
}

impl CurrencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyKind::Crypto => "crypto",
            CurrencyKind::Fiat => "fiat",
        }
    }
}

impl std::fmt::Display for CurrencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters of `GET v2/currencies`. Unset filters are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyListParams {
    pub native: Option<bool>,
    pub enabled: Option<bool>,
    pub merchant_pay: Option<bool>,
    pub merchant_receive: Option<bool>,
    pub kind: Option<CurrencyKind>,
}

impl CurrencyListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_native(mut self, native: bool) -> Self {
        self.native = Some(native);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_merchant_pay(mut self, merchant_pay: bool) -> Self {
        self.merchant_pay = Some(merchant_pay);
        self
    }

    pub fn with_merchant_receive(mut self, merchant_receive: bool) -> Self {
        self.merchant_receive = Some(merchant_receive);
        self
    }

    pub fn with_kind(mut self, kind: CurrencyKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .push("native", self.native)
            .push("enabled", self.enabled)
            .push("merchant_pay", self.merchant_pay)
            .push("merchant_receive", self.merchant_receive)
            .push("kind", self.kind)
    }
}
