//! Public sub-client: rates, ping, server IPs, currencies and platforms.

use rust_decimal::Decimal;

use crate::client::CoinGateClient;
use crate::domain::public::{
    CurrencyListParams, ExchangeRates, Ping, PublicCurrency, PublicPlatform, RateTable,
    TradeSide, TraderRates,
};
use crate::error::{ApiError, ApiResult};
use crate::http::{Endpoint, Params};
use crate::shared::serde_util::parse_decimal_text;

pub struct Public<'a> {
    pub(crate) client: &'a CoinGateClient,
}

impl<'a> Public<'a> {
    // ── Single pair (plain-text body) ────────────────────────────────────

    /// Current merchant rate for a pair; `None` when the API has no quote.
    pub async fn merchant_rate(&self, from: &str, to: &str) -> ApiResult<Option<Decimal>> {
        self.pair_rate("merchant", from, to).await
    }

    /// Current trader rate for a pair; `None` when the API has no quote.
    pub async fn trader_rate(
        &self,
        side: TradeSide,
        from: &str,
        to: &str,
    ) -> ApiResult<Option<Decimal>> {
        self.pair_rate(&format!("trader/{}", side), from, to).await
    }

    async fn pair_rate(&self, table: &str, from: &str, to: &str) -> ApiResult<Option<Decimal>> {
        let path = format!(
            "v2/rates/{}/{}/{}",
            table,
            urlencoding::encode(from),
            urlencoding::encode(to)
        );
        let text = self.client.request_text(Endpoint::get(path)).await?;
        parse_decimal_text(&text).map_err(ApiError::Deserialize)
    }

    // ── Rate tables ──────────────────────────────────────────────────────

    /// Merchant and trader rate tables.
    pub async fn rates(&self) -> ApiResult<ExchangeRates> {
        self.client.request_json(Endpoint::get("v2/rates")).await
    }

    pub async fn merchant_rates(&self) -> ApiResult<RateTable> {
        self.client
            .request_json(Endpoint::get("v2/rates/merchant"))
            .await
    }

    /// Buy and sell trader tables.
    pub async fn trader_rates(&self) -> ApiResult<TraderRates> {
        self.client.request_json(Endpoint::get("v2/rates/trader")).await
    }

    /// One side of the trader tables.
    pub async fn trader_rates_for(&self, side: TradeSide) -> ApiResult<RateTable> {
        self.client
            .request_json(Endpoint::get(format!("v2/rates/trader/{}", side)))
            .await
    }

    // ── Misc ─────────────────────────────────────────────────────────────

    /// Health check.
    pub async fn ping(&self) -> ApiResult<Ping> {
        self.client.request_json(Endpoint::get("v2/ping")).await
    }

    /// IPv4 addresses of the API servers, joined by `separator`
    /// (newline when unset).
    pub async fn ip_addresses(&self, separator: Option<&str>) -> ApiResult<String> {
        let endpoint =
            Endpoint::get("v2/ips-v4").with_query(Params::new().push("separator", separator));
        self.client.request_text(endpoint).await
    }

    pub async fn currencies(&self, params: &CurrencyListParams) -> ApiResult<Vec<PublicCurrency>> {
        let endpoint = Endpoint::get("v2/currencies").with_query(params.to_params());
        self.client.request_json(endpoint).await
    }

    pub async fn platforms(&self, enabled: Option<bool>) -> ApiResult<Vec<PublicPlatform>> {
        let endpoint =
            Endpoint::get("v2/platforms").with_query(Params::new().push("enabled", enabled));
        self.client.request_json(endpoint).await
    }
}
