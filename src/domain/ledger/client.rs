//! Ledger sub-client.

use crate::client::CoinGateClient;
use crate::domain::ledger::{LedgerAccount, PaginatedLedgerAccounts};
use crate::error::ApiResult;
use crate::http::Endpoint;
use crate::shared::PageParams;

pub struct Ledger<'a> {
    pub(crate) client: &'a CoinGateClient,
}

impl<'a> Ledger<'a> {
    pub async fn get(&self, id: &str) -> ApiResult<LedgerAccount> {
        let path = format!("v2/ledger/accounts/{}", urlencoding::encode(id));
        self.client.request_json(Endpoint::get(path)).await
    }

    /// One page of ledger accounts (API default and max `per_page` is 100).
    pub async fn list(&self, page: PageParams) -> ApiResult<PaginatedLedgerAccounts> {
        let endpoint = Endpoint::get("v2/ledger/accounts").with_query(page.to_params());
        self.client.request_json(endpoint).await
    }
}
