//! Withdrawals sub-client.

use crate::client::CoinGateClient;
use crate::domain::withdrawal::{PaginatedWithdrawals, Withdrawal};
use crate::error::ApiResult;
use crate::http::Endpoint;
use crate::shared::PageParams;

pub struct Withdrawals<'a> {
    pub(crate) client: &'a CoinGateClient,
}

impl<'a> Withdrawals<'a> {
    pub async fn get(&self, id: i64) -> ApiResult<Withdrawal> {
        self.client
            .request_json(Endpoint::get(format!("v2/withdrawals/{}", id)))
            .await
    }

    pub async fn list(&self, page: PageParams) -> ApiResult<PaginatedWithdrawals> {
        let endpoint = Endpoint::get("v2/withdrawals").with_query(page.to_params());
        self.client.request_json(endpoint).await
    }
}
