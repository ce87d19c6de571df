//! Refunds sub-client: create and query refunds.

use crate::client::CoinGateClient;
use crate::domain::refund::{CreateRefund, PaginatedRefunds, Refund};
use crate::error::ApiResult;
use crate::http::Endpoint;
use crate::shared::PageParams;

pub struct Refunds<'a> {
    pub(crate) client: &'a CoinGateClient,
}

impl<'a> Refunds<'a> {
    /// Request a refund for an order.
    pub async fn create(&self, order_id: i64, request: &CreateRefund) -> ApiResult<Refund> {
        let endpoint = Endpoint::post(format!("v2/orders/{}/refunds", order_id))
            .with_body(request.to_params());
        self.client.request_json(endpoint).await
    }

    pub async fn get(&self, order_id: i64, id: i64) -> ApiResult<Refund> {
        self.client
            .request_json(Endpoint::get(format!(
                "v2/orders/{}/refunds/{}",
                order_id, id
            )))
            .await
    }

    /// One page of refunds for a single order.
    pub async fn list_for_order(
        &self,
        order_id: i64,
        page: PageParams,
    ) -> ApiResult<PaginatedRefunds> {
        let endpoint = Endpoint::get(format!("v2/orders/{}/refunds", order_id))
            .with_query(page.to_params());
        self.client.request_json(endpoint).await
    }

    /// One page of refunds across all orders.
    pub async fn list(&self, page: PageParams) -> ApiResult<PaginatedRefunds> {
        let endpoint = Endpoint::get("v2/refunds").with_query(page.to_params());
        self.client.request_json(endpoint).await
    }
}
