//! Orders sub-client: create, checkout, query.

use crate::client::CoinGateClient;
use crate::domain::order::{
    Checkout, CheckoutRequest, CreateOrder, NewOrder, Order, OrderListParams, PaginatedOrders,
};
use crate::error::ApiResult;
use crate::http::Endpoint;

pub struct Orders<'a> {
    pub(crate) client: &'a CoinGateClient,
}

impl<'a> Orders<'a> {
    /// Create an order and get the invoice `payment_url` for the shopper.
    pub async fn create(&self, request: &CreateOrder) -> ApiResult<NewOrder> {
        let endpoint = Endpoint::post("v2/orders").with_body(request.to_params());
        self.client.request_json(endpoint).await
    }

    /// Place a created order with a pre-selected pay currency.
    pub async fn checkout(&self, id: i64, request: &CheckoutRequest) -> ApiResult<Checkout> {
        let endpoint =
            Endpoint::post(format!("v2/orders/{}/checkout", id)).with_body(request.to_params());
        self.client.request_json(endpoint).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Order> {
        self.client
            .request_json(Endpoint::get(format!("v2/orders/{}", id)))
            .await
    }

    /// One page of orders, newest first unless `sort` says otherwise.
    pub async fn list(&self, params: &OrderListParams) -> ApiResult<PaginatedOrders> {
        let endpoint = Endpoint::get("v2/orders").with_query(params.to_params());
        self.client.request_json(endpoint).await
    }
}
