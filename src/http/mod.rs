//! HTTP layer: request descriptors and the `CoinGateHttp` transport.

pub mod request;

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub use client::{check_response, CoinGateHttp};
pub use request::{Endpoint, Method, Params, ResolvedRequest};
