pub mod errors;

pub use errors::FetchError;

use crate::config::ApiConfig;
use crate::domain::order::is_truthy;
use crate::domain::Order;
use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::future::Future;
use url::Url;

/// Where the board gets its orders from.
///
/// `Ok(None)` is a falsy body (`null`, `false`, `0`, `""`); the board treats
/// it like an empty list.
pub trait OrderSource {
    fn fetch_orders(&self) -> impl Future<Output = Result<Option<Vec<Order>>, FetchError>> + Send;
}

#[derive(Clone)]
pub struct OrdersClient {
    client: Client,
    orders_url: Url,
}

// ==================================================
// CONSTRUCTOR
// ==================================================
impl OrdersClient {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let base = Url::parse(&api.base_url)
            .with_context(|| format!("Invalid api.base_url: {}", api.base_url))?;
        let orders_url = base
            .join(&api.orders_path)
            .with_context(|| format!("Invalid api.orders_path: {}", api.orders_path))?;

        let mut builder = Client::builder();
        if let Some(timeout) = api.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, orders_url })
    }

    pub fn orders_url(&self) -> &Url {
        &self.orders_url
    }
}

// ==================================================
// GET ORDERS
// ==================================================
impl OrderSource for OrdersClient {
    async fn fetch_orders(&self) -> Result<Option<Vec<Order>>, FetchError> {
        let response = self
            .client
            .get(self.orders_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;

        decode_orders(&body)
    }
}

/// Falsy top-level bodies mean "no orders". Anything else truthy must be an array.
pub fn decode_orders(body: &[u8]) -> Result<Option<Vec<Order>>, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !is_truthy(&value) {
        return Ok(None);
    }

    Ok(Some(serde_json::from_value(value)?))
}
