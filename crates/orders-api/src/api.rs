//! Typed client for the order endpoints.

use {
    model::{Order, OrderCreation, OrderStatus, StatusUpdate},
    reqwest::{Client, StatusCode},
    serde::de::DeserializeOwned,
    url::Url,
};

pub const ORDERS_ENDPOINT: &str = "/api/v1/orders";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP status {code}")]
    Status { code: StatusCode, body: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct OrdersApi {
    client: Client,
    base: Url,
}

impl OrdersApi {
    /// Creates a new client. `base` is the API origin; the endpoint paths
    /// are appended to it.
    pub fn new(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    pub async fn list(&self) -> Result<Vec<Order>, Error> {
        decode(self.client.get(self.url(ORDERS_ENDPOINT)).send().await?).await
    }

    pub async fn get(&self, id: i64) -> Result<Order, Error> {
        decode(
            self.client
                .get(self.url(&format!("{ORDERS_ENDPOINT}/{id}")))
                .send()
                .await?,
        )
        .await
    }

    pub async fn create(&self, draft: &OrderCreation) -> Result<Order, Error> {
        tracing::debug!(?draft, "creating order");
        decode(
            self.client
                .post(self.url(ORDERS_ENDPOINT))
                .json(draft)
                .send()
                .await?,
        )
        .await
    }

    pub async fn update(&self, order: &Order) -> Result<Order, Error> {
        tracing::debug!(id = order.id, "updating order");
        decode(
            self.client
                .put(self.url(&format!("{ORDERS_ENDPOINT}/{id}", id = order.id)))
                .json(order)
                .send()
                .await?,
        )
        .await
    }

    /// Submits a partial update containing only the new status. The
    /// acknowledgement body is discarded.
    pub async fn patch_status(&self, id: i64, status: OrderStatus) -> Result<(), Error> {
        tracing::debug!(id, %status, "patching order status");
        ack(self
            .client
            .patch(self.url(&format!("{ORDERS_ENDPOINT}/{id}/status")))
            .json(&StatusUpdate { status })
            .send()
            .await?)
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        tracing::debug!(id, "deleting order");
        ack(self
            .client
            .delete(self.url(&format!("{ORDERS_ENDPOINT}/{id}")))
            .send()
            .await?)
        .await
    }

    fn url(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url
    }
}

// The body text is captured before a status error is raised so it can be
// logged by the caller.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::Status { code: status, body });
    }
    Ok(serde_json::from_str(&body)?)
}

async fn ack(response: reqwest::Response) -> Result<(), Error> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        return Err(Error::Status { code: status, body });
    }
    Ok(())
}
