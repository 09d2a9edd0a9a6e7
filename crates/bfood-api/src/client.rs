//! # REST Client
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Client Request Flow                                  │
//! │                                                                         │
//! │  Session                  ApiClient                  Backend            │
//! │  ───────                  ─────────                  ───────            │
//! │                                                                         │
//! │  load() ─────────────────► list_categories() ──────► GET /categories   │
//! │         └────(joined)────► list_products() ────────► GET /products     │
//! │                                                                         │
//! │  select_category(id) ────► list_products_by_category(id)               │
//! │                                          └─────────► GET /categories/  │
//! │                                                          {id}/products  │
//! │                                                                         │
//! │  confirm_order() ────────► submit_order(order) ────► POST /orders      │
//! │                                                      ◄──── true         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call is a single in-flight request: no retry, no de-duplication.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use bfood_core::{Category, Order, Product};

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};

// =============================================================================
// MenuApi Trait
// =============================================================================

/// The backend operations the waiter session depends on.
///
/// Implemented by [`ApiClient`] over HTTP; tests implement it in memory.
#[async_trait]
pub trait MenuApi: Send + Sync {
    /// `GET /categories`
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;

    /// `GET /products`
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    /// `GET /categories/{id}/products`
    async fn list_products_by_category(&self, category_id: &str) -> ClientResult<Vec<Product>>;

    /// `POST /orders`. Returns the backend's success flag.
    async fn submit_order(&self, order: &Order) -> ClientResult<bool>;

    /// Public URL of a product image.
    fn image_url(&self, image_path: &str) -> Option<String>;
}

// =============================================================================
// ApiClient
// =============================================================================

/// reqwest-backed client for the ordering API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    config: ApiConfig,
}

impl ApiClient {
    /// Builds a client from validated settings.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let base_url = config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        info!(base_url = %base_url, "API client ready");

        Ok(ApiClient {
            http,
            base_url,
            config: config.clone(),
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and returns the body of a 2xx response.
    async fn send(&self, request: reqwest::RequestBuilder, path: &str) -> ClientResult<Vec<u8>> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(path, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(path = %path, status = status.as_u16(), "Backend returned an error status");
            return Err(ClientError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(path, e))?;
        Ok(body.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        debug!(path = %path, "GET");

        let body = self.send(self.http.get(url), &path).await?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { path, source })
    }
}

/// Interprets the body of a successful `POST /orders`.
///
/// A JSON boolean is the success flag. Any other body (the created order
/// document, or nothing at all) on a 2xx response counts as accepted.
fn order_accepted(body: &[u8]) -> bool {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::Bool(accepted)) => accepted,
        Ok(_) => true,
        Err(_) => {
            if !body.is_empty() {
                debug!(len = body.len(), "Non-JSON body on successful order submission");
            }
            true
        }
    }
}

#[async_trait]
impl MenuApi for ApiClient {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get_json(&["categories"]).await
    }

    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get_json(&["products"]).await
    }

    async fn list_products_by_category(&self, category_id: &str) -> ClientResult<Vec<Product>> {
        self.get_json(&["categories", category_id, "products"]).await
    }

    async fn submit_order(&self, order: &Order) -> ClientResult<bool> {
        let url = self.endpoint(&["orders"])?;
        let path = url.path().to_string();
        info!(
            table = %order.table,
            lines = order.products.len(),
            quantity = order.total_quantity(),
            "Submitting order"
        );

        let body = self.send(self.http.post(url).json(order), &path).await?;
        let accepted = order_accepted(&body);
        if !accepted {
            warn!(table = %order.table, "Backend rejected the order");
        }
        Ok(accepted)
    }

    fn image_url(&self, image_path: &str) -> Option<String> {
        if image_path.is_empty() {
            return None;
        }
        self.config.image_url(image_path).ok()
    }
}
