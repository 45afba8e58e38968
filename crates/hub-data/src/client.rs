//! Catalog API client.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hub_catalog::{Product, ProductId, ProductResponse, Validate};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::transport::{HttpTransport, Transport};
use crate::FetchError;

/// Base URL of the public catalog.
pub const DEFAULT_API_URL: &str = "https://dummyjson.com/products";

/// The two catalog reads the storefront performs.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page window of products.
    async fn fetch_products(&self, limit: u32, skip: u32) -> Result<ProductResponse, FetchError>;

    /// Fetch a single product. A missing product surfaces as `Http { status: 404 }`.
    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product, FetchError>;
}

#[async_trait]
impl<A: CatalogApi + ?Sized> CatalogApi for Arc<A> {
    async fn fetch_products(&self, limit: u32, skip: u32) -> Result<ProductResponse, FetchError> {
        (**self).fetch_products(limit, skip).await
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product, FetchError> {
        (**self).fetch_product_by_id(id).await
    }
}

/// Client for the upstream catalog endpoints.
pub struct CatalogClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl CatalogClient<HttpTransport> {
    /// Create a client over the production HTTP transport.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        Ok(Self::with_transport(base_url, HttpTransport::new(timeout)?))
    }
}

impl<T: Transport> CatalogClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a list window.
    pub fn products_url(&self, limit: u32, skip: u32) -> String {
        format!("{}?limit={}&skip={}", self.base_url, limit, skip)
    }

    /// URL of a single product.
    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn get_json<V: DeserializeOwned + Validate>(&self, url: &str) -> Result<V, FetchError> {
        let response = self.transport.get(url).await?;
        response.error_for_status(url)?.json()
    }

    async fn load_page(&self, url: &str, limit: u32) -> Result<ProductResponse, FetchError> {
        let page: ProductResponse = self.get_json(url).await?;
        page.check_window(limit)?;
        Ok(page)
    }
}

#[async_trait]
impl<T: Transport> CatalogApi for CatalogClient<T> {
    async fn fetch_products(&self, limit: u32, skip: u32) -> Result<ProductResponse, FetchError> {
        let url = self.products_url(limit, skip);
        debug!(url = %url, limit, skip, "fetching products");

        let result = self.load_page(&url, limit).await;
        match &result {
            Ok(page) => debug!(count = page.products.len(), total = page.total, "products loaded"),
            Err(e) => error!(error = %e, url = %url, "error fetching products"),
        }
        result
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product, FetchError> {
        let url = self.product_url(id);
        debug!(url = %url, product_id = id.get(), "fetching product");

        let result = self.get_json::<Product>(&url).await;
        if let Err(e) = &result {
            error!(error = %e, product_id = id.get(), "error fetching product");
        }
        result
    }
}
