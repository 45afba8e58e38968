//! Catalog API client for the ProductHub storefront.
//!
//! Two calls against the upstream catalog, each decoded and validated into
//! the `hub-catalog` entities at this boundary:
//!
//! - `GET {API_URL}?limit={n}&skip={m}` → [`ProductResponse`](hub_catalog::ProductResponse)
//! - `GET {API_URL}/{id}` → [`Product`](hub_catalog::Product)
//!
//! Failures are classified as [`FetchError::Network`], [`FetchError::Http`]
//! or [`FetchError::Schema`]. Nothing is retried; callers decide.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use hub_data::{CatalogApi, CatalogClient, DEFAULT_API_URL};
//!
//! let client = CatalogClient::new(DEFAULT_API_URL, Duration::from_secs(10))?;
//! let page = client.fetch_products(12, 0).await?;
//! let product = client.fetch_product_by_id(page.products[0].id).await?;
//! ```

mod client;
mod error;
mod response;
mod transport;

pub use client::{CatalogApi, CatalogClient, DEFAULT_API_URL};
pub use error::FetchError;
pub use response::Response;
pub use transport::{HttpTransport, Transport};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogApi, CatalogClient, FetchError, Response, Transport};
}
