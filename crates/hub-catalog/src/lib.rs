//! Catalog domain types and display math for the ProductHub storefront.
//!
//! This crate models the payloads served by the upstream catalog API and the
//! small amount of presentation logic the storefront performs on them:
//!
//! - **Entities**: [`Product`], [`Review`], [`ProductResponse`]
//! - **Validation**: [`Validate`] and [`parse_json`], failing with [`SchemaError`]
//! - **Display math**: discounted prices, [`StarRating`], [`StockLevel`],
//!   [`ReviewSentiment`], [`Pagination`]
//!
//! # Example
//!
//! ```rust
//! use hub_catalog::{discounted_price, format_price, Pagination, StarRating};
//!
//! assert_eq!(format_price(discounted_price(100.0, 25.0)), "$75.00");
//! assert_eq!(StarRating::from_rating(3.6).filled(), 4);
//!
//! let window = Pagination::new(3, 12, 25);
//! assert_eq!(window.range_label(), "25 - 25 of 25 products");
//! ```

pub mod error;
pub mod ids;
pub mod pagination;
pub mod pricing;
pub mod product;
pub mod rating;
pub mod review;
pub mod schema;
pub mod stock;

pub use error::SchemaError;
pub use ids::ProductId;
pub use pagination::Pagination;
pub use pricing::{discounted_price, format_price, format_savings};
pub use product::{AvailabilityStatus, Dimensions, Product, ProductMeta, ProductResponse};
pub use rating::StarRating;
pub use review::{Review, ReviewSentiment};
pub use schema::{parse_json, Validate};
pub use stock::StockLevel;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::SchemaError;
    pub use crate::ids::ProductId;
    pub use crate::pagination::Pagination;
    pub use crate::product::{AvailabilityStatus, Product, ProductResponse};
    pub use crate::rating::StarRating;
    pub use crate::review::{Review, ReviewSentiment};
    pub use crate::schema::{parse_json, Validate};
    pub use crate::stock::StockLevel;
}
