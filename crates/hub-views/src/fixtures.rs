//! Shared test data and an in-memory catalog.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use hub_catalog::{
    AvailabilityStatus, Dimensions, Product, ProductId, ProductMeta, ProductResponse, Review,
};
use hub_data::{CatalogApi, FetchError};

pub fn product(id: u32) -> Product {
    Product {
        id: ProductId::new(id).unwrap(),
        title: format!("Product {}", id),
        description: "The Essence Mascara Lash Princess is a popular mascara.".to_string(),
        category: "beauty".to_string(),
        price: 100.0,
        discount_percentage: 25.0,
        rating: 3.6,
        stock: 5,
        tags: vec!["beauty".to_string(), "mascara".to_string(), "lashes".to_string()],
        brand: Some("Essence".to_string()),
        sku: format!("SKU-{}", id),
        weight: 2.0,
        dimensions: Dimensions {
            width: 23.17,
            height: 14.43,
            depth: 28.01,
        },
        warranty_information: "1 month warranty".to_string(),
        shipping_information: "Ships in 1 month".to_string(),
        availability_status: AvailabilityStatus::LowStock,
        reviews: vec![Review {
            reviewer_name: "John Doe".to_string(),
            reviewer_email: Some("john.doe@x.dummyjson.com".to_string()),
            rating: 2,
            comment: "Very unhappy with my purchase!".to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 23, 8, 56, 21).unwrap(),
        }],
        return_policy: "30 days return policy".to_string(),
        minimum_order_quantity: 24,
        meta: ProductMeta {
            barcode: "9164035109868".to_string(),
            qr_code: None,
            created_at: None,
            updated_at: None,
        },
        images: (1..=6)
            .map(|n| format!("https://cdn.dummyjson.com/p/{}/{}.png", id, n))
            .collect(),
        thumbnail: format!("https://cdn.dummyjson.com/p/{}/thumbnail.png", id),
    }
}

/// One page window over a catalog of `total` products.
pub fn page(total: u32, limit: u32, skip: u32) -> ProductResponse {
    let end = total.min(skip.saturating_add(limit));
    ProductResponse {
        products: (skip + 1..=end).map(product).collect(),
        total,
        skip,
        limit,
    }
}

/// Catalog of `total` generated products, optionally offline.
pub struct InMemoryCatalog {
    total: u32,
    offline: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl InMemoryCatalog {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            offline: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), FetchError> {
        self.calls.lock().unwrap().push(call);
        if self.offline.load(Ordering::SeqCst) {
            return Err(FetchError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for InMemoryCatalog {
    async fn fetch_products(&self, limit: u32, skip: u32) -> Result<ProductResponse, FetchError> {
        self.record(format!("products?limit={}&skip={}", limit, skip))?;
        Ok(page(self.total, limit, skip))
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> Result<Product, FetchError> {
        self.record(format!("products/{}", id))?;
        if id.get() > self.total {
            return Err(FetchError::Http {
                status: 404,
                url: format!("https://dummyjson.com/products/{}", id),
            });
        }
        Ok(product(id.get()))
    }
}
