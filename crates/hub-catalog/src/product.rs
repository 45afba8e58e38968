//! Product entities and the list envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::pricing::{discounted_price, format_price, format_savings};
use crate::review::Review;
use crate::schema::{check_range, Validate};
use crate::{SchemaError, StarRating, StockLevel};

/// Number of gallery images the detail page offers for selection.
pub const GALLERY_LIMIT: usize = 5;

/// Availability as reported by upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl AvailabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityStatus::InStock => "In Stock",
            AvailabilityStatus::LowStock => "Low Stock",
            AvailabilityStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// Physical dimensions in centimetres.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Catalog bookkeeping attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    pub barcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// List price in dollars.
    pub price: f64,
    /// Discount applied to the list price, 0 through 100.
    pub discount_percentage: f64,
    /// Average rating, 0 through 5.
    pub rating: f64,
    /// Units on hand.
    pub stock: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Brand; upstream omits it for unbranded goods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Stock keeping unit.
    pub sku: String,
    /// Weight in kilograms.
    pub weight: f64,
    pub dimensions: Dimensions,
    pub warranty_information: String,
    pub shipping_information: String,
    pub availability_status: AvailabilityStatus,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub return_policy: String,
    pub minimum_order_quantity: u32,
    pub meta: ProductMeta,
    #[serde(default)]
    pub images: Vec<String>,
    pub thumbnail: String,
}

impl Product {
    /// Price after the discount is applied.
    pub fn discounted_price(&self) -> f64 {
        discounted_price(self.price, self.discount_percentage)
    }

    /// Check if the product sells below list price.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }

    /// Formatted selling price.
    pub fn price_label(&self) -> String {
        format_price(self.discounted_price())
    }

    /// Formatted list price, only when discounted.
    pub fn original_price_label(&self) -> Option<String> {
        self.has_discount().then(|| format_price(self.price))
    }

    /// Savings badge text, only when discounted.
    pub fn savings_label(&self) -> Option<String> {
        self.has_discount()
            .then(|| format_savings(self.discount_percentage))
    }

    /// Average rating with one decimal.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.rating)
    }

    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }

    /// Stock level computed from the on-hand quantity.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_stock(self.stock)
    }

    /// Whether the card should carry the upstream low-stock badge.
    pub fn is_low_stock(&self) -> bool {
        self.availability_status == AvailabilityStatus::LowStock
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Thumbnail URL, if upstream supplied a non-empty one.
    pub fn thumbnail_url(&self) -> Option<&str> {
        Some(self.thumbnail.as_str()).filter(|url| !url.is_empty())
    }

    /// Images offered in the detail gallery.
    pub fn gallery(&self) -> &[String] {
        let end = self.images.len().min(GALLERY_LIMIT);
        &self.images[..end]
    }

    /// Brand for display; empty when upstream has none.
    pub fn brand_label(&self) -> &str {
        self.brand.as_deref().unwrap_or("")
    }

    /// Path of the product detail page.
    pub fn href(&self) -> String {
        format!("/product/{}", self.id)
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), SchemaError> {
        if ProductId::new(self.id.get()).is_none() {
            return Err(SchemaError::out_of_range("id", self.id));
        }
        check_range("price", self.price, 0.0, f64::MAX)?;
        check_range("discountPercentage", self.discount_percentage, 0.0, 100.0)?;
        check_range("rating", self.rating, 0.0, 5.0)?;
        check_range("weight", self.weight, 0.0, f64::MAX)?;

        for (index, review) in self.reviews.iter().enumerate() {
            review
                .validate()
                .map_err(|e| e.at(format!("reviews[{}]", index)))?;
        }

        Ok(())
    }
}

/// Paging envelope returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    pub products: Vec<Product>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

impl ProductResponse {
    /// Check the envelope fits a requested page window.
    ///
    /// A limit of zero asks upstream for everything and is not checked.
    pub fn check_window(&self, limit: u32) -> Result<(), SchemaError> {
        if limit > 0 && self.products.len() > limit as usize {
            return Err(SchemaError::TooManyProducts {
                count: self.products.len(),
                limit,
            });
        }
        Ok(())
    }
}

impl Validate for ProductResponse {
    fn validate(&self) -> Result<(), SchemaError> {
        self.check_window(self.limit)?;
        for (index, product) in self.products.iter().enumerate() {
            product
                .validate()
                .map_err(|e| e.at(format!("products[{}]", index)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// A product payload in the upstream wire shape.
    pub fn product_json(id: u32) -> String {
        format!(
            r#"{{
                "id": {id},
                "title": "Essence Mascara Lash Princess",
                "description": "A popular mascara known for its volumizing effects.",
                "category": "beauty",
                "price": 100,
                "discountPercentage": 25,
                "rating": 3.6,
                "stock": 5,
                "tags": ["beauty", "mascara", "lashes"],
                "brand": "Essence",
                "sku": "RCH45Q1A",
                "weight": 2,
                "dimensions": {{ "width": 23.17, "height": 14.43, "depth": 28.01 }},
                "warrantyInformation": "1 month warranty",
                "shippingInformation": "Ships in 1 month",
                "availabilityStatus": "Low Stock",
                "reviews": [
                    {{
                        "rating": 2,
                        "comment": "Very unhappy with my purchase!",
                        "date": "2024-05-23T08:56:21.618Z",
                        "reviewerName": "John Doe",
                        "reviewerEmail": "john.doe@x.dummyjson.com"
                    }}
                ],
                "returnPolicy": "30 days return policy",
                "minimumOrderQuantity": 24,
                "meta": {{
                    "createdAt": "2024-05-23T08:56:21.618Z",
                    "updatedAt": "2024-05-23T08:56:21.618Z",
                    "barcode": "9164035109868",
                    "qrCode": "https://assets.dummyjson.com/public/qr-code.png"
                }},
                "images": ["https://cdn.dummyjson.com/products/images/beauty/1.png"],
                "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/thumbnail.png"
            }}"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::product_json;
    use super::*;
    use crate::parse_json;

    #[test]
    fn test_decode_product() {
        let product: Product = parse_json(product_json(1).as_bytes()).unwrap();
        assert_eq!(product.id.get(), 1);
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.availability_status, AvailabilityStatus::LowStock);
        assert_eq!(product.meta.barcode, "9164035109868");
        assert_eq!(product.review_count(), 1);
    }

    #[test]
    fn test_price_labels() {
        let product: Product = parse_json(product_json(1).as_bytes()).unwrap();
        assert_eq!(product.price_label(), "$75.00");
        assert_eq!(product.original_price_label().as_deref(), Some("$100.00"));
        assert_eq!(product.savings_label().as_deref(), Some("Save 25%"));
        assert_eq!(product.rating_label(), "3.6");
        assert_eq!(product.stars().filled(), 4);
    }

    #[test]
    fn test_no_discount_hides_original_price() {
        let mut product: Product = parse_json(product_json(1).as_bytes()).unwrap();
        product.discount_percentage = 0.0;
        assert_eq!(product.price_label(), "$100.00");
        assert_eq!(product.original_price_label(), None);
        assert_eq!(product.savings_label(), None);
    }

    #[test]
    fn test_missing_brand_is_allowed() {
        let json = product_json(3).replace(r#""brand": "Essence","#, "");
        let product: Product = parse_json(json.as_bytes()).unwrap();
        assert_eq!(product.brand, None);
        assert_eq!(product.brand_label(), "");
    }

    #[test]
    fn test_unknown_availability_is_schema_error() {
        let json = product_json(1).replace("Low Stock", "Backordered");
        let err = parse_json::<Product>(json.as_bytes()).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed(_)));
    }

    #[test]
    fn test_missing_required_field_is_schema_error() {
        let json = product_json(1).replace(r#""sku": "RCH45Q1A","#, "");
        assert!(matches!(
            parse_json::<Product>(json.as_bytes()),
            Err(SchemaError::Malformed(_))
        ));
    }

    #[test]
    fn test_discount_out_of_range() {
        let json = product_json(1).replace(r#""discountPercentage": 25"#, r#""discountPercentage": 140"#);
        let err = parse_json::<Product>(json.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::OutOfRange {
                field: "discountPercentage".to_string(),
                value: "140".to_string(),
            }
        );
    }

    #[test]
    fn test_review_rating_path() {
        let json = product_json(1).replace(r#""rating": 2,"#, r#""rating": 9,"#);
        let err = parse_json::<Product>(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::OutOfRange { ref field, .. } if field == "reviews[0].rating"
        ));
    }

    #[test]
    fn test_gallery_caps_at_five() {
        let mut product: Product = parse_json(product_json(1).as_bytes()).unwrap();
        product.images = (0..8).map(|i| format!("https://img/{}.png", i)).collect();
        assert_eq!(product.gallery().len(), GALLERY_LIMIT);
        assert_eq!(product.gallery()[4], "https://img/4.png");
    }

    #[test]
    fn test_empty_thumbnail() {
        let mut product: Product = parse_json(product_json(1).as_bytes()).unwrap();
        product.thumbnail.clear();
        assert_eq!(product.thumbnail_url(), None);
    }

    #[test]
    fn test_response_envelope() {
        let json = format!(
            r#"{{ "products": [{}, {}], "total": 194, "skip": 0, "limit": 2 }}"#,
            product_json(1),
            product_json(2)
        );
        let page: ProductResponse = parse_json(json.as_bytes()).unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.total, 194);
        assert!(page.check_window(2).is_ok());
        assert_eq!(
            page.check_window(1),
            Err(SchemaError::TooManyProducts { count: 2, limit: 1 })
        );
        assert!(page.check_window(0).is_ok());
    }

    #[test]
    fn test_response_envelope_over_limit() {
        let json = format!(
            r#"{{ "products": [{}, {}], "total": 194, "skip": 0, "limit": 1 }}"#,
            product_json(1),
            product_json(2)
        );
        assert!(matches!(
            parse_json::<ProductResponse>(json.as_bytes()),
            Err(SchemaError::TooManyProducts { count: 2, limit: 1 })
        ));
    }

    #[test]
    fn test_invalid_product_in_envelope() {
        let bad = product_json(2).replace(r#""rating": 3.6"#, r#""rating": 6.2"#);
        let json = format!(
            r#"{{ "products": [{}, {}], "total": 2, "skip": 0, "limit": 2 }}"#,
            product_json(1),
            bad
        );
        let err = parse_json::<ProductResponse>(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::OutOfRange { ref field, .. } if field == "products[1].rating"
        ));
    }
}
