//! Product card renderer.

use hub_catalog::Product;

use super::escape_html;

/// Tags shown on a card.
const CARD_TAG_LIMIT: usize = 2;

/// Render one product card for the list grid.
pub fn render_product_card(product: &Product) -> String {
    let media = match product.thumbnail_url() {
        Some(url) => format!(
            r#"<img class="product-card-image" src="{}" alt="{}" loading="lazy">"#,
            escape_html(url),
            escape_html(&product.title)
        ),
        None => r#"<div class="product-card-placeholder"><span>No image</span></div>"#.to_string(),
    };

    let low_stock = if product.is_low_stock() {
        r#"<span class="badge badge-low-stock">Low Stock</span>"#
    } else {
        ""
    };

    let tags: Vec<String> = product
        .tags
        .iter()
        .take(CARD_TAG_LIMIT)
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
        .collect();
    let separator = if tags.is_empty() {
        ""
    } else {
        r#"<span class="separator">•</span>"#
    };

    let original = product
        .original_price_label()
        .map(|label| format!(r#"<span class="price-original">{}</span>"#, label))
        .unwrap_or_default();

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-card-media">
        {media}
        {low_stock}
    </div>
    <div class="product-card-body">
        <div class="product-card-header">
            <h3 class="product-card-title">{title}</h3>
            <span class="product-card-rating">{rating} <span class="star star-filled">★</span></span>
        </div>
        <p class="product-card-description">{description}</p>
        <div class="product-card-meta">
            <span class="brand">{brand}</span>{separator}{tags}
        </div>
        <div class="product-card-footer">
            <span class="price-current">{price}</span>{original}
            <a class="btn-view-details" href="{href}">View Details</a>
        </div>
    </div>
</article>"#,
        id = product.id,
        media = media,
        low_stock = low_stock,
        title = escape_html(&product.title),
        rating = product.rating_label(),
        description = escape_html(&product.description),
        brand = escape_html(product.brand_label()),
        separator = separator,
        tags = tags.join(""),
        price = product.price_label(),
        original = original,
        href = product.href()
    )
}
