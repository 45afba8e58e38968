//! Product detail page.

use hub_catalog::{Product, Review};

use super::{disabled_attr, page_shell, render_spinner};
use crate::components::{escape_html, render_star_rating};
use crate::detail::{DetailScreen, DetailTab, ProductDetailView};

/// Render the whole detail page.
pub fn render_detail_page(view: &ProductDetailView, year: i32) -> String {
    let title = match view.product() {
        Some(product) => format!("{} | ProductHub", product.title),
        None => "Product | ProductHub".to_string(),
    };
    page_shell(&title, year).render(&render_product_detail(view))
}

/// Render the detail content for the view's current screen.
pub fn render_product_detail(view: &ProductDetailView) -> String {
    match view.screen() {
        DetailScreen::Spinner => format!(
            r#"<div class="product-detail-loading">{}</div>"#,
            render_spinner(true)
        ),
        DetailScreen::Failed { message, home_href } => format!(
            r#"<div class="error-panel">
    <p class="error-message">{message}</p>
    <div class="error-actions">
        <a class="btn-home" href="{home}">Return to Home</a>
        <button class="btn-retry" data-action="retry">Try Again</button>
    </div>
</div>"#,
            message = escape_html(message),
            home = home_href
        ),
        DetailScreen::Ready {
            product,
            selected_image,
            active_tab,
            quantity,
        } => render_ready(view, product, selected_image, active_tab, quantity),
    }
}

fn render_ready(
    view: &ProductDetailView,
    product: &Product,
    selected_image: Option<&str>,
    active_tab: DetailTab,
    quantity: u32,
) -> String {
    format!(
        r#"<nav class="breadcrumb"><a class="back-link" href="/">&larr; Back to products</a> <span>{category}</span> / <span>{title}</span></nav>
<article class="product-detail" data-product-id="{id}">
    {gallery}
    <div class="product-info">
        <p class="product-brand">{brand}</p>
        <h1 class="product-title">{title}</h1>
        <p class="product-sku">SKU: {sku}</p>
        <div class="product-rating">{stars} <span>{rating} ({reviews} reviews)</span></div>
        {price}
        <p class="{stock_class}">{stock_label}</p>
        {purchase}
        <ul class="product-policies">
            <li>Minimum order: {min_order}</li>
            <li>{shipping}</li>
            <li>{returns}</li>
            <li>{warranty}</li>
        </ul>
    </div>
</article>
{tabs}"#,
        category = escape_html(&product.category),
        title = escape_html(&product.title),
        id = product.id,
        gallery = render_gallery(product, selected_image),
        brand = escape_html(product.brand_label()),
        sku = escape_html(&product.sku),
        stars = render_star_rating(product.rating),
        rating = product.rating_label(),
        reviews = product.review_count(),
        price = render_price(product),
        stock_class = product.stock_level().css_class(),
        stock_label = product.stock_level().label(),
        purchase = render_purchase(quantity, view.max_quantity(), product.stock),
        min_order = product.minimum_order_quantity,
        shipping = escape_html(&product.shipping_information),
        returns = escape_html(&product.return_policy),
        warranty = escape_html(&product.warranty_information),
        tabs = render_tabs(product, active_tab)
    )
}

fn render_gallery(product: &Product, selected_image: Option<&str>) -> String {
    let main = match selected_image {
        Some(url) => format!(
            r#"<img class="gallery-main" src="{}" alt="{}">"#,
            escape_html(url),
            escape_html(&product.title)
        ),
        None => r#"<div class="gallery-main gallery-placeholder">No image</div>"#.to_string(),
    };

    let thumbnails: String = product
        .gallery()
        .iter()
        .enumerate()
        .map(|(index, url)| {
            let active = if selected_image == Some(url.as_str()) {
                " gallery-thumbnail--active"
            } else {
                ""
            };
            format!(
                r#"<button class="gallery-thumbnail{active}" data-action="select-image" data-index="{index}"><img src="{url}" alt="{title} image {number}"></button>"#,
                active = active,
                index = index,
                url = escape_html(url),
                title = escape_html(&product.title),
                number = index + 1
            )
        })
        .collect();

    format!(
        r#"<div class="gallery">
        {main}
        <div class="gallery-thumbnails">{thumbnails}</div>
    </div>"#,
        main = main,
        thumbnails = thumbnails
    )
}

fn render_price(product: &Product) -> String {
    let original = product
        .original_price_label()
        .map(|label| format!(r#"<span class="price-original">{}</span>"#, label))
        .unwrap_or_default();
    let savings = product
        .savings_label()
        .map(|label| format!(r#"<span class="price-savings">{}</span>"#, label))
        .unwrap_or_default();

    format!(
        r#"<div class="product-price">
            <span class="price-current">{}</span>{}{}
        </div>"#,
        product.price_label(),
        original,
        savings
    )
}

fn render_purchase(quantity: u32, max_quantity: u32, stock: u32) -> String {
    format!(
        r#"<div class="purchase">
            <div class="quantity-stepper">
                <button data-action="decrement-quantity" aria-label="Decrease quantity"{dec}>-</button>
                <input type="number" name="quantity" min="1" max="{max}" value="{quantity}" readonly>
                <button data-action="increment-quantity" aria-label="Increase quantity"{inc}>+</button>
            </div>
            <button class="btn-add-to-cart"{sold_out}>Add to Cart</button>
        </div>"#,
        dec = disabled_attr(quantity <= 1),
        max = max_quantity,
        quantity = quantity,
        inc = disabled_attr(quantity >= max_quantity),
        sold_out = disabled_attr(stock == 0)
    )
}

fn render_tabs(product: &Product, active_tab: DetailTab) -> String {
    let buttons: String = DetailTab::ALL
        .iter()
        .map(|tab| {
            let (class, selected) = if *tab == active_tab {
                ("tab tab--active", "true")
            } else {
                ("tab", "false")
            };
            format!(
                r#"<button class="{}" role="tab" aria-selected="{}" data-tab="{}">{}</button>"#,
                class,
                selected,
                tab.as_str(),
                tab.label(product)
            )
        })
        .collect();

    let panel = match active_tab {
        DetailTab::Description => render_description_panel(product),
        DetailTab::Specs => render_specs_panel(product),
        DetailTab::Reviews => render_reviews_panel(product),
    };

    format!(
        r#"<section class="detail-tabs">
    <div class="tab-list" role="tablist">{buttons}</div>
    <div class="tab-panel" role="tabpanel" data-tab="{tab}">
        {panel}
    </div>
</section>"#,
        buttons = buttons,
        tab = active_tab.as_str(),
        panel = panel
    )
}

fn render_description_panel(product: &Product) -> String {
    let tags: String = product
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, escape_html(tag)))
        .collect();

    format!(
        r#"<p class="product-description">{}</p>
        <div class="product-tags">{}</div>"#,
        escape_html(&product.description),
        tags
    )
}

fn render_specs_panel(product: &Product) -> String {
    let dims = &product.dimensions;
    let rows = [
        ("Brand", product.brand_label().to_string()),
        ("Category", product.category.clone()),
        ("SKU", product.sku.clone()),
        ("Weight", format!("{} kg", product.weight)),
        (
            "Dimensions",
            format!("{} x {} x {} cm", dims.width, dims.height, dims.depth),
        ),
        ("Warranty", product.warranty_information.clone()),
        ("Shipping", product.shipping_information.clone()),
        ("Availability", product.availability_status.as_str().to_string()),
        ("Return Policy", product.return_policy.clone()),
        ("Barcode", product.meta.barcode.clone()),
    ];

    let rows: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                "<tr><th>{}</th><td>{}</td></tr>",
                label,
                escape_html(value)
            )
        })
        .collect();

    format!(r#"<table class="specs-table">{}</table>"#, rows)
}

fn render_reviews_panel(product: &Product) -> String {
    if product.reviews.is_empty() {
        return r#"<p class="reviews-empty">No reviews yet.</p>"#.to_string();
    }

    let reviews: String = product.reviews.iter().map(render_review).collect();
    format!(r#"<div class="reviews-list">{}</div>"#, reviews)
}

fn render_review(review: &Review) -> String {
    let sentiment = review.sentiment();
    format!(
        r#"<article class="review {sentiment_class}">
            <header class="review-header">
                <span class="review-author">{author}</span>
                <span class="review-date">{date}</span>
            </header>
            {stars}
            <span class="review-sentiment">{sentiment}</span>
            <p class="review-body">{comment}</p>
        </article>"#,
        sentiment_class = sentiment.css_class(),
        author = escape_html(&review.reviewer_name),
        date = review.formatted_date(),
        stars = render_star_rating(f64::from(review.rating)),
        sentiment = sentiment.label(),
        comment = escape_html(&review.comment)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::{DetailEvent, DETAIL_ERROR_MESSAGE};
    use crate::fixtures::product;
    use hub_data::FetchError;

    fn ready_view() -> ProductDetailView {
        let mut view = ProductDetailView::new();
        let fetch = view.handle(DetailEvent::Mount(Some("4".into()))).unwrap();
        view.handle(DetailEvent::Loaded {
            ticket: fetch.ticket,
            result: Ok(product(4)),
        });
        view
    }

    #[test]
    fn test_spinner_while_loading() {
        let mut view = ProductDetailView::new();
        view.handle(DetailEvent::Mount(None));
        assert!(render_product_detail(&view).contains("spinner-large"));
    }

    #[test]
    fn test_error_has_home_and_retry() {
        let mut view = ProductDetailView::new();
        let fetch = view.handle(DetailEvent::Mount(Some("999".into()))).unwrap();
        view.handle(DetailEvent::Loaded {
            ticket: fetch.ticket,
            result: Err(FetchError::Http {
                status: 404,
                url: "https://dummyjson.com/products/999".to_string(),
            }),
        });

        let html = render_product_detail(&view);
        assert!(html.contains(DETAIL_ERROR_MESSAGE));
        assert!(html.contains(r#"<a class="btn-home" href="/">Return to Home</a>"#));
        assert!(html.contains("Try Again"));
    }

    #[test]
    fn test_price_and_stock() {
        let html = render_product_detail(&ready_view());
        assert!(html.contains(r#"<span class="price-current">$75.00</span>"#));
        assert!(html.contains(r#"<span class="price-original">$100.00</span>"#));
        assert!(html.contains("Save 25%"));
        assert!(html.contains(r#"<p class="stock-low">Low Stock (5 left)</p>"#));
        assert_eq!(html.matches("star-filled").count(), 4);
    }

    #[test]
    fn test_gallery_offers_five_images() {
        let html = render_product_detail(&ready_view());
        assert_eq!(html.matches(r#"data-action="select-image""#).count(), 5);
        assert!(html.contains(r#"src="https://cdn.dummyjson.com/p/4/thumbnail.png""#));
    }

    #[test]
    fn test_selected_thumbnail_is_active() {
        let mut view = ready_view();
        view.handle(DetailEvent::SelectImage(1));
        let html = render_product_detail(&view);
        assert_eq!(html.matches("gallery-thumbnail--active").count(), 1);
        assert!(html.contains(
            r#"<img class="gallery-main" src="https://cdn.dummyjson.com/p/4/2.png""#
        ));
    }

    #[test]
    fn test_quantity_controls() {
        let mut view = ready_view();
        let html = render_product_detail(&view);
        assert!(html.contains(r#"aria-label="Decrease quantity" disabled>"#));
        assert!(html.contains(r#"max="5" value="1""#));

        for _ in 0..4 {
            view.handle(DetailEvent::IncrementQuantity);
        }
        let html = render_product_detail(&view);
        assert!(html.contains(r#"aria-label="Increase quantity" disabled>"#));
        assert!(html.contains(r#"value="5""#));
    }

    #[test]
    fn test_tabs() {
        let mut view = ready_view();
        let html = render_product_detail(&view);
        assert!(html.contains("product-description"));
        assert!(html.contains(r#"class="tab tab--active" role="tab" aria-selected="true" data-tab="description""#));

        view.handle(DetailEvent::SelectTab(DetailTab::Specs));
        let html = render_product_detail(&view);
        assert!(html.contains("<tr><th>SKU</th><td>SKU-4</td></tr>"));
        assert!(html.contains("<tr><th>Dimensions</th><td>23.17 x 14.43 x 28.01 cm</td></tr>"));

        view.handle(DetailEvent::SelectTab(DetailTab::Reviews));
        let html = render_product_detail(&view);
        assert!(html.contains("John Doe"));
        assert!(html.contains("May 23, 2024"));
        assert!(html.contains("sentiment-negative"));
        assert!(html.contains(r#"data-tab="reviews">Reviews (1)</button>"#));
    }

    #[test]
    fn test_back_link_and_sku() {
        let html = render_product_detail(&ready_view());
        assert!(html.contains(r#"<a class="back-link" href="/">"#));
        assert!(html.contains("SKU: SKU-4"));
    }

    #[test]
    fn test_full_page_title() {
        let html = render_detail_page(&ready_view(), 2024);
        assert!(html.contains("<title>Product 4 | ProductHub</title>"));
    }
}
