//! Terminal renderings of the storefront views.

use console::style;
use hub_catalog::{Pagination, Product, Review};
use hub_views::{DetailScreen, DetailTab, ListScreen, ProductDetailView, ProductListView};

/// Render the product list for the terminal.
pub fn product_list(view: &ProductListView) -> String {
    match view.screen() {
        ListScreen::Spinner => "Loading products...".to_string(),
        ListScreen::Failed { message } => format!(
            "{}\n{}",
            style(message).red(),
            style("Choose Retry to try again.").dim()
        ),
        ListScreen::Grid {
            products,
            pagination,
            refreshing,
        } => {
            let mut lines: Vec<String> = Vec::new();
            if products.is_empty() {
                lines.push(style("No products found.").dim().to_string());
            }
            for product in products {
                lines.push(product_card(product));
            }
            if refreshing {
                lines.push(style("Refreshing...").dim().to_string());
            }
            lines.push(pagination_bar(&pagination));
            lines.join("\n")
        }
    }
}

fn product_card(product: &Product) -> String {
    let badge = if product.is_low_stock() {
        format!(" {}", style("[Low Stock]").red())
    } else {
        String::new()
    };

    let tags: Vec<&str> = product.tags.iter().take(2).map(String::as_str).collect();
    let meta = if tags.is_empty() {
        product.brand_label().to_string()
    } else {
        format!("{} • {}", product.brand_label(), tags.join(", "))
    };

    let original = product
        .original_price_label()
        .map(|label| format!(" {}", style(format!("was {}", label)).dim().strikethrough()))
        .unwrap_or_default();

    format!(
        "  {} {}  {} {}{}\n      {}\n      {}{}  {}",
        style(format!("#{}", product.id)).dim(),
        style(&product.title).bold(),
        style("★").yellow(),
        product.rating_label(),
        badge,
        style(meta).dim(),
        style(product.price_label()).green().bold(),
        original,
        style(product.href()).cyan()
    )
}

fn pagination_bar(pagination: &Pagination) -> String {
    let prev = if pagination.has_prev {
        style("‹ Previous").to_string()
    } else {
        style("‹ Previous").dim().to_string()
    };
    let next = if pagination.has_next {
        style("Next ›").to_string()
    } else {
        style("Next ›").dim().to_string()
    };

    format!(
        "\nShowing {}\nPage {} of {}   {}  {}",
        pagination.range_label(),
        pagination.page,
        pagination.last_page(),
        prev,
        next
    )
}

/// Render the product detail for the terminal.
pub fn product_detail(view: &ProductDetailView) -> String {
    match view.screen() {
        DetailScreen::Spinner => "Loading product...".to_string(),
        DetailScreen::Failed { message, home_href } => format!(
            "{}\n{}",
            style(message).red(),
            style(format!("Return to Home: {}", home_href)).dim()
        ),
        DetailScreen::Ready {
            product,
            selected_image,
            active_tab,
            quantity,
        } => {
            let mut lines = vec![
                format!(
                    "{} / {}",
                    style(&product.category).dim(),
                    style(&product.title).bold()
                ),
                style(product.brand_label()).dim().to_string(),
                format!(
                    "{} {} ({} reviews)",
                    style(product.stars().to_text()).yellow(),
                    product.rating_label(),
                    product.review_count()
                ),
                price_line(product),
                product.stock_level().label(),
                format!("Quantity: {} (1-{})", quantity, view.max_quantity()),
                format!(
                    "Minimum order: {}  |  {}  |  {}",
                    product.minimum_order_quantity,
                    product.shipping_information,
                    product.return_policy
                ),
            ];

            lines.push(String::new());
            for (index, url) in product.gallery().iter().enumerate() {
                let marker = if selected_image == Some(url.as_str()) {
                    style("●").green().to_string()
                } else {
                    "○".to_string()
                };
                lines.push(format!("{} image {}: {}", marker, index + 1, url));
            }

            lines.push(String::new());
            lines.push(tab_bar(product, active_tab));
            lines.push(tab_panel(product, active_tab));
            lines.join("\n")
        }
    }
}

fn price_line(product: &Product) -> String {
    let mut line = style(product.price_label()).green().bold().to_string();
    if let Some(original) = product.original_price_label() {
        line.push_str(&format!(" {}", style(original).dim().strikethrough()));
    }
    if let Some(savings) = product.savings_label() {
        line.push_str(&format!(" {}", style(savings).green()));
    }
    line
}

fn tab_bar(product: &Product, active_tab: DetailTab) -> String {
    DetailTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active_tab {
                style(format!("[{}]", tab.label(product))).bold().to_string()
            } else {
                style(format!(" {} ", tab.label(product))).dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn tab_panel(product: &Product, active_tab: DetailTab) -> String {
    match active_tab {
        DetailTab::Description => {
            let mut text = product.description.clone();
            if !product.tags.is_empty() {
                text.push_str(&format!("\nTags: {}", product.tags.join(", ")));
            }
            text
        }
        DetailTab::Specs => {
            let dims = &product.dimensions;
            [
                ("Brand", product.brand_label().to_string()),
                ("Category", product.category.clone()),
                ("SKU", product.sku.clone()),
                ("Weight", format!("{} kg", product.weight)),
                (
                    "Dimensions",
                    format!("{} x {} x {} cm", dims.width, dims.height, dims.depth),
                ),
                ("Warranty", product.warranty_information.clone()),
                ("Availability", product.availability_status.as_str().to_string()),
                ("Barcode", product.meta.barcode.clone()),
            ]
            .iter()
            .map(|(label, value)| format!("  {:<14}{}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
        }
        DetailTab::Reviews => {
            if product.reviews.is_empty() {
                return "No reviews yet.".to_string();
            }
            product
                .reviews
                .iter()
                .map(review_entry)
                .collect::<Vec<_>>()
                .join("\n\n")
        }
    }
}

fn review_entry(review: &Review) -> String {
    format!(
        "{} {} ({})\n  {} {}\n  {}",
        style(&review.reviewer_name).bold(),
        style(review.formatted_date()).dim(),
        review.sentiment().label(),
        style(review.stars().to_text()).yellow(),
        review.rating,
        review.comment
    )
}
