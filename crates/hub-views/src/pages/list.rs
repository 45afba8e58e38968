//! Home page: hero banner and the paginated product grid.

use hub_catalog::Pagination;

use super::{disabled_attr, page_shell, render_spinner};
use crate::components::{escape_html, render_product_card};
use crate::list::{ListScreen, ProductListView};

const HERO: &str = r#"<section class="hero">
    <h1>Discover Amazing Products</h1>
    <p>Browse our extensive collection of high-quality products at competitive prices.</p>
    <div class="hero-actions">
        <button class="btn-primary">Shop Now</button>
        <button class="btn-outline">Learn More</button>
    </div>
</section>"#;

/// Render the whole home page.
pub fn render_list_page(view: &ProductListView, year: i32) -> String {
    let content = format!(
        r#"{hero}
<section class="featured">
    <div class="section-header">
        <h2>Featured Products</h2>
        <div class="sort-options">
            <button>Newest</button>
            <button>Popular</button>
            <button>Best Deals</button>
        </div>
    </div>
    {list}
</section>"#,
        hero = HERO,
        list = render_product_list(view)
    );
    page_shell("ProductHub | Discover Amazing Products", year).render(&content)
}

/// Render the product list for the view's current screen.
pub fn render_product_list(view: &ProductListView) -> String {
    match view.screen() {
        ListScreen::Spinner => format!(
            r#"<div class="product-list product-list--loading">{}</div>"#,
            render_spinner(true)
        ),
        ListScreen::Failed { message } => format!(
            r#"<div class="product-list product-list--error">
    <div class="error-panel">
        <p class="error-message">{}</p>
        <button class="btn-retry" data-action="retry">Try Again</button>
    </div>
</div>"#,
            escape_html(message)
        ),
        ListScreen::Grid {
            products,
            pagination,
            refreshing,
        } => {
            let cards: String = products.iter().map(render_product_card).collect();
            let (modifier, spinner) = if refreshing {
                (" product-list--refreshing", render_spinner(false))
            } else {
                ("", String::new())
            };
            format!(
                r#"<div class="product-list{modifier}">
    {spinner}
    <div class="product-grid">
        {cards}
    </div>
    {pagination}
</div>"#,
                modifier = modifier,
                spinner = spinner,
                cards = cards,
                pagination = render_pagination(&pagination)
            )
        }
    }
}

fn render_pagination(pagination: &Pagination) -> String {
    format!(
        r#"<nav class="pagination" aria-label="Pagination">
        <span class="pagination-label">Showing {label}</span>
        <div class="pagination-controls">
            <button class="btn-prev" data-action="prev-page"{prev_disabled}>Previous</button>
            <span class="pagination-page">Page {page} of {pages}</span>
            <button class="btn-next" data-action="next-page"{next_disabled}>Next</button>
        </div>
    </nav>"#,
        label = pagination.range_label(),
        prev_disabled = disabled_attr(!pagination.has_prev),
        page = pagination.page,
        pages = pagination.last_page(),
        next_disabled = disabled_attr(!pagination.has_next)
    )
}
