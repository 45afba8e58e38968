//! Full-page renderers for the two storefront routes.

mod detail;
mod list;
mod styles;

use chrono::{Datelike, Utc};

use crate::components::{HeadContent, Shell};

pub use detail::{render_detail_page, render_product_detail};
pub use list::{render_list_page, render_product_list};
pub use styles::STOREFRONT_STYLES;

/// Year used for the footer copyright.
pub fn current_year() -> i32 {
    Utc::now().year()
}

fn page_shell(title: &str, year: i32) -> Shell {
    Shell::new(
        HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta(
                "description",
                "Browse our extensive collection of high-quality products at competitive prices.",
            )
            .with_style(STOREFRONT_STYLES),
        year,
    )
}

fn render_spinner(large: bool) -> String {
    let size = if large { " spinner-large" } else { "" };
    format!(
        r#"<div class="spinner{}" role="status" aria-label="Loading"></div>"#,
        size
    )
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}
