//! Presentational components rendered to HTML strings.
//!
//! Components are pure functions of their inputs; all text coming from the
//! catalog is escaped with [`escape_html`].

mod card;
mod footer;
mod navbar;
mod shell;
mod stars;

pub use card::render_product_card;
pub use footer::{render_footer, FOOTER_LINKS};
pub use navbar::{render_navbar, NAV_LINKS};
pub use shell::{HeadContent, Shell};
pub use stars::render_star_rating;

/// Escape text for safe use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
