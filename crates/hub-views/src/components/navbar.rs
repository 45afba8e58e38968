//! Site navigation bar.

use super::escape_html;

/// Navigation entries as `(label, href)`.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Categories", "/categories"),
    ("Deals", "/deals"),
    ("About", "/about"),
];

/// Render the site navigation bar.
pub fn render_navbar() -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(label, href)| {
            format!(
                r#"<a class="nav-link" href="{}">{}</a>"#,
                href,
                escape_html(label)
            )
        })
        .collect();

    format!(
        r#"<header class="site-header">
    <nav class="navbar">
        <a class="brand-logo" href="/">ProductHub</a>
        <div class="nav-links">{links}</div>
        <form class="nav-search" role="search">
            <input type="search" name="q" placeholder="Search products...">
        </form>
        <div class="nav-actions">
            <button class="btn-icon btn-cart" aria-label="Cart">Cart</button>
            <button class="btn-icon btn-menu" aria-label="Menu">Menu</button>
        </div>
    </nav>
</header>"#,
        links = links
    )
}
