//! Site footer.

use super::escape_html;

/// Footer link columns as `(heading, [(label, href)])`.
pub const FOOTER_LINKS: [(&str, [(&str, &str); 4]); 2] = [
    (
        "Quick Links",
        [
            ("Home", "/"),
            ("Categories", "/categories"),
            ("Deals", "/deals"),
            ("About Us", "/about"),
        ],
    ),
    (
        "Customer Service",
        [
            ("Contact Us", "/contact"),
            ("Shipping Policy", "/shipping"),
            ("Returns & Refunds", "/returns"),
            ("FAQ", "/faq"),
        ],
    ),
];

const LEGAL_LINKS: [(&str, &str); 3] = [
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
    ("Sitemap", "/sitemap"),
];

fn render_links(links: &[(&str, &str)]) -> String {
    links
        .iter()
        .map(|(label, href)| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                href,
                escape_html(label)
            )
        })
        .collect()
}

/// Render the site footer with the copyright line for `year`.
pub fn render_footer(year: i32) -> String {
    let columns: String = FOOTER_LINKS
        .iter()
        .map(|(heading, links)| {
            format!(
                r#"<div class="footer-column">
            <h3>{}</h3>
            <ul>{}</ul>
        </div>"#,
                heading,
                render_links(links)
            )
        })
        .collect();

    let legal: String = LEGAL_LINKS
        .iter()
        .map(|(label, href)| format!(r#"<a href="{}">{}</a>"#, href, label))
        .collect();

    format!(
        r#"<footer class="site-footer">
    <div class="footer-grid">
        <div class="footer-column">
            <h3>ProductHub</h3>
            <p>Your one-stop shop for all products. Browse our extensive collection and find the best deals on quality items.</p>
        </div>
        {columns}
        <div class="footer-column">
            <h3>Connect With Us</h3>
            <form class="newsletter">
                <h4>Subscribe to our newsletter</h4>
                <input type="email" placeholder="Your email">
                <button type="submit">Subscribe</button>
            </form>
        </div>
    </div>
    <div class="footer-bottom">
        <p>&copy; {year} ProductHub. All rights reserved.</p>
        <nav class="legal-links">{legal}</nav>
    </div>
</footer>"#,
        columns = columns,
        year = year,
        legal = legal
    )
}
