//! Star rating renderer.

use hub_catalog::StarRating;

/// Render five star symbols for a decimal rating.
///
/// `round(rating)` stars are filled; 3.6 renders four filled and one empty.
pub fn render_star_rating(rating: f64) -> String {
    let stars = StarRating::from_rating(rating);
    let symbols: String = stars
        .symbols()
        .map(|filled| {
            if filled {
                r#"<span class="star star-filled">★</span>"#
            } else {
                r#"<span class="star star-empty">☆</span>"#
            }
        })
        .collect();

    format!(
        r#"<span class="star-rating" aria-label="{filled} out of 5 stars">{symbols}</span>"#,
        filled = stars.filled(),
        symbols = symbols
    )
}
