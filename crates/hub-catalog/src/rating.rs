//! Star rating display.

use std::fmt;

/// Number of symbols in a star rating.
pub const MAX_STARS: u8 = 5;

/// A five-symbol star rating.
///
/// The filled count is `round(rating)` with halves rounded up, clamped to
/// `[0, 5]`. Non-finite ratings render no filled stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    filled: u8,
}

impl StarRating {
    /// Build a star rating from a decimal rating.
    pub fn from_rating(rating: f64) -> Self {
        if !rating.is_finite() {
            return Self { filled: 0 };
        }
        let rounded = (rating + 0.5).floor().clamp(0.0, f64::from(MAX_STARS));
        Self {
            filled: rounded as u8,
        }
    }

    /// Number of filled symbols.
    pub fn filled(&self) -> u8 {
        self.filled
    }

    /// Number of empty symbols.
    pub fn empty(&self) -> u8 {
        MAX_STARS - self.filled
    }

    /// One entry per symbol, `true` when filled.
    pub fn symbols(&self) -> impl Iterator<Item = bool> {
        let filled = self.filled;
        (1..=MAX_STARS).map(move |star| star <= filled)
    }

    /// Render as text, e.g. `★★★★☆`.
    pub fn to_text(&self) -> String {
        self.symbols()
            .map(|filled| if filled { '★' } else { '☆' })
            .collect()
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(StarRating::from_rating(3.6).filled(), 4);
        assert_eq!(StarRating::from_rating(2.5).filled(), 3);
        assert_eq!(StarRating::from_rating(2.49).filled(), 2);
        assert_eq!(StarRating::from_rating(4.94).filled(), 5);
    }

    #[test]
    fn test_clamps_to_range() {
        assert_eq!(StarRating::from_rating(-1.0).filled(), 0);
        assert_eq!(StarRating::from_rating(9.0).filled(), 5);
        assert_eq!(StarRating::from_rating(f64::NAN).filled(), 0);
    }

    #[test]
    fn test_symbols_and_text() {
        let stars = StarRating::from_rating(3.6);
        assert_eq!(stars.symbols().count(), 5);
        assert_eq!(stars.symbols().filter(|f| *f).count(), 4);
        assert_eq!(stars.empty(), 1);
        assert_eq!(stars.to_text(), "★★★★☆");
        assert_eq!(StarRating::from_rating(0.0).to_string(), "☆☆☆☆☆");
    }
}
