//! Price math and formatting.
//!
//! Prices arrive from upstream as decimal dollars. The discounted price is
//! always derived on read from `price` and `discountPercentage`; it is never
//! stored on an entity.

/// Apply a percentage discount to a price.
pub fn discounted_price(price: f64, discount_percentage: f64) -> f64 {
    price * (1.0 - discount_percentage / 100.0)
}

/// Format a dollar amount with two decimals, e.g. `$75.00`.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format a discount badge, e.g. `Save 25%`.
pub fn format_savings(discount_percentage: f64) -> String {
    format!("Save {}%", discount_percentage.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounted_price() {
        assert_eq!(discounted_price(100.0, 25.0), 75.0);
        assert_eq!(discounted_price(80.0, 0.0), 80.0);
        assert_eq!(discounted_price(80.0, 100.0), 0.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(discounted_price(100.0, 25.0)), "$75.00");
        assert_eq!(format_price(9.999), "$10.00");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_savings_rounds_to_whole_percent() {
        assert_eq!(format_savings(7.17), "Save 7%");
        assert_eq!(format_savings(12.5), "Save 13%");
    }
}
