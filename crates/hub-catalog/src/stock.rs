//! Stock level labeling.

/// Stock level derived locally from the on-hand quantity.
///
/// This is distinct from [`AvailabilityStatus`](crate::AvailabilityStatus),
/// which upstream computes and ships with the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// More than ten units on hand.
    InStock,
    /// Between one and ten units on hand.
    LowStock(u32),
    /// Nothing on hand.
    OutOfStock,
}

impl StockLevel {
    /// Units above which stock is no longer considered low.
    pub const LOW_STOCK_THRESHOLD: u32 = 10;

    /// Classify an on-hand quantity.
    pub fn from_stock(stock: u32) -> Self {
        if stock > Self::LOW_STOCK_THRESHOLD {
            StockLevel::InStock
        } else if stock > 0 {
            StockLevel::LowStock(stock)
        } else {
            StockLevel::OutOfStock
        }
    }

    /// Get the display label.
    pub fn label(&self) -> String {
        match self {
            StockLevel::InStock => "In Stock".to_string(),
            StockLevel::LowStock(left) => format!("Low Stock ({} left)", left),
            StockLevel::OutOfStock => "Out of Stock".to_string(),
        }
    }

    /// Get the CSS class for the stock badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            StockLevel::InStock => "stock-available",
            StockLevel::LowStock(_) => "stock-low",
            StockLevel::OutOfStock => "stock-out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stock_boundaries() {
        assert_eq!(StockLevel::from_stock(11), StockLevel::InStock);
        assert_eq!(StockLevel::from_stock(10), StockLevel::LowStock(10));
        assert_eq!(StockLevel::from_stock(1), StockLevel::LowStock(1));
        assert_eq!(StockLevel::from_stock(0), StockLevel::OutOfStock);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StockLevel::from_stock(99).label(), "In Stock");
        assert_eq!(StockLevel::from_stock(3).label(), "Low Stock (3 left)");
        assert_eq!(StockLevel::from_stock(0).label(), "Out of Stock");
        assert_eq!(StockLevel::from_stock(0).css_class(), "stock-out");
    }
}
