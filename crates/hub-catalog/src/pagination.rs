//! Page window math for the product list.

use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u32,
    /// Total number of pages, `ceil(total / per_page)`.
    pub total_pages: u32,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: u32, per_page: u32, total: u32) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Number of items to skip to reach this page.
    pub fn skip(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Highest page a caller may navigate to; at least 1 even when empty.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// Clamp a requested page into `[1, last_page]`.
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.last_page())
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed, 0 when empty).
    pub fn start_item(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.skip() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> u32 {
        self.page.saturating_mul(self.per_page).min(self.total)
    }

    /// Range label, e.g. `13 - 24 of 25 products`.
    pub fn range_label(&self) -> String {
        format!(
            "{} - {} of {} products",
            self.start_item(),
            self.end_item(),
            self.total
        )
    }
}
