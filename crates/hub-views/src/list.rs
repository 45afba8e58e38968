//! Paginated product list state machine.
//!
//! | From  | Event                        | To      | Effect             |
//! |-------|------------------------------|---------|--------------------|
//! | any   | `Mount`                      | loading | fetch current page |
//! | any   | `NextPage` (has next)        | loading | fetch page + 1     |
//! | any   | `PrevPage` (page > 1)        | loading | fetch page - 1     |
//! | any   | `GoToPage(n)`                | loading | fetch clamped `n`  |
//! | any   | `Retry`                      | loading | fetch page 1       |
//! | any   | `Loaded` (latest, ok)        | ready   | none               |
//! | any   | `Loaded` (latest, past end)  | loading | fetch last page    |
//! | any   | `Loaded` (latest, err)       | error   | none               |
//! | any   | `Loaded` (stale)             | same    | none               |
//!
//! Products from the last successful load stay visible while a newer page is
//! in flight, which gives the progressive-refresh rendering.

use hub_catalog::{Pagination, Product, ProductResponse};
use hub_data::FetchError;
use tracing::{debug, warn};

use crate::phase::Phase;
use crate::seq::{RequestSeq, Ticket};

/// Products requested per page.
pub const PAGE_SIZE: u32 = 12;

/// Message shown when a page cannot be loaded.
pub const LIST_ERROR_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Events accepted by [`ProductListView`].
#[derive(Debug)]
pub enum ListEvent {
    /// The view was mounted.
    Mount,
    NextPage,
    PrevPage,
    /// Jump to a page; clamped once the total is known.
    GoToPage(u32),
    /// Reset to page 1 and refetch.
    Retry,
    /// A page fetch completed.
    Loaded {
        ticket: Ticket,
        result: Result<ProductResponse, FetchError>,
    },
}

/// Fetch effect emitted by the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPage {
    pub ticket: Ticket,
    pub limit: u32,
    pub skip: u32,
}

/// What the list should display right now.
#[derive(Debug, PartialEq)]
pub enum ListScreen<'a> {
    /// First load, nothing to show yet.
    Spinner,
    /// Load failed with nothing to show; offers a retry.
    Failed { message: &'static str },
    /// Product grid with pagination controls.
    Grid {
        products: &'a [Product],
        pagination: Pagination,
        /// A newer page is loading behind the visible grid.
        refreshing: bool,
    },
}

/// State of the paginated product list.
#[derive(Debug)]
pub struct ProductListView {
    phase: Phase,
    current_page: u32,
    shown_page: u32,
    products: Vec<Product>,
    total: Option<u32>,
    error: Option<&'static str>,
    seq: RequestSeq,
}

impl Default for ProductListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListView {
    /// Create a view positioned on page 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a view positioned on `page`; it is clamped after the first load.
    pub fn starting_at(page: u32) -> Self {
        Self {
            phase: Phase::Loading,
            current_page: page.max(1),
            shown_page: 0,
            products: Vec::new(),
            total: None,
            error: None,
            seq: RequestSeq::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Page requested most recently (1-indexed).
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Products from the last successful load.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Total product count reported upstream; 0 until the first load.
    pub fn total(&self) -> u32 {
        self.total.unwrap_or(0)
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Pagination derived from the current page and known total.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page, PAGE_SIZE, self.total())
    }

    /// Whether stale products are displayed while a newer page loads.
    pub fn is_refreshing(&self) -> bool {
        self.phase == Phase::Loading && !self.products.is_empty()
    }

    pub fn screen(&self) -> ListScreen<'_> {
        if self.products.is_empty() {
            match (self.phase, self.error) {
                (Phase::Loading, _) => return ListScreen::Spinner,
                (Phase::Error, Some(message)) => return ListScreen::Failed { message },
                _ => {}
            }
        }
        ListScreen::Grid {
            products: &self.products,
            pagination: self.pagination(),
            refreshing: self.is_refreshing(),
        }
    }

    /// Apply an event and return the fetch to perform, if any.
    pub fn handle(&mut self, event: ListEvent) -> Option<FetchPage> {
        match event {
            ListEvent::Mount => self.begin_fetch(),
            ListEvent::NextPage => {
                if !self.pagination().has_next {
                    return None;
                }
                self.current_page += 1;
                self.begin_fetch()
            }
            ListEvent::PrevPage => {
                if self.current_page <= 1 {
                    return None;
                }
                self.current_page -= 1;
                self.begin_fetch()
            }
            ListEvent::GoToPage(page) => {
                let target = match self.total {
                    Some(_) => self.pagination().clamp_page(page),
                    None => page.max(1),
                };
                if target == self.current_page && self.phase == Phase::Ready {
                    return None;
                }
                self.current_page = target;
                self.begin_fetch()
            }
            ListEvent::Retry => {
                self.current_page = 1;
                self.begin_fetch()
            }
            ListEvent::Loaded { ticket, result } => self.complete(ticket, result),
        }
    }

    fn begin_fetch(&mut self) -> Option<FetchPage> {
        self.phase = Phase::Loading;
        let ticket = self.seq.issue();
        let fetch = FetchPage {
            ticket,
            limit: PAGE_SIZE,
            skip: self.pagination().skip(),
        };
        debug!(ticket = %ticket, page = self.current_page, skip = fetch.skip, "requesting product page");
        Some(fetch)
    }

    fn complete(
        &mut self,
        ticket: Ticket,
        result: Result<ProductResponse, FetchError>,
    ) -> Option<FetchPage> {
        if !self.seq.is_latest(ticket) {
            debug!(ticket = %ticket, "discarding stale product page");
            return None;
        }

        match result {
            Ok(page) => {
                self.total = Some(page.total);
                let last = self.pagination().last_page();
                if self.current_page > last {
                    // Catalog shrank under us; land on the last real page.
                    debug!(page = self.current_page, last, "page past the end");
                    self.current_page = last;
                    return self.begin_fetch();
                }
                self.products = page.products;
                self.shown_page = self.current_page;
                self.error = None;
                self.phase = Phase::Ready;
                None
            }
            Err(e) => {
                warn!(error = %e, page = self.current_page, "failed to load product page");
                if !self.products.is_empty() {
                    self.current_page = self.shown_page;
                }
                self.error = Some(LIST_ERROR_MESSAGE);
                self.phase = Phase::Error;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::page;

    fn loaded(fetch: FetchPage, total: u32) -> ListEvent {
        ListEvent::Loaded {
            ticket: fetch.ticket,
            result: Ok(page(total, fetch.limit, fetch.skip)),
        }
    }

    fn failed(fetch: FetchPage) -> ListEvent {
        ListEvent::Loaded {
            ticket: fetch.ticket,
            result: Err(FetchError::Network("connection reset".to_string())),
        }
    }

    fn ready_on_page(total: u32, page: u32) -> ProductListView {
        let mut view = ProductListView::starting_at(page);
        let fetch = view.handle(ListEvent::Mount).unwrap();
        assert!(view.handle(loaded(fetch, total)).is_none());
        view
    }

    #[test]
    fn test_mount_requests_first_page() {
        let mut view = ProductListView::new();
        assert_eq!(view.screen(), ListScreen::Spinner);

        let fetch = view.handle(ListEvent::Mount).unwrap();
        assert_eq!(fetch.limit, PAGE_SIZE);
        assert_eq!(fetch.skip, 0);
        assert_eq!(view.phase(), Phase::Loading);
        assert_eq!(view.screen(), ListScreen::Spinner);
    }

    #[test]
    fn test_first_load_shows_grid() {
        let view = ready_on_page(194, 1);
        assert_eq!(view.phase(), Phase::Ready);
        assert_eq!(view.products().len(), 12);

        let pagination = view.pagination();
        assert_eq!(pagination.total_pages, 17);
        assert_eq!(pagination.range_label(), "1 - 12 of 194 products");
        assert!(matches!(view.screen(), ListScreen::Grid { refreshing: false, .. }));
    }

    #[test]
    fn test_three_pages_for_twenty_five_products() {
        let mut view = ready_on_page(25, 1);
        assert_eq!(view.pagination().total_pages, 3);
        assert!(!view.pagination().has_prev);
        assert!(view.handle(ListEvent::PrevPage).is_none());

        let fetch = view.handle(ListEvent::GoToPage(3)).unwrap();
        assert_eq!(fetch.skip, 24);
        view.handle(loaded(fetch, 25));

        assert_eq!(view.current_page(), 3);
        assert_eq!(view.products().len(), 1);
        assert_eq!(view.pagination().range_label(), "25 - 25 of 25 products");
        assert!(!view.pagination().has_next);
        assert!(view.handle(ListEvent::NextPage).is_none());
    }

    #[test]
    fn test_next_page_refreshes_progressively() {
        let mut view = ready_on_page(30, 1);
        let first_ids: Vec<_> = view.products().iter().map(|p| p.id).collect();

        let fetch = view.handle(ListEvent::NextPage).unwrap();
        assert_eq!(fetch.skip, 12);
        assert!(view.is_refreshing());
        match view.screen() {
            ListScreen::Grid {
                products,
                refreshing,
                ..
            } => {
                assert!(refreshing);
                let ids: Vec<_> = products.iter().map(|p| p.id).collect();
                assert_eq!(ids, first_ids);
            }
            other => panic!("expected grid, got {:?}", other),
        }

        view.handle(loaded(fetch, 30));
        assert_eq!(view.products()[0].id.get(), 13);
        assert!(!view.is_refreshing());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut view = ready_on_page(50, 1);
        let slow = view.handle(ListEvent::NextPage).unwrap();
        let fast = view.handle(ListEvent::NextPage).unwrap();
        assert_eq!(view.current_page(), 3);

        view.handle(loaded(fast, 50));
        assert_eq!(view.products()[0].id.get(), 25);

        assert!(view.handle(loaded(slow, 50)).is_none());
        assert_eq!(view.current_page(), 3);
        assert_eq!(view.products()[0].id.get(), 25);
        assert_eq!(view.phase(), Phase::Ready);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut view = ready_on_page(25, 1);

        let fetch = view.handle(ListEvent::GoToPage(99)).unwrap();
        assert_eq!(view.current_page(), 3);
        assert_eq!(fetch.skip, 24);
        view.handle(loaded(fetch, 25));

        let fetch = view.handle(ListEvent::GoToPage(0)).unwrap();
        assert_eq!(view.current_page(), 1);
        assert_eq!(fetch.skip, 0);
    }

    #[test]
    fn test_go_to_current_page_is_noop_when_ready() {
        let mut view = ready_on_page(25, 1);
        assert!(view.handle(ListEvent::GoToPage(1)).is_none());
    }

    #[test]
    fn test_start_past_end_refetches_last_page() {
        let mut view = ProductListView::starting_at(9);
        let fetch = view.handle(ListEvent::Mount).unwrap();
        assert_eq!(fetch.skip, 96);

        let refetch = view.handle(loaded(fetch, 25)).unwrap();
        assert_eq!(view.current_page(), 3);
        assert_eq!(refetch.skip, 24);
        assert_eq!(view.phase(), Phase::Loading);

        view.handle(loaded(refetch, 25));
        assert_eq!(view.phase(), Phase::Ready);
        assert_eq!(view.products().len(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        let view = ready_on_page(0, 1);
        assert_eq!(view.phase(), Phase::Ready);
        let pagination = view.pagination();
        assert_eq!(pagination.last_page(), 1);
        assert!(!pagination.has_next);
        assert!(!pagination.has_prev);
        assert!(matches!(view.screen(), ListScreen::Grid { products, .. } if products.is_empty()));
    }

    #[test]
    fn test_first_load_failure_then_retry() {
        let mut view = ProductListView::starting_at(2);
        let fetch = view.handle(ListEvent::Mount).unwrap();
        view.handle(failed(fetch));

        assert_eq!(view.phase(), Phase::Error);
        assert_eq!(
            view.screen(),
            ListScreen::Failed {
                message: LIST_ERROR_MESSAGE
            }
        );

        let retry = view.handle(ListEvent::Retry).unwrap();
        assert_eq!(view.current_page(), 1);
        assert_eq!(retry.skip, 0);
        view.handle(loaded(retry, 25));
        assert_eq!(view.phase(), Phase::Ready);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_failure_keeps_visible_grid() {
        let mut view = ready_on_page(50, 1);
        let fetch = view.handle(ListEvent::NextPage).unwrap();
        view.handle(failed(fetch));

        assert_eq!(view.phase(), Phase::Error);
        assert_eq!(view.error(), Some(LIST_ERROR_MESSAGE));
        assert_eq!(view.current_page(), 1);
        assert!(matches!(
            view.screen(),
            ListScreen::Grid { products, refreshing: false, .. } if products.len() == 12
        ));

        // Navigation still works from the error state.
        assert!(view.handle(ListEvent::NextPage).is_some());
    }
}
