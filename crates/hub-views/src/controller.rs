//! Controllers that drive view state machines against a catalog.
//!
//! A controller feeds an event to its view, performs the fetch effect the
//! view asks for, and feeds the completion back in, until the view settles.

use hub_data::CatalogApi;
use tracing::instrument;

use crate::detail::{DetailEvent, ProductDetailView};
use crate::list::{ListEvent, ProductListView};

/// Drives a [`ProductListView`].
pub struct ListController<A> {
    api: A,
    view: ProductListView,
}

impl<A: CatalogApi> ListController<A> {
    pub fn new(api: A) -> Self {
        Self::with_view(api, ProductListView::new())
    }

    /// Drive an existing view, e.g. one created with
    /// [`ProductListView::starting_at`].
    pub fn with_view(api: A, view: ProductListView) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> &ProductListView {
        &self.view
    }

    /// Apply an event and run fetches until the view settles.
    #[instrument(skip(self), fields(page = self.view.current_page()))]
    pub async fn dispatch(&mut self, event: ListEvent) {
        let mut effect = self.view.handle(event);
        while let Some(fetch) = effect {
            let result = self.api.fetch_products(fetch.limit, fetch.skip).await;
            effect = self.view.handle(ListEvent::Loaded {
                ticket: fetch.ticket,
                result,
            });
        }
    }
}

/// Drives a [`ProductDetailView`].
pub struct DetailController<A> {
    api: A,
    view: ProductDetailView,
}

impl<A: CatalogApi> DetailController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: ProductDetailView::new(),
        }
    }

    pub fn view(&self) -> &ProductDetailView {
        &self.view
    }

    /// Apply an event and perform the resulting fetch, if any.
    #[instrument(skip(self), fields(product_id = self.view.product_id().get()))]
    pub async fn dispatch(&mut self, event: DetailEvent) {
        if let Some(fetch) = self.view.handle(event) {
            let result = self.api.fetch_product_by_id(fetch.id).await;
            self.view.handle(DetailEvent::Loaded {
                ticket: fetch.ticket,
                result,
            });
        }
    }
}
