//! View state machines and presentational components for the ProductHub
//! storefront.
//!
//! Each page is an explicit state machine (`loading | ready | error`) that
//! consumes events and emits at most one fetch effect per event:
//!
//! - [`ProductListView`] - paginated product grid with progressive refresh
//! - [`ProductDetailView`] - one product with gallery, quantity and tabs
//!
//! Every fetch carries a [`Ticket`] from the view's own [`RequestSeq`];
//! completions whose ticket is no longer the latest are discarded, so a slow
//! response can never overwrite a newer one.
//!
//! The controllers in [`controller`] execute effects against a
//! [`CatalogApi`](hub_data::CatalogApi). The [`components`] and [`pages`]
//! modules render view state to HTML as pure functions.

pub mod components;
pub mod controller;
pub mod detail;
pub mod list;
pub mod pages;
pub mod phase;
pub mod seq;

#[cfg(test)]
pub(crate) mod fixtures;

pub use controller::{DetailController, ListController};
pub use detail::{
    parse_product_id, DetailEvent, DetailScreen, DetailTab, FetchProduct, ProductDetailView,
    RouteParam,
};
pub use list::{FetchPage, ListEvent, ListScreen, ProductListView, PAGE_SIZE};
pub use phase::Phase;
pub use seq::{RequestSeq, Ticket};
