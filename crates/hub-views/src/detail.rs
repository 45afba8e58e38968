//! Product detail state machine.
//!
//! The route parameter is parsed into a [`ProductId`] on mount and on every
//! change; anything unusable falls back to [`ProductId::DEFAULT`]. Gallery,
//! tab and quantity events never fetch.

use hub_catalog::{Product, ProductId};
use hub_data::FetchError;
use tracing::{debug, warn};

use crate::phase::Phase;
use crate::seq::{RequestSeq, Ticket};

/// Message shown when a product cannot be loaded.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load product details. Please try again later.";

/// Target of the "Return to Home" action on the error screen.
pub const HOME_HREF: &str = "/";

/// Raw `id` route segment, single or repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParam {
    One(String),
    Many(Vec<String>),
}

impl RouteParam {
    /// The value used for parsing; the first one when repeated.
    pub fn first(&self) -> Option<&str> {
        match self {
            RouteParam::One(value) => Some(value.as_str()),
            RouteParam::Many(values) => values.first().map(String::as_str),
        }
    }
}

impl From<&str> for RouteParam {
    fn from(value: &str) -> Self {
        RouteParam::One(value.to_string())
    }
}

impl From<String> for RouteParam {
    fn from(value: String) -> Self {
        RouteParam::One(value)
    }
}

impl From<Vec<String>> for RouteParam {
    fn from(values: Vec<String>) -> Self {
        RouteParam::Many(values)
    }
}

/// Parse a route parameter into a product id.
///
/// Leading whitespace is skipped and the leading decimal digits are read, so
/// `"42abc"` is 42. Missing, empty, non-numeric, zero or overflowing values
/// all yield [`ProductId::DEFAULT`].
pub fn parse_product_id(param: Option<&RouteParam>) -> ProductId {
    param
        .and_then(RouteParam::first)
        .and_then(leading_integer)
        .and_then(ProductId::new)
        .unwrap_or(ProductId::DEFAULT)
}

fn leading_integer(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Tabs of the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DetailTab {
    #[default]
    Description,
    Specs,
    Reviews,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Description, DetailTab::Specs, DetailTab::Reviews];

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailTab::Description => "description",
            DetailTab::Specs => "specs",
            DetailTab::Reviews => "reviews",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DetailTab::Description => "Description",
            DetailTab::Specs => "Specifications",
            DetailTab::Reviews => "Reviews",
        }
    }

    /// Tab button text; the reviews tab carries the review count.
    pub fn label(&self, product: &Product) -> String {
        match self {
            DetailTab::Reviews => format!("Reviews ({})", product.review_count()),
            _ => self.display_name().to_string(),
        }
    }

    /// Look up a tab by its `as_str` name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

/// Events accepted by [`ProductDetailView`].
#[derive(Debug)]
pub enum DetailEvent {
    Mount(Option<RouteParam>),
    ParamChanged(Option<RouteParam>),
    /// Select a gallery image by index; only the first five are offered.
    SelectImage(usize),
    SelectTab(DetailTab),
    IncrementQuantity,
    DecrementQuantity,
    /// Refetch the current product.
    Retry,
    Loaded {
        ticket: Ticket,
        result: Result<Product, FetchError>,
    },
}

/// Fetch effect emitted by the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProduct {
    pub ticket: Ticket,
    pub id: ProductId,
}

/// What the detail page should display right now.
#[derive(Debug, PartialEq)]
pub enum DetailScreen<'a> {
    Spinner,
    /// Load failed; offers "Return to Home" and a retry.
    Failed {
        message: &'static str,
        home_href: &'static str,
    },
    Ready {
        product: &'a Product,
        selected_image: Option<&'a str>,
        active_tab: DetailTab,
        quantity: u32,
    },
}

/// State of the product detail page.
#[derive(Debug)]
pub struct ProductDetailView {
    phase: Phase,
    product_id: ProductId,
    product: Option<Product>,
    selected_image: Option<String>,
    active_tab: DetailTab,
    quantity: u32,
    error: Option<&'static str>,
    mounted: bool,
    seq: RequestSeq,
}

impl Default for ProductDetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDetailView {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            product_id: ProductId::DEFAULT,
            product: None,
            selected_image: None,
            active_tab: DetailTab::default(),
            quantity: 1,
            error: None,
            mounted: false,
            seq: RequestSeq::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Id of the product being shown or fetched.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    pub fn active_tab(&self) -> DetailTab {
        self.active_tab
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Upper bound of the quantity stepper.
    pub fn max_quantity(&self) -> u32 {
        self.product.as_ref().map_or(1, |p| p.stock.max(1))
    }

    pub fn screen(&self) -> DetailScreen<'_> {
        match (self.phase, &self.product) {
            (Phase::Error, _) => DetailScreen::Failed {
                message: self.error.unwrap_or(DETAIL_ERROR_MESSAGE),
                home_href: HOME_HREF,
            },
            (Phase::Ready, Some(product)) => DetailScreen::Ready {
                product,
                selected_image: self.selected_image.as_deref(),
                active_tab: self.active_tab,
                quantity: self.quantity,
            },
            _ => DetailScreen::Spinner,
        }
    }

    /// Apply an event and return the fetch to perform, if any.
    pub fn handle(&mut self, event: DetailEvent) -> Option<FetchProduct> {
        match event {
            DetailEvent::Mount(param) => {
                self.mounted = true;
                self.product_id = parse_product_id(param.as_ref());
                self.begin_fetch()
            }
            DetailEvent::ParamChanged(param) => {
                let id = parse_product_id(param.as_ref());
                if self.mounted && id == self.product_id {
                    return None;
                }
                self.mounted = true;
                self.product_id = id;
                self.begin_fetch()
            }
            DetailEvent::SelectImage(index) => {
                if let Some(url) = self.product.as_ref().and_then(|p| p.gallery().get(index)) {
                    self.selected_image = Some(url.clone());
                }
                None
            }
            DetailEvent::SelectTab(tab) => {
                self.active_tab = tab;
                None
            }
            DetailEvent::IncrementQuantity => {
                self.quantity = self.quantity.saturating_add(1).min(self.max_quantity());
                None
            }
            DetailEvent::DecrementQuantity => {
                self.quantity = self.quantity.saturating_sub(1).max(1);
                None
            }
            DetailEvent::Retry => self.begin_fetch(),
            DetailEvent::Loaded { ticket, result } => {
                self.complete(ticket, result);
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> Option<FetchProduct> {
        self.phase = Phase::Loading;
        self.product = None;
        self.selected_image = None;
        let ticket = self.seq.issue();
        debug!(ticket = %ticket, product_id = self.product_id.get(), "requesting product");
        Some(FetchProduct {
            ticket,
            id: self.product_id,
        })
    }

    fn complete(&mut self, ticket: Ticket, result: Result<Product, FetchError>) {
        if !self.seq.is_latest(ticket) {
            debug!(ticket = %ticket, "discarding stale product");
            return;
        }

        match result {
            Ok(product) => {
                self.selected_image = product.thumbnail_url().map(str::to_string);
                self.quantity = 1;
                self.product = Some(product);
                self.error = None;
                self.phase = Phase::Ready;
            }
            Err(e) => {
                warn!(error = %e, product_id = self.product_id.get(), "failed to load product");
                self.error = Some(DETAIL_ERROR_MESSAGE);
                self.phase = Phase::Error;
            }
        }
    }
}
