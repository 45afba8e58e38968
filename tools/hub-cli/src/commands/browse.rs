//! Interactive storefront.

use std::sync::Arc;

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use hub_catalog::ProductId;
use hub_data::CatalogClient;
use hub_views::{
    DetailController, DetailEvent, DetailTab, ListController, ListEvent, Phase,
    ProductDetailView, ProductListView,
};

use super::BrowseArgs;
use crate::context::Context;
use crate::render;

type Catalog = Arc<CatalogClient>;

/// Choices offered on the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListAction {
    Open,
    Next,
    Prev,
    GoTo,
    Retry,
    Quit,
}

impl ListAction {
    fn label(&self) -> &'static str {
        match self {
            ListAction::Open => "Open a product",
            ListAction::Next => "Next page",
            ListAction::Prev => "Previous page",
            ListAction::GoTo => "Go to page...",
            ListAction::Retry => "Try again",
            ListAction::Quit => "Quit",
        }
    }
}

fn list_actions(view: &ProductListView) -> Vec<ListAction> {
    let pagination = view.pagination();
    let mut actions = Vec::new();
    if !view.products().is_empty() {
        actions.push(ListAction::Open);
    }
    if pagination.has_next {
        actions.push(ListAction::Next);
    }
    if pagination.has_prev {
        actions.push(ListAction::Prev);
    }
    if pagination.total_pages > 1 {
        actions.push(ListAction::GoTo);
    }
    if view.phase() == Phase::Error {
        actions.push(ListAction::Retry);
    }
    actions.push(ListAction::Quit);
    actions
}

/// Choices offered on the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailAction {
    Tab(DetailTab),
    Image,
    Increase,
    Decrease,
    Retry,
    Back,
}

impl DetailAction {
    fn label(&self) -> String {
        match self {
            DetailAction::Tab(tab) => format!("Show {}", tab.display_name()),
            DetailAction::Image => "Select image...".to_string(),
            DetailAction::Increase => "Increase quantity".to_string(),
            DetailAction::Decrease => "Decrease quantity".to_string(),
            DetailAction::Retry => "Try again".to_string(),
            DetailAction::Back => "Back to products".to_string(),
        }
    }
}

fn detail_actions(view: &ProductDetailView) -> Vec<DetailAction> {
    let mut actions = Vec::new();
    if let Some(product) = view.product() {
        actions.extend(
            DetailTab::ALL
                .into_iter()
                .filter(|tab| *tab != view.active_tab())
                .map(DetailAction::Tab),
        );
        if !product.gallery().is_empty() {
            actions.push(DetailAction::Image);
        }
        if view.quantity() < view.max_quantity() {
            actions.push(DetailAction::Increase);
        }
        if view.quantity() > 1 {
            actions.push(DetailAction::Decrease);
        }
    }
    if view.phase() == Phase::Error {
        actions.push(DetailAction::Retry);
    }
    actions.push(DetailAction::Back);
    actions
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and does not support --json");
    }

    let catalog: Catalog = Arc::new(ctx.catalog()?);
    let mut list = ListController::with_view(catalog.clone(), ProductListView::starting_at(args.page));
    dispatch_list(ctx, &mut list, ListEvent::Mount).await;

    loop {
        ctx.output.header("Featured Products");
        ctx.output.block(&render::product_list(list.view()));

        let actions = list_actions(list.view());
        let labels: Vec<&str> = actions.iter().map(ListAction::label).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            ListAction::Open => {
                let titles: Vec<String> = list
                    .view()
                    .products()
                    .iter()
                    .map(|p| format!("{}  {}", p.title, p.price_label()))
                    .collect();
                let picked = Select::new()
                    .with_prompt("Product")
                    .items(&titles)
                    .default(0)
                    .interact()?;
                let id = list.view().products()[picked].id;
                browse_product(ctx, catalog.clone(), id).await?;
            }
            ListAction::Next => dispatch_list(ctx, &mut list, ListEvent::NextPage).await,
            ListAction::Prev => dispatch_list(ctx, &mut list, ListEvent::PrevPage).await,
            ListAction::GoTo => {
                let page: u32 = Input::new()
                    .with_prompt(format!("Page (1-{})", list.view().pagination().last_page()))
                    .interact_text()?;
                dispatch_list(ctx, &mut list, ListEvent::GoToPage(page)).await;
            }
            ListAction::Retry => dispatch_list(ctx, &mut list, ListEvent::Retry).await,
            ListAction::Quit => return Ok(()),
        }
    }
}

async fn browse_product(ctx: &Context, catalog: Catalog, id: ProductId) -> Result<()> {
    let mut detail = DetailController::new(catalog);
    dispatch_detail(ctx, &mut detail, DetailEvent::Mount(Some(id.to_string().into()))).await;

    loop {
        let heading = detail
            .view()
            .product()
            .map_or_else(|| format!("Product {}", id), |p| p.title.clone());
        ctx.output.header(&heading);
        ctx.output.block(&render::product_detail(detail.view()));

        let actions = detail_actions(detail.view());
        let labels: Vec<String> = actions.iter().map(DetailAction::label).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let event = match actions[choice] {
            DetailAction::Tab(tab) => DetailEvent::SelectTab(tab),
            DetailAction::Image => {
                let count = detail.view().product().map_or(0, |p| p.gallery().len());
                let images: Vec<String> = (1..=count).map(|n| format!("Image {}", n)).collect();
                let picked = Select::new()
                    .with_prompt("Image")
                    .items(&images)
                    .default(0)
                    .interact()?;
                DetailEvent::SelectImage(picked)
            }
            DetailAction::Increase => DetailEvent::IncrementQuantity,
            DetailAction::Decrease => DetailEvent::DecrementQuantity,
            DetailAction::Retry => DetailEvent::Retry,
            DetailAction::Back => return Ok(()),
        };
        dispatch_detail(ctx, &mut detail, event).await;
    }
}

async fn dispatch_list(ctx: &Context, list: &mut ListController<Catalog>, event: ListEvent) {
    let spinner = ctx.output.spinner("Loading products...");
    list.dispatch(event).await;
    spinner.finish_and_clear();
}

async fn dispatch_detail(
    ctx: &Context,
    detail: &mut DetailController<Catalog>,
    event: DetailEvent,
) {
    let fetches = matches!(event, DetailEvent::Mount(_) | DetailEvent::Retry);
    if !fetches {
        detail.dispatch(event).await;
        return;
    }

    let spinner = ctx.output.spinner("Loading product...");
    detail.dispatch(event).await;
    spinner.finish_and_clear();
}
