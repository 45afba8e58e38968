//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod html;
pub mod list;
pub mod show;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use hub_data::CatalogClient;
use hub_views::{
    DetailController, DetailEvent, DetailTab, ListController, ListEvent, ProductListView,
};

use crate::context::Context;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Page to show (1-indexed); clamped to the last page.
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product identifier; non-numeric values fall back to 1.
    pub id: String,

    /// Tab to open: description, specs or reviews.
    #[arg(short, long)]
    pub tab: Option<String>,

    /// Gallery image to select (1-indexed).
    #[arg(short, long)]
    pub image: Option<usize>,
}

/// Arguments for the html command.
#[derive(Args)]
pub struct HtmlArgs {
    #[command(subcommand)]
    pub command: HtmlCommand,

    /// Output file path (default: stdout).
    #[arg(short, long, global = true)]
    pub output: Option<String>,
}

#[derive(Subcommand)]
pub enum HtmlCommand {
    /// Export the home page with the product grid.
    List {
        /// Page to render.
        #[arg(short, long, default_value = "1")]
        page: u32,
    },
    /// Export a product detail page.
    Product(ShowArgs),
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Page to start on.
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Load one list page, showing a spinner while the fetch runs.
pub(crate) async fn load_list(ctx: &Context, page: u32) -> Result<ListController<CatalogClient>> {
    let catalog = ctx.catalog()?;
    ctx.output
        .debug(&format!("Catalog API: {}", catalog.base_url()));

    let mut controller = ListController::with_view(catalog, ProductListView::starting_at(page));
    let spinner = ctx.output.spinner(&format!("Loading page {}...", page));
    controller.dispatch(ListEvent::Mount).await;
    spinner.finish_and_clear();

    Ok(controller)
}

/// Load one product and apply the requested tab and image.
pub(crate) async fn load_detail(
    ctx: &Context,
    args: &ShowArgs,
) -> Result<DetailController<CatalogClient>> {
    let tab = args.tab.as_deref().map(parse_tab).transpose()?;

    let mut controller = DetailController::new(ctx.catalog()?);
    let spinner = ctx.output.spinner("Loading product...");
    controller
        .dispatch(DetailEvent::Mount(Some(args.id.as_str().into())))
        .await;
    spinner.finish_and_clear();

    if let Some(tab) = tab {
        controller.dispatch(DetailEvent::SelectTab(tab)).await;
    }
    if let Some(image) = args.image {
        controller
            .dispatch(DetailEvent::SelectImage(image.saturating_sub(1)))
            .await;
    }

    Ok(controller)
}

pub(crate) fn parse_tab(name: &str) -> Result<DetailTab> {
    DetailTab::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = DetailTab::ALL.iter().map(|t| t.as_str()).collect();
        anyhow!("Unknown tab '{}'. Expected one of: {}", name, names.join(", "))
    })
}
