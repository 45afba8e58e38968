//! Show one page of the product grid.

use anyhow::{bail, Result};
use hub_catalog::Product;
use hub_views::Phase;
use serde::Serialize;

use super::{load_list, ListArgs};
use crate::context::Context;
use crate::render;

/// JSON shape of a list page.
#[derive(Serialize)]
struct ListOutput<'a> {
    page: u32,
    total_pages: u32,
    total: u32,
    range: String,
    products: &'a [Product],
}

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let controller = load_list(ctx, args.page).await?;
    let view = controller.view();

    if let (Phase::Error, Some(message)) = (view.phase(), view.error()) {
        bail!("{}", message);
    }

    if ctx.output.is_json() {
        let pagination = view.pagination();
        ctx.output.json(&ListOutput {
            page: pagination.page,
            total_pages: pagination.total_pages,
            total: pagination.total,
            range: pagination.range_label(),
            products: view.products(),
        });
        return Ok(());
    }

    ctx.output.header("Featured Products");
    ctx.output.block(&render::product_list(view));

    Ok(())
}
