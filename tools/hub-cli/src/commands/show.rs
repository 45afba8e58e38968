//! Show a single product.

use anyhow::{bail, Result};

use super::{load_detail, ShowArgs};
use crate::context::Context;
use crate::render;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let controller = load_detail(ctx, &args).await?;
    let view = controller.view();

    let Some(product) = view.product() else {
        ctx.output.block(&render::product_detail(view));
        bail!("Product {} could not be loaded", view.product_id());
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.block(&render::product_detail(view));

    Ok(())
}
