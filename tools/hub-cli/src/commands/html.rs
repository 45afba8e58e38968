//! Export a storefront page as HTML.

use anyhow::{Context as _, Result};
use hub_views::pages::{current_year, render_detail_page, render_list_page};

use super::{load_detail, load_list, HtmlArgs, HtmlCommand};
use crate::context::Context;

/// Run the html command.
pub async fn run(args: HtmlArgs, ctx: &Context) -> Result<()> {
    let year = current_year();

    let html = match &args.command {
        HtmlCommand::List { page } => {
            let controller = load_list(ctx, *page).await?;
            render_list_page(controller.view(), year)
        }
        HtmlCommand::Product(show) => {
            let controller = load_detail(ctx, show).await?;
            render_detail_page(controller.view(), year)
        }
    };

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output.success(&format!("Wrote {}", path.display()));
        }
        None => print!("{}", html),
    }

    Ok(())
}
