//! ProductHub CLI - browse the product catalog from the terminal.
//!
//! Commands:
//! - `producthub list` - Show one page of the product grid
//! - `producthub show` - Show a single product
//! - `producthub html` - Export a page as a standalone HTML document
//! - `producthub browse` - Interactive storefront
//! - `producthub config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, ConfigArgs, HtmlArgs, ListArgs, ShowArgs};

/// ProductHub CLI - Browse the product catalog
#[derive(Parser)]
#[command(name = "producthub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog API base URL (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of products
    List(ListArgs),

    /// Show a single product
    Show(ShowArgs),

    /// Export a page as HTML
    Html(HtmlArgs),

    /// Browse the catalog interactively
    Browse(BrowseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.api_url.as_deref(), output)?;

    if let Err(e) = logging::init(&ctx.config.logging, cli.verbose) {
        ctx.output.warn(&format!("Logging disabled: {:#}", e));
    }

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Html(args) => commands::html::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
