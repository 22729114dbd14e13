//! `stockview` — evaluate one product query against the built-in catalog.

mod output;

use anyhow::Context;
use clap::Parser;

use stockview_catalog::Catalog;
use stockview_query::QueryParams;
use stockview_web::TableState;

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "stockview")]
#[command(about = "Filter, group and sort the product catalog", long_about = None)]
struct Cli {
    /// Case-insensitive substring of the product name
    #[arg(short, long, default_value = "")]
    filter: String,

    /// Only show products in stock
    #[arg(long)]
    in_stock_only: bool,

    /// Sort field within each category (`name` or `price`)
    #[arg(short, long, default_value = "name")]
    sort: String,

    /// Sort direction (`asc` or `desc`)
    #[arg(short, long, default_value = "asc")]
    order: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "STOCKVIEW_FORMAT")]
    format: OutputFormat,
}

impl Cli {
    fn params(&self) -> QueryParams {
        QueryParams {
            filter_text: self.filter.clone(),
            in_stock_only: self.in_stock_only,
            sort_field: self.sort.clone(),
            sort_order: self.order.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    stockview_observability::init();

    let cli = Cli::parse();
    let state = TableState::from_params(Catalog::sample(), cli.params())
        .context("failed to build query from command-line arguments")?;

    tracing::info!(query = ?state.query(), format = ?cli.format, "rendering product table");

    let rendered = output::render(&state, cli.format)?;
    print!("{rendered}");
    Ok(())
}
