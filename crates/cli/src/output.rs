//! Output formats for the rendered rows.

use clap::ValueEnum;
use serde::Serialize;

use stockview_query::{Query, Row};
use stockview_web::TableState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented plain text, one line per row
    Text,
    /// The full HTML component markup
    Html,
    /// Query and rows as JSON
    Json,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    query: &'a Query,
    rows: &'a [Row],
}

pub fn render(state: &TableState, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(&state.rows())),
        OutputFormat::Html => Ok(state.render_html()),
        OutputFormat::Json => {
            let rows = state.rows();
            let mut json = serde_json::to_string_pretty(&JsonOutput {
                query: state.query(),
                rows: &rows,
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Category headers flush left, products indented with aligned prices.
pub fn render_text(rows: &[Row]) -> String {
    let width = rows
        .iter()
        .filter_map(Row::as_product)
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        match row {
            Row::Category { name } => {
                out.push_str(name);
                out.push('\n');
            }
            Row::Product(product) => {
                let line = format!("  {:<width$}  {}", product.name(), product.price());
                out.push_str(&line);
                if !product.stocked() {
                    out.push_str("  (out of stock)");
                }
                out.push('\n');
            }
        }
    }
    if out.is_empty() {
        out.push_str("no matching products\n");
    }
    out
}
