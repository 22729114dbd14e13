//! Static HTML rendering of the filterable product table.
//!
//! Controls carry `data-action` attributes naming the [`TableAction`] they
//! trigger, so a page script can route clicks and input events back into
//! [`TableState::dispatch`].
//!
//! [`TableAction`]: crate::TableAction
//! [`TableState::dispatch`]: crate::TableState::dispatch

use std::borrow::Cow;

use stockview_catalog::Product;
use stockview_query::{Query, Row, SortField, SortOrder};

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Search bar followed by the product table.
pub fn render_page(query: &Query, rows: &[Row]) -> String {
    let mut out = String::from("<div class=\"filterable-product-table\">\n");
    out.push_str(&render_search_bar(query));
    out.push_str(&render_table(query, rows));
    out.push_str("</div>\n");
    out
}

pub fn render_search_bar(query: &Query) -> String {
    let checked = if query.in_stock_only { " checked" } else { "" };
    format!(
        concat!(
            "<form class=\"search-bar\">\n",
            "<input type=\"text\" value=\"{value}\" placeholder=\"Search...\" ",
            "style=\"width: 50%\" data-action=\"set_filter_text\">\n",
            "<label><input type=\"checkbox\" data-action=\"set_in_stock_only\"{checked}> ",
            "Only show products in stock</label>\n",
            "</form>\n",
        ),
        value = escape(&query.filter_text),
        checked = checked,
    )
}

pub fn render_table(query: &Query, rows: &[Row]) -> String {
    let mut out = String::from("<table>\n<thead>\n<tr>");
    out.push_str(&header_cell(query, SortField::Name, "Name"));
    out.push_str(&header_cell(query, SortField::Price, "Price"));
    out.push_str("<th><div class=\"sort-order\">");
    out.push_str(&order_control(query, SortOrder::Asc));
    out.push_str(&order_control(query, SortOrder::Desc));
    out.push_str("</div></th></tr>\n</thead>\n<tbody>\n");
    for row in rows {
        out.push_str(&render_row(row));
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn header_cell(query: &Query, field: SortField, label: &str) -> String {
    let class = if query.sort_field == field {
        "sortable active"
    } else {
        "sortable"
    };
    format!(
        "<th class=\"{class}\" data-action=\"sort_by\" data-value=\"{field}\">{label}</th>"
    )
}

fn order_control(query: &Query, order: SortOrder) -> String {
    let active = if query.sort_order == order { " class=\"active\"" } else { "" };
    format!(
        "<span{active} data-action=\"set_sort_order\" data-value=\"{order}\" style=\"cursor: pointer\">{glyph}</span>",
        glyph = order.glyph(),
    )
}

pub fn render_row(row: &Row) -> String {
    match row {
        Row::Category { name } => {
            format!("<tr><th colspan=\"2\">{}</th></tr>\n", escape(name))
        }
        Row::Product(product) => render_product_row(product),
    }
}

fn render_product_row(product: &Product) -> String {
    let name = escape(product.name());
    let name = if product.stocked() {
        name.into_owned()
    } else {
        format!("<span style=\"color: red\">{name}</span>")
    };
    format!(
        "<tr><td>{name}</td><td>{price}</td></tr>\n",
        price = escape(&product.price().to_string()),
    )
}
