//! Leptos component tree: search bar above the grouped product table.

use leptos::*;

use stockview_catalog::{Catalog, Product};
use stockview_query::{Query, Row, SortField, SortOrder};

use crate::state::TableAction;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let catalog = store_value(Catalog::sample());
    let query = create_rw_signal(Query::default());

    let on_action = Callback::new(move |action: TableAction| {
        query.update(|q| {
            action.apply(q);
        });
    });

    let rows = create_memo(move |_| {
        query.with(|q| catalog.with_value(|c| stockview_query::query(c, q)))
    });

    view! {
        <div class="filterable-product-table">
            <SearchBar query=query on_action=on_action/>
            <ProductTable query=query rows=rows on_action=on_action/>
        </div>
    }
}

#[component]
fn SearchBar(#[prop(into)] query: Signal<Query>, on_action: Callback<TableAction>) -> impl IntoView {
    view! {
        <form class="search-bar" on:submit=|ev| ev.prevent_default()>
            <input
                type="text"
                placeholder="Search..."
                style="width: 50%"
                prop:value=move || query.with(|q| q.filter_text.clone())
                on:input=move |ev| {
                    on_action.call(TableAction::SetFilterText(event_target_value(&ev)));
                }
            />
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || query.with(|q| q.in_stock_only)
                    on:change=move |ev| {
                        on_action.call(TableAction::SetInStockOnly(event_target_checked(&ev)));
                    }
                />
                " Only show products in stock"
            </label>
        </form>
    }
}

#[component]
fn ProductTable(
    #[prop(into)] query: Signal<Query>,
    #[prop(into)] rows: Signal<Vec<Row>>,
    on_action: Callback<TableAction>,
) -> impl IntoView {
    let header_class = move |field: SortField| {
        if query.with(|q| q.sort_field == field) {
            "sortable active"
        } else {
            "sortable"
        }
    };

    view! {
        <table>
            <thead>
                <tr>
                    <th
                        class=move || header_class(SortField::Name)
                        on:click=move |_| on_action.call(TableAction::SortBy(SortField::Name))
                    >
                        "Name"
                    </th>
                    <th
                        class=move || header_class(SortField::Price)
                        on:click=move |_| on_action.call(TableAction::SortBy(SortField::Price))
                    >
                        "Price"
                    </th>
                    <th>
                        <SortOrderControl query=query on_action=on_action/>
                    </th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| match row {
                            Row::Category { name } => {
                                view! { <ProductCategoryRow category=name/> }.into_view()
                            }
                            Row::Product(product) => {
                                view! { <ProductRow product=product/> }.into_view()
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

/// ▲/▼ controls. Only the direction changes; the sort field is untouched.
#[component]
fn SortOrderControl(#[prop(into)] query: Signal<Query>, on_action: Callback<TableAction>) -> impl IntoView {
    let glyph = move |order: SortOrder| {
        let class = move || {
            if query.with(|q| q.sort_order == order) {
                "active"
            } else {
                ""
            }
        };
        view! {
            <span
                class=class
                style="cursor: pointer"
                on:click=move |_| on_action.call(TableAction::SetSortOrder(order))
            >
                {order.glyph().to_string()}
            </span>
        }
    };

    view! {
        <div class="sort-order">
            {glyph(SortOrder::Asc)}
            {glyph(SortOrder::Desc)}
        </div>
    }
}

#[component]
fn ProductCategoryRow(category: String) -> impl IntoView {
    view! {
        <tr>
            <th colspan="2">{category}</th>
        </tr>
    }
}

#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let name = product.name().to_string();
    let name = if product.stocked() {
        name.into_view()
    } else {
        view! { <span style="color: red">{name}</span> }.into_view()
    };

    view! {
        <tr>
            <td>{name}</td>
            <td>{product.price().to_string()}</td>
        </tr>
    }
}
