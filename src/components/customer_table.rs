//! Customer table with virtual scrolling

use leptos::prelude::*;
use leptos::html;
use wasm_bindgen::JsCast;
use customer_list_core::columns::sort_indicator;
use customer_list_core::{window, DerivedView, Record, SortSpec, TableConfig, TableEvent, COLUMNS, TOTAL_WIDTH};

#[component]
pub fn CustomerTable(
    derived: Memo<DerivedView>,
    sort: Signal<SortSpec>,
    scroll_offset: Memo<f64>,
    config: TableConfig,
    on_event: Callback<TableEvent>,
) -> impl IntoView {
    let row_height = config.row_height;
    let viewport_height = config.viewport_height;
    let buffer = config.buffer;
    let table_ref = NodeRef::<html::Div>::new();

    let visible = Memo::new(move |_| {
        window(derived.with(|v| v.len()), scroll_offset.get(), viewport_height, row_height, buffer)
    });

    // The reducer resets scroll on query changes; mirror that onto the element.
    // Other offsets come from the element itself, so they are left alone.
    Effect::new(move || {
        let offset = scroll_offset.get();
        if let Some(el) = table_ref.get() {
            if offset == 0.0 && el.scroll_top() != 0 {
                el.set_scroll_top(0);
            }
        }
    });

    let on_scroll = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            let element: web_sys::HtmlElement = target.unchecked_into();
            on_event.run(TableEvent::Scrolled(element.scroll_top() as f64));
        }
    };

    let on_sort = Callback::new(move |key: &'static str| {
        if let Some(event) = TableEvent::sort_requested(key) {
            on_event.run(event);
        }
    });

    let visible_rows = move || {
        let range = visible.get().range();
        derived.with(|v| v.slice(range).map(|(_, r)| r.clone()).collect::<Vec<_>>())
    };

    view! {
        <div
            class="customer-table"
            node_ref=table_ref
            style:max-height=format!("{}px", viewport_height)
            style:width=format!("{}px", TOTAL_WIDTH)
            on:scroll=on_scroll
        >
            <TableHeader sort=sort on_sort=on_sort />
            <div class="table-body">
                <div style:height=move || format!("{}px", visible.get().padding_before_px)></div>
                <For
                    each=visible_rows
                    key=|r: &Record| r.id
                    children=move |record| view! { <TableRow record=record row_height=row_height /> }
                />
                <div style:height=move || format!("{}px", visible.get().padding_after_px)></div>
            </div>
            {move || derived.with(|v| v.is_empty()).then(|| view! {
                <div class="empty-state">
                    <p>"No customers match the current search and filters."</p>
                </div>
            })}
        </div>
    }
}

#[component]
fn TableHeader(sort: Signal<SortSpec>, on_sort: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="table-header">
            {COLUMNS.iter().map(|col| {
                let key = col.key;
                let sortable = col.sortable;
                view! {
                    <div
                        class="header-cell"
                        class:sortable=sortable
                        style:flex=format!("0 0 {}px", col.width)
                        on:click=move |_| {
                            if sortable {
                                on_sort.run(key.as_str());
                            }
                        }
                    >
                        <span class="header-label">{col.label}</span>
                        {sortable.then(|| view! {
                            <span class="sort-icon">
                                {move || sort_indicator(key, &sort.get())}
                            </span>
                        })}
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn TableRow(record: Record, row_height: u32) -> impl IntoView {
    view! {
        <div class="table-row" style:height=format!("{}px", row_height)>
            {COLUMNS.iter().map(|col| view! {
                <div class="table-cell" style:flex=format!("0 0 {}px", col.width)>
                    {record.cell_text(col.key).into_owned()}
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
