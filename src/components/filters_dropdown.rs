//! Filter panel: score band, message age and added-by

use leptos::prelude::*;
use customer_list_core::{DateFilter, QueryState, ScoreFilter, TableEvent};

#[component]
pub fn FiltersDropdown(
    query: Memo<QueryState>,
    /// Distinct added-by values in dataset order
    added_by_values: Signal<Vec<String>>,
    on_event: Callback<TableEvent>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="filter-dropdown">
            <button
                class="filter-button"
                class:active=move || open.get()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "Filters"
            </button>

            <Show when=move || open.get()>
                <div class="filter-panel">
                    <h4>"Score Range"</h4>
                    <select
                        prop:value=move || query.with(|q| q.score_filter.as_str())
                        on:change=move |ev| {
                            on_event.run(TableEvent::score_filter(&event_target_value(&ev)));
                        }
                    >
                        {ScoreFilter::all().iter().map(|f| view! {
                            <option value=f.as_str()>{f.label()}</option>
                        }).collect::<Vec<_>>()}
                    </select>

                    <h4>"Last Message"</h4>
                    <select
                        prop:value=move || query.with(|q| q.date_filter.as_str())
                        on:change=move |ev| {
                            on_event.run(TableEvent::date_filter(&event_target_value(&ev)));
                        }
                    >
                        {DateFilter::all().iter().map(|f| view! {
                            <option value=f.as_str()>{f.label()}</option>
                        }).collect::<Vec<_>>()}
                    </select>

                    <h4>"Added By"</h4>
                    <select
                        prop:value=move || query.with(|q| q.added_by_filter.as_value().to_string())
                        on:change=move |ev| {
                            on_event.run(TableEvent::added_by(&event_target_value(&ev)));
                        }
                    >
                        <option value="all">"All"</option>
                        <For
                            each=move || added_by_values.get()
                            key=|v| v.clone()
                            children=move |v| {
                                let label = v.clone();
                                view! { <option value=v>{label}</option> }
                            }
                        />
                    </select>
                </div>
            </Show>
        </div>
    }
}
