use leptos::prelude::*;
use gloo_timers::callback::{Interval, Timeout};
use web_sys::console;
use customer_list_core::columns::format_count;
use customer_list_core::dataset::generate;
use customer_list_core::{derive, Dataset, DerivedViewCache, TableEvent, TableState};
use crate::components::{CustomerTable, Toolbar};
use crate::config::load_config;
use crate::hooks::use_debounced;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let record_count = config.record_count;

    // Dataset, generated once after the loading message has painted
    let (dataset, set_dataset) = signal(Dataset::empty());
    let (loading, set_loading) = signal(true);
    // Query and scroll state; every change goes through `dispatch`
    let state = RwSignal::new(TableState::new(config.viewport_height, config.row_height));
    // Raw search text, and the debounced value that reaches the pipeline
    let (search_input, set_search_input) = signal(String::new());
    let search_term = use_debounced(search_input, config.debounce_ms);
    // "Now" for the date filter, refreshed on a coarse timer
    let (now, set_now) = signal(js_sys::Date::now() as i64);

    let clock = StoredValue::new_local(Some(Interval::new(config.clock_refresh_ms, move || {
        set_now.set(js_sys::Date::now() as i64);
    })));
    on_cleanup(move || {
        clock.try_update_value(|c| c.take());
    });

    let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    Timeout::new(0, move || {
        let started = js_sys::Date::now();
        let data = generate(record_count, seed, js_sys::Date::now() as i64);
        console::log_1(&format!(
            "Generated {} records in {:.0} ms",
            data.len(),
            js_sys::Date::now() - started
        ).into());
        set_dataset.set(data);
        set_loading.set(false);
    }).forget();

    let query = Memo::new(move |_| state.with(|s| s.query.clone()));
    let scroll_offset = Memo::new(move |_| state.with(|s| s.scroll_offset));
    let sort = Signal::derive(move || query.with(|q| q.sort));
    let added_by_values = Signal::derive(move || dataset.with(|d| d.added_by_values().to_vec()));

    let cache = StoredValue::new(DerivedViewCache::new());
    let derived = Memo::new(move |_| {
        let data = dataset.get();
        let q = query.get();
        // Only subscribe to the clock while it affects the result
        let now_ms = if q.date_filter.is_time_dependent() {
            now.get()
        } else {
            now.get_untracked()
        };

        let started = js_sys::Date::now();
        let view = cache
            .try_update_value(|c| c.get_or_derive(&data, &q, now_ms))
            .unwrap_or_else(|| derive(&data, &q, now_ms));
        console::log_1(&format!(
            "Derived {} of {} rows in {:.0} ms",
            view.len(),
            data.len(),
            js_sys::Date::now() - started
        ).into());
        view
    });

    let dispatch = Callback::new(move |event: TableEvent| {
        let total = derived.with_untracked(|v| v.len());
        state.update(|s| *s = s.apply(event, total));
    });

    Effect::new(move || {
        let term = search_term.get();
        dispatch.run(TableEvent::SearchSettled(term));
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=move || view! {
                <div class="app-container">
                    <h2>{format!("Loading {} records...", format_count(record_count))}</h2>
                </div>
            }
        >
            <div class="app-container">
                <h1>{move || format!("Customer List ({})", format_count(derived.with(|v| v.len())))}</h1>
                <Toolbar
                    search_input=search_input
                    set_search_input=set_search_input
                    query=query
                    added_by_values=added_by_values
                    on_event=dispatch
                />
                <CustomerTable
                    derived=derived
                    sort=sort
                    scroll_offset=scroll_offset
                    config=config.clone()
                    on_event=dispatch
                />
                <footer class="build-info">
                    {format!("build {} · {}", env!("BUILD_HASH"), env!("BUILD_TIMESTAMP"))}
                </footer>
            </div>
        </Show>
    }
}
