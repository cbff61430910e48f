use leptos::prelude::*;
use customer_list_core::{QueryState, TableEvent};
use crate::components::FiltersDropdown;

#[component]
pub fn Toolbar(
    search_input: ReadSignal<String>,
    set_search_input: WriteSignal<String>,
    query: Memo<QueryState>,
    added_by_values: Signal<Vec<String>>,
    on_event: Callback<TableEvent>,
) -> impl IntoView {
    view! {
        <div class="controls">
            <div class="search-box">
                <input
                    class="search-input"
                    type="text"
                    placeholder="Search customers..."
                    prop:value=move || search_input.get()
                    on:input=move |ev| {
                        set_search_input.set(event_target_value(&ev));
                    }
                />
                <Show when=move || !search_input.get().is_empty()>
                    <button
                        class="search-clear"
                        on:click=move |_| set_search_input.set(String::new())
                        title="Clear search"
                    >
                        "×"
                    </button>
                </Show>
            </div>
            <FiltersDropdown
                query=query
                added_by_values=added_by_values
                on_event=on_event
            />
        </div>
    }
}
