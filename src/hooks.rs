//! Reactive hooks

use customer_list_core::Debouncer;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Debounce a signal: the returned signal takes the latest value once `source`
/// has been quiet for `delay_ms`. Intermediate values are dropped. The pending
/// timer is cancelled when superseded and when the owner is cleaned up.
pub fn use_debounced<T>(source: ReadSignal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let initial = source.get_untracked();
    let (settled, set_settled) = signal(initial.clone());
    let debouncer = StoredValue::new_local(Debouncer::new(initial, delay_ms as u64));
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move || {
        let value = source.get();
        let unchanged = debouncer
            .try_with_value(|d| !d.is_pending() && *d.value() == value)
            .unwrap_or(true);
        if unchanged {
            return;
        }

        let Some(ticket) = debouncer.try_update_value(|d| d.push(value, now_ms())) else {
            return;
        };
        let timeout = Timeout::new(delay_ms, move || {
            let fired = debouncer
                .try_update_value(|d| d.fire(ticket).cloned())
                .flatten();
            if let Some(value) = fired {
                set_settled.try_set(value);
            }
        });
        // Replacing the handle drops, and so cancels, the superseded timer
        timer.try_set_value(Some(timeout));
    });

    on_cleanup(move || {
        timer.try_update_value(|t| t.take());
        debouncer.try_update_value(|d| d.cancel());
    });

    settled
}
