//! End-to-end flows through dataset, reducer, cached pipeline and windowing.

use customer_list_core::query::{ScoreFilter, SortDirection, SortKey, SortSpec};
use customer_list_core::{
    derive, window, Dataset, Debouncer, DerivedViewCache, QueryState, Record, TableConfig,
    TableEvent, TableState,
};

const NOW: i64 = 1_700_000_000_000;

fn with_scores(scores: &[u32]) -> Dataset {
    Dataset::from_records(
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| Record {
                id: i as u32 + 1,
                name: format!("Customer Name {}", i + 1),
                email: format!("user{}@corp.com", i + 1),
                phone: "(555) 000-0000".to_string(),
                score,
                last_message_at: NOW,
                added_by: "Admin".to_string(),
            })
            .collect(),
    )
}

fn scores(ds: &Dataset, query: &QueryState) -> Vec<u32> {
    derive(ds, query, NOW).iter().map(|r| r.score).collect()
}

#[test]
fn test_three_record_scenario() {
    let ds = with_scores(&[100, 3000, 9000]);

    let mid = QueryState {
        score_filter: ScoreFilter::Mid,
        ..Default::default()
    };
    assert_eq!(scores(&ds, &mid), vec![3000]);

    let by_score = QueryState {
        sort: SortSpec::new(SortKey::Score, SortDirection::Descending),
        ..Default::default()
    };
    assert_eq!(scores(&ds, &by_score), vec![9000, 3000, 100]);
}

#[test]
fn test_debounced_search_drives_one_recompute() {
    let ds = customer_list_core::dataset::generate(2_000, 3, NOW);
    let config = TableConfig::default();
    let mut state = TableState::new(config.viewport_height, config.row_height);
    let mut cache = DerivedViewCache::new();
    let mut debouncer = Debouncer::new(String::new(), config.debounce_ms as u64);

    let view = cache.get_or_derive(&ds, &state.query, NOW);
    state = state.apply(TableEvent::Scrolled(4_800.0), view.len());
    assert_eq!(state.scroll_offset, 4_800.0);

    let mut t = 0;
    for term in ["n", "na", "name 19"] {
        debouncer.push(term.to_string(), t);
        t += 60;
        // Timer has not elapsed between keystrokes
        assert!(debouncer.poll(t).is_none());
        let view = cache.get_or_derive(&ds, &state.query, NOW);
        assert_eq!(view.len(), 2_000);
    }
    assert_eq!(cache.recomputes(), 1);

    let settled = debouncer
        .poll(t + config.debounce_ms as u64)
        .cloned()
        .expect("search settles");
    assert_eq!(settled, "name 19");

    state = state.apply(TableEvent::SearchSettled(settled), 2_000);
    assert_eq!(state.scroll_offset, 0.0);

    let view = cache.get_or_derive(&ds, &state.query, NOW);
    assert_eq!(cache.recomputes(), 2);
    // "customer name 19", "190".."199", "1900".."1999"
    assert_eq!(view.len(), 1 + 10 + 100);

    let w = window(view.len(), state.scroll_offset, config.viewport_height, config.row_height, config.buffer);
    assert_eq!(w.range(), 0..35);
    let first: Vec<u32> = view.slice(w.range()).map(|(_, r)| r.id).take(3).collect();
    assert_eq!(first, vec![19, 190, 191]);
}

#[test]
fn test_filter_shrink_resets_scroll_into_range() {
    let ds = customer_list_core::dataset::generate(10_000, 11, NOW);
    let mut state = TableState::new(700, 48);
    let total = derive(&ds, &state.query, NOW).len();
    state = state.apply(TableEvent::Scrolled(400_000.0), total);
    assert!(state.scroll_offset > 0.0);

    state = state.apply(TableEvent::added_by("Guest"), total);
    assert_eq!(state.scroll_offset, 0.0);

    let view = derive(&ds, &state.query, NOW);
    assert_eq!(view.len(), 5_000);
    assert!(view.iter().all(|r| r.added_by == "Guest"));

    let w = window(view.len(), state.scroll_offset, 700, 48, 10);
    assert_eq!(w.start_index, 0);
    assert_eq!(w.total_height_px(48), 5_000 * 48);
}

#[test]
fn test_unknown_dropdown_value_excludes_nothing() {
    let ds = with_scores(&[10, 2500, 6000, 9999]);
    let state = TableState::new(700, 48).apply(TableEvent::score_filter("enormous"), 4);
    assert_eq!(scores(&ds, &state.query).len(), 4);
}
