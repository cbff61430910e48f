//! Search, filter and sort pipeline
//!
//! `derive` is a pure function of (dataset, query, now). The result is a
//! `DerivedView`: the dataset handle plus row positions in display order. A
//! new view is built on every change; views are never edited in place.

use std::ops::Range;
use std::sync::Arc;

use crate::dataset::Dataset;
use crate::query::{AddedByFilter, QueryState, ScoreFilter, SortDirection};
use crate::record::Record;

/// Filtered, sorted projection of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    dataset: Dataset,
    rows: Arc<[u32]>,
}

impl DerivedView {
    /// The whole dataset in its original order
    pub fn identity(dataset: &Dataset) -> Self {
        Self {
            dataset: dataset.clone(),
            rows: (0..dataset.len() as u32).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.rows
            .get(index)
            .map(|&row| &self.dataset.records()[row as usize])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.rows
            .iter()
            .map(move |&row| &self.dataset.records()[row as usize])
    }

    /// Records in `range`, clamped to the view bounds
    pub fn slice(&self, range: Range<usize>) -> impl Iterator<Item = (usize, &Record)> + '_ {
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        (start..end).map(move |i| (i, &self.dataset.records()[self.rows[i] as usize]))
    }

    /// Materialize the view as a standalone dataset
    pub fn to_dataset(&self) -> Dataset {
        Dataset::from_records(self.iter().cloned().collect())
    }
}

/// Apply search, score, date and added-by filters, then a stable single-key sort.
pub fn derive(dataset: &Dataset, query: &QueryState, now_ms: i64) -> DerivedView {
    let records = dataset.records();
    let keys = dataset.search_keys();
    let mut rows: Vec<u32> = (0..records.len() as u32).collect();

    if let Some((needle_lower, needle_raw)) = query.normalized_search() {
        rows.retain(|&row| keys[row as usize].matches(&needle_lower, needle_raw));
        tracing::debug!("search {:?}: {} rows", needle_raw, rows.len());
    }

    let score = query.score_filter;
    if score != ScoreFilter::All {
        rows.retain(|&row| score.matches(records[row as usize].score));
    }

    let date = query.date_filter;
    if date.is_time_dependent() {
        rows.retain(|&row| date.matches(records[row as usize].last_message_at, now_ms));
    }

    if let AddedByFilter::Only(added_by) = &query.added_by_filter {
        rows.retain(|&row| records[row as usize].added_by == *added_by);
    }

    // sort_by is stable, so equal keys keep dataset order
    let spec = query.sort;
    rows.sort_by(|&a, &b| {
        let ord = records[a as usize].compare_by(&records[b as usize], spec.key);
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    tracing::debug!(
        "derived {} of {} rows (sort {} {:?})",
        rows.len(),
        records.len(),
        spec.key,
        spec.direction
    );

    DerivedView {
        dataset: dataset.clone(),
        rows: rows.into(),
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CacheKey {
    dataset: Dataset,
    query: QueryState,
    /// Only tracked while a date filter is active
    now_ms: Option<i64>,
}

/// Memoizes `derive` on dataset identity, each query field, and the clock
/// when it matters.
#[derive(Debug, Default)]
pub struct DerivedViewCache {
    entry: Option<(CacheKey, DerivedView)>,
    recomputes: u64,
}

impl DerivedViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_derive(&mut self, dataset: &Dataset, query: &QueryState, now_ms: i64) -> DerivedView {
        let key = CacheKey {
            dataset: dataset.clone(),
            query: query.clone(),
            now_ms: query.date_filter.is_time_dependent().then_some(now_ms),
        };

        if let Some((cached_key, view)) = &self.entry {
            if *cached_key == key {
                return view.clone();
            }
        }

        let view = derive(dataset, query, now_ms);
        self.recomputes += 1;
        self.entry = Some((key, view.clone()));
        view
    }

    /// Number of times the pipeline actually ran
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{DateFilter, SortKey, SortSpec};

    const DAY: i64 = 86_400_000;
    const NOW: i64 = 1_000 * DAY;

    fn rec(id: u32, score: u32, age_days: i64, added_by: &str) -> Record {
        Record {
            id,
            name: format!("Customer Name {}", id),
            email: format!("user{}@corp.com", id),
            phone: format!("(555) {:03}-{:04}", id, id),
            score,
            last_message_at: NOW - age_days * DAY,
            added_by: added_by.to_string(),
        }
    }

    fn ids(view: &DerivedView) -> Vec<u32> {
        view.iter().map(|r| r.id).collect()
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            rec(1, 100, 0, "Admin"),
            rec(2, 3000, 3, "Guest"),
            rec(3, 9000, 20, "Admin"),
            rec(4, 6000, 45, "Guest"),
            rec(5, 3000, 1, "Admin"),
        ])
    }

    #[test]
    fn test_default_query_is_identity() {
        let ds = sample();
        let view = derive(&ds, &QueryState::default(), NOW);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
        assert_eq!(view, DerivedView::identity(&ds));
    }

    #[test]
    fn test_search_phone_ignores_punctuation() {
        let ds = Dataset::from_records(vec![Record {
            phone: "(555) 001-0002".to_string(),
            ..rec(9, 0, 0, "Admin")
        }]);
        let mut q = QueryState {
            search_term: "0010002".to_string(),
            ..Default::default()
        };
        assert_eq!(derive(&ds, &q, NOW).len(), 1);

        q.search_term = "abc".to_string();
        assert!(derive(&ds, &q, NOW).is_empty());
    }

    #[test]
    fn test_search_case_insensitive_name_and_email() {
        let ds = sample();
        let q = QueryState {
            search_term: "  CUSTOMER NAME 3 ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&derive(&ds, &q, NOW)), vec![3]);

        let q = QueryState {
            search_term: "USER4@".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&derive(&ds, &q, NOW)), vec![4]);
    }

    #[test]
    fn test_whitespace_search_is_inactive() {
        let ds = sample();
        let q = QueryState {
            search_term: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(derive(&ds, &q, NOW).len(), 5);
    }

    #[test]
    fn test_filters_combine() {
        let ds = sample();
        let q = QueryState {
            score_filter: ScoreFilter::Mid,
            date_filter: DateFilter::Last7d,
            added_by_filter: AddedByFilter::Only("Admin".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&derive(&ds, &q, NOW)), vec![5]);
    }

    #[test]
    fn test_date_filter_older() {
        let ds = sample();
        let q = QueryState {
            date_filter: DateFilter::Older,
            ..Default::default()
        };
        assert_eq!(ids(&derive(&ds, &q, NOW)), vec![4]);
    }

    #[test]
    fn test_unmatched_added_by_yields_empty() {
        let ds = sample();
        let q = QueryState {
            added_by_filter: AddedByFilter::Only("Nobody".to_string()),
            ..Default::default()
        };
        assert!(derive(&ds, &q, NOW).is_empty());
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let ds = sample();
        let q = QueryState {
            sort: SortSpec::new(SortKey::Score, SortDirection::Descending),
            ..Default::default()
        };
        // 2 and 5 tie on 3000 and keep dataset order
        assert_eq!(ids(&derive(&ds, &q, NOW)), vec![3, 4, 2, 5, 1]);
    }

    #[test]
    fn test_sort_by_added_by_keeps_ties_in_order() {
        let ds = sample();
        let q = QueryState {
            sort: SortSpec::new(SortKey::AddedBy, SortDirection::Ascending),
            ..Default::default()
        };
        assert_eq!(ids(&derive(&ds, &q, NOW)), vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn test_slice_clamps() {
        let ds = sample();
        let view = derive(&ds, &QueryState::default(), NOW);
        let got: Vec<usize> = view.slice(3..50).map(|(i, _)| i).collect();
        assert_eq!(got, vec![3, 4]);
        assert_eq!(view.slice(9..12).count(), 0);
        assert_eq!(view.get(4).map(|r| r.id), Some(5));
        assert!(view.get(5).is_none());
    }

    #[test]
    fn test_cache_skips_unchanged_inputs() {
        let ds = sample();
        let mut cache = DerivedViewCache::new();
        let q = QueryState::default();

        cache.get_or_derive(&ds, &q, NOW);
        cache.get_or_derive(&ds, &q, NOW + 1);
        assert_eq!(cache.recomputes(), 1, "clock is ignored without a date filter");

        let dated = QueryState {
            date_filter: DateFilter::Last24h,
            ..Default::default()
        };
        cache.get_or_derive(&ds, &dated, NOW);
        cache.get_or_derive(&ds, &dated, NOW);
        assert_eq!(cache.recomputes(), 2);
        cache.get_or_derive(&ds, &dated, NOW + 1);
        assert_eq!(cache.recomputes(), 3);
    }

    #[test]
    fn test_cache_tracks_dataset_identity() {
        let records = sample().records().to_vec();
        let a = Dataset::from_records(records.clone());
        let b = Dataset::from_records(records);
        let mut cache = DerivedViewCache::new();
        let q = QueryState::default();

        cache.get_or_derive(&a, &q, NOW);
        cache.get_or_derive(&a.clone(), &q, NOW);
        assert_eq!(cache.recomputes(), 1);
        cache.get_or_derive(&b, &q, NOW);
        assert_eq!(cache.recomputes(), 2);
    }
}
