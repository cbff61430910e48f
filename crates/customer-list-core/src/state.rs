//! Table state and the single transition entry point
//!
//! Every UI event becomes a `TableEvent` and goes through `TableState::apply`,
//! which returns the next state. Any change to a pipeline input resets the
//! scroll position to the top.

use serde::{Deserialize, Serialize};

use crate::query::{parse_or_default, AddedByFilter, DateFilter, QueryState, ScoreFilter, SortKey};
use crate::window::clamp_scroll;

#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Debounced search text
    SearchSettled(String),
    ScoreFilterChanged(ScoreFilter),
    DateFilterChanged(DateFilter),
    AddedByChanged(AddedByFilter),
    /// Header click; toggles direction on the current key
    SortRequested(SortKey),
    Scrolled(f64),
}

impl TableEvent {
    /// From a score dropdown value. Unknown values mean "all".
    pub fn score_filter(value: &str) -> Self {
        Self::ScoreFilterChanged(parse_or_default(value))
    }

    /// From a date dropdown value. Unknown values mean "all".
    pub fn date_filter(value: &str) -> Self {
        Self::DateFilterChanged(parse_or_default(value))
    }

    pub fn added_by(value: &str) -> Self {
        Self::AddedByChanged(AddedByFilter::from_value(value))
    }

    /// From a column key. Unknown keys produce no event, leaving order as is.
    pub fn sort_requested(key: &str) -> Option<Self> {
        match key.parse::<SortKey>() {
            Ok(key) => Some(Self::SortRequested(key)),
            Err(e) => {
                tracing::warn!("ignoring sort request: {}", e);
                None
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SearchSettled(_) => "search",
            Self::ScoreFilterChanged(_) => "score_filter",
            Self::DateFilterChanged(_) => "date_filter",
            Self::AddedByChanged(_) => "added_by",
            Self::SortRequested(_) => "sort",
            Self::Scrolled(_) => "scroll",
        }
    }
}

/// Query plus viewport state. Replaced wholesale on every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    pub query: QueryState,
    pub scroll_offset: f64,
    pub viewport_height: u32,
    pub row_height: u32,
}

impl TableState {
    pub fn new(viewport_height: u32, row_height: u32) -> Self {
        Self {
            query: QueryState::default(),
            scroll_offset: 0.0,
            viewport_height,
            row_height,
        }
    }

    /// Next state after `event`. `total_rows` is the current derived view length,
    /// used to clamp scroll events.
    pub fn apply(&self, event: TableEvent, total_rows: usize) -> TableState {
        let mut query = self.query.clone();
        match event {
            TableEvent::Scrolled(offset) => {
                let scroll_offset = clamp_scroll(offset, total_rows, self.viewport_height, self.row_height);
                return TableState {
                    scroll_offset,
                    ..self.clone()
                };
            }
            TableEvent::SearchSettled(term) => query.search_term = term,
            TableEvent::ScoreFilterChanged(f) => query.score_filter = f,
            TableEvent::DateFilterChanged(f) => query.date_filter = f,
            TableEvent::AddedByChanged(f) => query.added_by_filter = f,
            TableEvent::SortRequested(key) => query.sort = query.sort.toggle(key),
        }

        if query == self.query {
            return self.clone();
        }

        TableState {
            query,
            scroll_offset: 0.0,
            ..self.clone()
        }
    }
}
