//! Query state driving the derivation pipeline

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

const DAY_MS: i64 = 86_400_000;

/// Score band filter. Bands are contiguous and cover every score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreFilter {
    #[default]
    All,
    /// 0..=2000
    Low,
    /// 2001..=5000
    Mid,
    /// 5001..=8000
    High,
    /// 8001+
    Top,
}

impl ScoreFilter {
    pub fn all() -> &'static [ScoreFilter] {
        &[Self::All, Self::Low, Self::Mid, Self::High, Self::Top]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
            Self::Top => "top",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Low => "0–2000",
            Self::Mid => "2001–5000",
            Self::High => "5001–8000",
            Self::Top => "8001+",
        }
    }

    pub fn matches(&self, score: u32) -> bool {
        match self {
            Self::All => true,
            Self::Low => score <= 2000,
            Self::Mid => score > 2000 && score <= 5000,
            Self::High => score > 5000 && score <= 8000,
            Self::Top => score > 8000,
        }
    }
}

impl FromStr for ScoreFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| QueryError::UnknownScoreFilter(s.to_string()))
    }
}

/// Filter on the age of the last message, relative to an explicit "now"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "24h")]
    Last24h,
    #[serde(rename = "7d")]
    Last7d,
    #[serde(rename = "30d")]
    Last30d,
    #[serde(rename = "older")]
    Older,
}

impl DateFilter {
    pub fn all() -> &'static [DateFilter] {
        &[Self::All, Self::Last24h, Self::Last7d, Self::Last30d, Self::Older]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Last24h => "24h",
            Self::Last7d => "7d",
            Self::Last30d => "30d",
            Self::Older => "older",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Last24h => "Last 24 hours",
            Self::Last7d => "Last 7 days",
            Self::Last30d => "Last 30 days",
            Self::Older => "Older",
        }
    }

    /// Whether the result depends on the current time
    pub fn is_time_dependent(&self) -> bool {
        !matches!(self, Self::All)
    }

    pub fn matches(&self, last_message_at: i64, now_ms: i64) -> bool {
        let age = now_ms.saturating_sub(last_message_at);
        match self {
            Self::All => true,
            Self::Last24h => age <= DAY_MS,
            Self::Last7d => age <= 7 * DAY_MS,
            Self::Last30d => age <= 30 * DAY_MS,
            Self::Older => age > 30 * DAY_MS,
        }
    }
}

impl FromStr for DateFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| QueryError::UnknownDateFilter(s.to_string()))
    }
}

/// Exact match on `added_by`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddedByFilter {
    #[default]
    All,
    Only(String),
}

impl AddedByFilter {
    /// Dropdown value "all" means no filtering; anything else is a literal match.
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(v) => v,
        }
    }

    pub fn matches(&self, added_by: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(v) => v == added_by,
        }
    }
}

/// Sortable record field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Id,
    Name,
    Email,
    Phone,
    Score,
    LastMessageAt,
    AddedBy,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            Self::Id,
            Self::Name,
            Self::Email,
            Self::Phone,
            Self::Score,
            Self::LastMessageAt,
            Self::AddedBy,
        ]
    }

    /// Field name as it appears on the record
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Score => "score",
            Self::LastMessageAt => "lastMessageAt",
            Self::AddedBy => "addedBy",
        }
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            other => Err(QueryError::UnknownSortDirection(other.to_string())),
        }
    }
}

/// Single-key sort configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click: same key flips direction, a new key starts ascending
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.toggled())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }
}

/// Everything the pipeline needs besides the dataset and the clock
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryState {
    pub search_term: String,
    pub score_filter: ScoreFilter,
    pub date_filter: DateFilter,
    pub added_by_filter: AddedByFilter,
    pub sort: SortSpec,
}

impl QueryState {
    /// Trimmed, lower-cased search needle, or None when search is inactive
    pub fn normalized_search(&self) -> Option<(String, &str)> {
        let raw = self.search_term.trim();
        if raw.is_empty() {
            None
        } else {
            Some((raw.to_lowercase(), raw))
        }
    }
}

/// Parse a UI-supplied value, degrading unknown input to the type's default.
pub fn parse_or_default<T>(value: &str) -> T
where
    T: FromStr<Err = QueryError> + Default,
{
    match value.parse::<T>() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("{}, falling back to default", e);
            T::default()
        }
    }
}
