//! Customer record and per-field accessors

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::query::SortKey;

/// A single customer row. Records are built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Display-formatted, e.g. "(555) 001-0002"
    pub phone: String,
    /// 0..=9999
    pub score: u32,
    /// Epoch milliseconds
    pub last_message_at: i64,
    pub added_by: String,
}

impl Record {
    /// Three-way comparison on a single field. No tiebreak on other fields.
    pub fn compare_by(&self, other: &Record, key: SortKey) -> Ordering {
        match key {
            SortKey::Id => self.id.cmp(&other.id),
            SortKey::Name => self.name.cmp(&other.name),
            SortKey::Email => self.email.cmp(&other.email),
            SortKey::Phone => self.phone.cmp(&other.phone),
            SortKey::Score => self.score.cmp(&other.score),
            SortKey::LastMessageAt => self.last_message_at.cmp(&other.last_message_at),
            SortKey::AddedBy => self.added_by.cmp(&other.added_by),
        }
    }

    /// Text shown in the table cell for `key`
    pub fn cell_text(&self, key: SortKey) -> Cow<'_, str> {
        match key {
            SortKey::Id => Cow::Owned(self.id.to_string()),
            SortKey::Name => Cow::Borrowed(&self.name),
            SortKey::Email => Cow::Borrowed(&self.email),
            SortKey::Phone => Cow::Borrowed(&self.phone),
            SortKey::Score => Cow::Owned(self.score.to_string()),
            SortKey::LastMessageAt => Cow::Owned(format_timestamp(self.last_message_at, &Local)),
            SortKey::AddedBy => Cow::Borrowed(&self.added_by),
        }
    }
}

/// Format epoch milliseconds as a locale-style date and time ("10/14/2026, 3:04:05 PM").
///
/// Out-of-range timestamps render as an empty string.
pub fn format_timestamp<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => String::new(),
    }
}

/// Keep only ASCII digits, so "(555) 001-0002" becomes "5550010002"
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: u32, score: u32) -> Record {
        Record {
            id,
            name: format!("Customer Name {}", id),
            email: format!("user{}@corp.com", id),
            phone: "(555) 001-0002".to_string(),
            score,
            last_message_at: 0,
            added_by: "Admin".to_string(),
        }
    }

    #[test]
    fn test_compare_by_single_field() {
        let a = record(1, 500);
        let b = record(2, 100);
        assert_eq!(a.compare_by(&b, SortKey::Id), Ordering::Less);
        assert_eq!(a.compare_by(&b, SortKey::Score), Ordering::Greater);
        assert_eq!(a.compare_by(&b, SortKey::AddedBy), Ordering::Equal);
    }

    #[test]
    fn test_digits_only_strips_punctuation() {
        assert_eq!(digits_only("(555) 001-0002"), "5550010002");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_format_timestamp_utc() {
        // 2021-01-01T13:05:09Z
        let text = format_timestamp(1_609_506_309_000, &Utc);
        assert_eq!(text, "1/1/2021, 1:05:09 PM");
    }

    #[test]
    fn test_cell_text_numbers() {
        let r = record(42, 9000);
        assert_eq!(r.cell_text(SortKey::Id), "42");
        assert_eq!(r.cell_text(SortKey::Score), "9000");
        assert_eq!(r.cell_text(SortKey::Phone), "(555) 001-0002");
    }
}
