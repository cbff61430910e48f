//! Column definitions shared by the header and row renderers

use crate::query::{SortDirection, SortKey, SortSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: SortKey,
    pub label: &'static str,
    /// Fixed width in px
    pub width: u32,
    pub sortable: bool,
}

pub const COLUMNS: [Column; 7] = [
    Column { key: SortKey::Id, label: "ID", width: 60, sortable: true },
    Column { key: SortKey::Name, label: "Name", width: 200, sortable: true },
    Column { key: SortKey::Email, label: "Email", width: 250, sortable: true },
    Column { key: SortKey::Phone, label: "Phone", width: 180, sortable: true },
    Column { key: SortKey::Score, label: "Score", width: 80, sortable: true },
    Column { key: SortKey::LastMessageAt, label: "Last Message", width: 180, sortable: true },
    Column { key: SortKey::AddedBy, label: "Added By", width: 120, sortable: true },
];

pub const TOTAL_WIDTH: u32 = {
    let mut total = 0;
    let mut i = 0;
    while i < COLUMNS.len() {
        total += COLUMNS[i].width;
        i += 1;
    }
    total
};

/// Header glyph: neutral for inactive columns, arrow for the sorted one
pub fn sort_indicator(key: SortKey, sort: &SortSpec) -> &'static str {
    if sort.key != key {
        return "↕";
    }
    match sort.direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

/// Thousands-separated count, e.g. "1,000,000"
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_width() {
        assert_eq!(TOTAL_WIDTH, 1070);
    }

    #[test]
    fn test_sort_indicator() {
        let sort = SortSpec::new(SortKey::Score, SortDirection::Descending);
        assert_eq!(sort_indicator(SortKey::Score, &sort), "▼");
        assert_eq!(sort_indicator(SortKey::Id, &sort), "↕");
        assert_eq!(sort_indicator(SortKey::Id, &SortSpec::default()), "▲");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(12_345_67), "1,234,567");
    }
}
