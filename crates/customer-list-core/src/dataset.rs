//! In-memory dataset and synthetic customer generation
//!
//! A `Dataset` is immutable once built. Cloning it shares the underlying rows,
//! so memoized views can compare datasets by identity.

use std::sync::Arc;

use crate::record::{digits_only, Record};

/// Largest dataset the UI is expected to handle
pub const MAX_RECORDS: usize = 1_000_000;

/// Spread of generated `last_message_at` values behind "now"
const MESSAGE_AGE_SPAN_MS: u64 = 10_000_000_000;

/// Per-row search fields, precomputed once so searches never allocate per row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKeys {
    pub name_lower: String,
    pub email_lower: String,
    pub phone_digits: String,
}

impl SearchKeys {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name_lower: record.name.to_lowercase(),
            email_lower: record.email.to_lowercase(),
            phone_digits: digits_only(&record.phone),
        }
    }

    /// `needle_lower` is matched against name and email, `needle_raw` against phone digits
    pub fn matches(&self, needle_lower: &str, needle_raw: &str) -> bool {
        self.name_lower.contains(needle_lower)
            || self.email_lower.contains(needle_lower)
            || self.phone_digits.contains(needle_raw)
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Record]>,
    keys: Arc<[SearchKeys]>,
    added_by: Arc<[String]>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let keys: Vec<SearchKeys> = records.iter().map(SearchKeys::from_record).collect();

        // Small cardinality; first-seen order is what the dropdown shows
        let mut added_by: Vec<String> = Vec::new();
        for r in &records {
            if !added_by.iter().any(|v| v == &r.added_by) {
                added_by.push(r.added_by.clone());
            }
        }

        Self {
            records: records.into(),
            keys: keys.into(),
            added_by: added_by.into(),
        }
    }

    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn search_keys(&self) -> &[SearchKeys] {
        &self.keys
    }

    /// Distinct `added_by` values in first-seen order
    pub fn added_by_values(&self) -> &[String] {
        &self.added_by
    }

    /// Identity comparison: true when both handles share the same rows
    pub fn ptr_eq(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Seeded xorshift64, enough for fixture data
struct Xorshift64(u64);

impl Xorshift64 {
    fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift
        Self(seed.wrapping_add(0x9E37_79B9_7F4A_7C15) | 1)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn phone_for(i: usize) -> String {
    let padded = format!("{:04}", i);
    let last4 = &padded[padded.len() - 4..];
    format!("(555) {:03}-{}", i, last4)
}

/// Generate `count` synthetic customers.
///
/// Deterministic for a given `seed`; only `score` and `last_message_at` are
/// pseudo-random, with messages spread over the 10^10 ms before `now_ms`.
pub fn generate(count: usize, seed: u64, now_ms: i64) -> Dataset {
    tracing::debug!("Generating {} records...", count);
    let mut rng = Xorshift64::new(seed);
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        let n = i + 1;
        let score = (rng.next_u64() % 10_000) as u32;
        let age = (rng.next_u64() % MESSAGE_AGE_SPAN_MS) as i64;
        records.push(Record {
            id: n as u32,
            name: format!("Customer Name {}", n),
            email: format!("user{}@corp.com", n),
            phone: phone_for(i),
            score,
            last_message_at: now_ms - age,
            added_by: if i % 2 == 0 { "Admin" } else { "Guest" }.to_string(),
        });
    }

    tracing::debug!("Data generation complete.");
    Dataset::from_records(records)
}
