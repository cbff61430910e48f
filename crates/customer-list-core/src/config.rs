//! Table configuration
//!
//! Geometry and timing constants live here. `row_height`, `viewport_height` and
//! `buffer` are fixed by the layout; dataset size, debounce delay and seed can be
//! overridden from the page URL (`?rows=5000&debounce=100&seed=7`).

use serde::{Deserialize, Serialize};

use crate::dataset::MAX_RECORDS;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    pub row_height: u32,
    pub viewport_height: u32,
    /// Overscan rows rendered beyond each viewport edge
    pub buffer: usize,
    pub debounce_ms: u32,
    pub record_count: usize,
    /// How often the date filter's notion of "now" is refreshed
    pub clock_refresh_ms: u32,
    /// Generator seed; None means seed from the clock
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_height: 48,
            viewport_height: 700,
            buffer: 10,
            debounce_ms: 250,
            record_count: MAX_RECORDS,
            clock_refresh_ms: 60_000,
            seed: None,
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_height == 0 {
            return Err(ConfigError::Zero { key: "row_height" });
        }
        if self.viewport_height == 0 {
            return Err(ConfigError::Zero { key: "viewport_height" });
        }
        Ok(())
    }

    /// Apply overrides from a URL query string (with or without the leading '?').
    ///
    /// Unknown keys are ignored. `rows` is capped at `MAX_RECORDS`.
    pub fn with_query_overrides(mut self, query: &str) -> Result<Self, ConfigError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(raw_key).map_err(|e| ConfigError::Decode(e.to_string()))?;
            let value = urlencoding::decode(raw_value).map_err(|e| ConfigError::Decode(e.to_string()))?;

            match &*key {
                "rows" => {
                    let rows: usize = parse_value("rows", &value)?;
                    if rows > MAX_RECORDS {
                        tracing::warn!("rows={} exceeds {}, capping", rows, MAX_RECORDS);
                    }
                    self.record_count = rows.min(MAX_RECORDS);
                }
                "debounce" => self.debounce_ms = parse_value("debounce", &value)?,
                "seed" => self.seed = Some(parse_value("seed", &value)?),
                other => tracing::debug!("ignoring unknown config key {:?}", other),
            }
        }
        self.validate()?;
        Ok(self)
    }
}
