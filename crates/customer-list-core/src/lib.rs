//! Customer List Core - dataset, query pipeline, viewport windowing and input debouncing
//!
//! Everything here is pure and single-threaded so it can be driven from the
//! Leptos frontend and exercised natively in tests.

pub mod columns;
pub mod config;
pub mod dataset;
pub mod debounce;
pub mod error;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod state;
pub mod window;

pub use columns::{Column, COLUMNS, TOTAL_WIDTH};
pub use config::TableConfig;
pub use dataset::Dataset;
pub use debounce::{Debouncer, Ticket};
pub use error::{ConfigError, QueryError};
pub use pipeline::{derive, DerivedView, DerivedViewCache};
pub use query::{AddedByFilter, DateFilter, QueryState, ScoreFilter, SortDirection, SortKey, SortSpec};
pub use record::Record;
pub use state::{TableEvent, TableState};
pub use window::{window, Window};
