//! Page-level configuration from the URL query string

use anyhow::{anyhow, Context, Result};
use customer_list_core::TableConfig;
use web_sys::console;

fn from_location() -> Result<TableConfig> {
    let window = web_sys::window().context("no window")?;
    let search = window
        .location()
        .search()
        .map_err(|e| anyhow!("location.search unavailable: {:?}", e))?;
    let config = TableConfig::default()
        .with_query_overrides(&search)
        .with_context(|| format!("bad query string {:?}", search))?;
    Ok(config)
}

/// Defaults, overridden by `?rows=..&debounce=..&seed=..` when present
pub fn load_config() -> TableConfig {
    match from_location() {
        Ok(config) => config,
        Err(e) => {
            console::warn_1(&format!("Using default config: {:#}", e).into());
            TableConfig::default()
        }
    }
}
