mod customer_table;
mod filters_dropdown;
mod toolbar;

pub use customer_table::CustomerTable;
pub use filters_dropdown::FiltersDropdown;
pub use toolbar::Toolbar;
