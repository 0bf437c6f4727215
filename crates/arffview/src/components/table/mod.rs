//! Dataset view: StatsStrip, DataTable, PaginationBar

mod data_table;
mod pagination_bar;
mod stats_strip;

pub use data_table::DataTable;
pub use pagination_bar::PaginationBar;
pub use stats_strip::StatsStrip;
