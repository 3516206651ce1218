pub mod bar_chart_entry;
pub mod category_count;
pub mod combined_data;
pub mod statistics;
pub mod transaction;
