pub mod dashboard;
pub mod ports_table;
