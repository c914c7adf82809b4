// Adapters layer: concrete implementations for external systems (files, CSV, report archive).

pub mod csv_table;
pub mod report;
pub mod storage;
