//! Bulk transfer: whole-table CSV export and import.

mod export;
mod import;

pub use export::{CsvExport, export, export_filename};
pub use import::{ImportReport, import};
