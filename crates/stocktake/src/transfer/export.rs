//! Table export to comma-delimited text.

use chrono::{DateTime, Local};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::statement;
use crate::store::Store;

/// An exported table: suggested filename plus UTF-8 CSV bytes.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl CsvExport {
    /// The CSV as text. Export only ever writes UTF-8.
    pub fn as_text(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// `<table>_<YYYYMMDD_HHMMSS>.csv`, local time at the export moment.
pub fn export_filename(table: &str, at: DateTime<Local>) -> String {
    format!("{}_{}.csv", table, at.format("%Y%m%d_%H%M%S"))
}

/// Serialize a whole table: header row of column names, then one row
/// per record with values in their natural textual form (dates as
/// ISO-8601, numerics as decimal text, nulls empty).
pub fn export(store: &dyn Store, table: &str) -> Result<CsvExport> {
    let descriptor = Catalog::describe(store, table)?;
    let stmt = statement::select_all(&descriptor.name);
    let rows = store.query(&stmt.sql, &stmt.params)?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(descriptor.column_names())?;
    for row in rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| crate::error::StocktakeError::Read(e.to_string()))?;

    Ok(CsvExport {
        filename: export_filename(table, Local::now()),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::value::Value;
    use chrono::TimeZone;

    #[test]
    fn test_filename_convention() {
        let at = Local.with_ymd_and_hms(2024, 3, 15, 9, 5, 7).unwrap();
        assert_eq!(export_filename("Product", at), "Product_20240315_090507.csv");
    }

    #[test]
    fn test_export_header_and_rows() {
        let store = MemoryStore::with_retail_schema();
        store
            .execute(
                "INSERT INTO Product (name, category, cost_price, current_stock) VALUES (?, ?, ?, ?)",
                &[
                    Value::from("Widget"),
                    Value::from("Tools"),
                    Value::Float(9.99),
                    Value::Integer(100),
                ],
            )
            .unwrap();

        let export = export(&store, "Product").unwrap();
        let text = export.as_text();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "product_id,name,category,cost_price,current_stock"
        );
        assert_eq!(lines.next().unwrap(), "1,Widget,Tools,9.99,100");
        assert!(export.filename.starts_with("Product_"));
        assert!(export.filename.ends_with(".csv"));
    }

    #[test]
    fn test_export_empty_table_is_header_only() {
        let store = MemoryStore::with_retail_schema();
        let export = export(&store, "Sales").unwrap();
        assert_eq!(export.as_text().lines().count(), 1);
    }
}
