//! CSV import as a bulk append.

use std::io::Read;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::catalog::Catalog;
use crate::error::{Result, StocktakeError};
use crate::store::Store;
use crate::value::{Record, Value};

/// What an import did, for display at the boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub table: String,
    pub rows_appended: u64,
    /// SHA-256 of the raw stream, for provenance.
    pub sha256: String,
}

/// Parse a comma-delimited UTF-8 stream (header row required) and
/// append every row to `table` through the store's bulk path.
///
/// Cells are typed the same way form input is ([`Value::parse`]).
/// There is no per-row validation and no atomicity: a stream the store
/// rejects partway may leave a partial prefix written.
pub fn import(store: &dyn Store, table: &str, mut reader: impl Read) -> Result<ImportReport> {
    Catalog::ensure_known(table)?;

    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| StocktakeError::Import(format!("unreadable stream: {e}")))?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let sha256 = format!("sha256:{:x}", hasher.finalize());

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| StocktakeError::Import(format!("malformed header: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() {
        return Err(StocktakeError::Import("empty header row".to_string()));
    }

    let mut records = Vec::new();
    for (line, result) in csv_reader.records().enumerate() {
        let raw = result
            .map_err(|e| StocktakeError::Import(format!("malformed row {}: {e}", line + 1)))?;
        let record: Record = headers
            .iter()
            .zip(raw.iter())
            .map(|(name, cell)| (name.clone(), Value::parse(cell)))
            .collect();
        records.push(record);
    }

    let rows_appended = store
        .bulk_append(table, &records)
        .map_err(|e| StocktakeError::Import(e.to_string()))?;

    Ok(ImportReport {
        table: table.to_string(),
        rows_appended,
        sha256,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::transfer::export;

    #[test]
    fn test_import_typed_rows() {
        let store = MemoryStore::with_retail_schema();
        let csv = "product_id,name,category,cost_price,current_stock\n\
                   1,Widget,Tools,9.99,100\n\
                   2,Gizmo,Toys,4.5,0\n";

        let report = import(&store, "Product", csv.as_bytes()).unwrap();
        assert_eq!(report.rows_appended, 2);
        assert!(report.sha256.starts_with("sha256:"));

        let rows = store.query("SELECT * FROM Product", &[]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][3], Value::Float(9.99));
        assert_eq!(rows[1][4], Value::Integer(0));
    }

    #[test]
    fn test_import_unknown_table() {
        let store = MemoryStore::with_retail_schema();
        let err = import(&store, "Nope", "a,b\n1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, StocktakeError::Schema { .. }));
    }

    #[test]
    fn test_import_rejected_header_is_import_error() {
        let store = MemoryStore::with_retail_schema();
        let err = import(&store, "Product", "bogus_column\nx\n".as_bytes()).unwrap_err();
        assert!(matches!(err, StocktakeError::Import(_)));
    }

    #[test]
    fn test_export_import_round_trip() {
        let source = MemoryStore::with_retail_schema();
        source
            .execute(
                "INSERT INTO Sales (product_id, customer_id, employee_id, sale_date, quantity, total_amount) \
                 VALUES (?, ?, ?, ?, ?, ?)",
                &[
                    Value::Integer(1),
                    Value::Integer(2),
                    Value::Integer(3),
                    Value::parse("2024-03-15"),
                    Value::Integer(2),
                    Value::Float(19.98),
                ],
            )
            .unwrap();

        let exported = export(&source, "Sales").unwrap();

        let target = MemoryStore::with_retail_schema();
        import(&target, "Sales", exported.bytes.as_slice()).unwrap();

        let original = source.query("SELECT * FROM Sales", &[]).unwrap();
        let round_tripped = target.query("SELECT * FROM Sales", &[]).unwrap();
        assert_eq!(original, round_tripped);
    }
}
