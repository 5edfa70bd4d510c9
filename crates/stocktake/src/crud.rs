//! Generic CRUD engine over the schema catalog.
//!
//! Every operation re-fetches the table descriptor, builds one
//! statement, and runs it against the shared store handle. No caching,
//! no transactions, no retries — a failed write is reported once and
//! the user resubmits.

use std::sync::Arc;

use crate::catalog::{Catalog, TableDescriptor};
use crate::error::Result;
use crate::statement;
use crate::store::Store;
use crate::value::{Record, Row, Value};

/// Schema-driven create/read/update/delete over any catalog table.
pub struct CrudEngine {
    store: Arc<dyn Store>,
}

impl CrudEngine {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Insert one record. The identifier column is never written; the
    /// store assigns it.
    pub fn create(&self, table: &str, record: &Record) -> Result<u64> {
        let descriptor = self.describe(table)?;
        let stmt = statement::insert(&descriptor, record);
        self.store.execute(&stmt.sql, &stmt.params)
    }

    /// Fetch every row of a table as records, in store order. An empty
    /// table reads as an empty sequence, not an error.
    pub fn read_all(&self, table: &str) -> Result<Vec<Record>> {
        let descriptor = self.describe(table)?;
        let stmt = statement::select_all(&descriptor.name);
        let rows = self.store.query(&stmt.sql, &stmt.params)?;
        Ok(rows
            .into_iter()
            .map(|row| row_to_record(&descriptor, row))
            .collect())
    }

    /// Fetch the row matching an identifier value, if present.
    pub fn read(&self, table: &str, identifier: &Value) -> Result<Option<Record>> {
        let descriptor = self.describe(table)?;
        let stmt = statement::select_by_id(&descriptor, identifier);
        let rows = self.store.query(&stmt.sql, &stmt.params)?;
        Ok(rows
            .into_iter()
            .next()
            .map(|row| row_to_record(&descriptor, row)))
    }

    /// Overwrite every non-identifier field of one row. Callers
    /// pre-fill the record with current values for fields the user
    /// left alone; a partial update is not expressible here.
    pub fn update(&self, table: &str, identifier: &Value, record: &Record) -> Result<u64> {
        let descriptor = self.describe(table)?;
        let stmt = statement::update(&descriptor, identifier, record);
        self.store.execute(&stmt.sql, &stmt.params)
    }

    /// Delete one row by identifier. Foreign-key violations surface as
    /// write errors from the store.
    pub fn delete(&self, table: &str, identifier: &Value) -> Result<u64> {
        let descriptor = self.describe(table)?;
        let stmt = statement::delete(&descriptor, identifier);
        self.store.execute(&stmt.sql, &stmt.params)
    }

    /// The closed choice set of identifier values for edit/delete/view
    /// flows. Loads the whole table; volumes here are small enough
    /// that this beats indexed lookup plumbing.
    pub fn identifier_values(&self, table: &str) -> Result<Vec<Value>> {
        let descriptor = self.describe(table)?;
        let id_column = descriptor.identifier_column().name.clone();
        Ok(self
            .read_all(table)?
            .into_iter()
            .filter_map(|mut record| record.shift_remove(&id_column))
            .collect())
    }

    fn describe(&self, table: &str) -> Result<TableDescriptor> {
        Catalog::describe(self.store.as_ref(), table)
    }
}

/// Zip a positional row into a record using the descriptor's column
/// order; short rows pad out as null.
fn row_to_record(descriptor: &TableDescriptor, row: Row) -> Record {
    let mut values = row.into_iter();
    descriptor
        .column_names()
        .map(|name| (name.to_string(), values.next().unwrap_or(Value::Null)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn engine() -> CrudEngine {
        CrudEngine::new(Arc::new(MemoryStore::with_retail_schema()))
    }

    fn widget() -> Record {
        let mut record = Record::new();
        record.insert("name".to_string(), Value::from("Widget"));
        record.insert("category".to_string(), Value::from("Tools"));
        record.insert("cost_price".to_string(), Value::Float(9.99));
        record.insert("current_stock".to_string(), Value::Integer(100));
        record
    }

    #[test]
    fn test_create_then_read_back() {
        let engine = engine();
        engine.create("Product", &widget()).unwrap();

        let record = engine.read("Product", &Value::Integer(1)).unwrap().unwrap();
        assert_eq!(record["name"], Value::from("Widget"));
        assert_eq!(record["cost_price"], Value::Float(9.99));
        assert_eq!(record["current_stock"], Value::Integer(100));
    }

    #[test]
    fn test_read_all_empty_table() {
        assert!(engine().read_all("Sales").unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_identifier() {
        assert!(engine().read("Product", &Value::Integer(99)).unwrap().is_none());
    }

    #[test]
    fn test_update_is_full_overwrite() {
        let engine = engine();
        engine.create("Product", &widget()).unwrap();

        let mut edited = widget();
        edited.insert("current_stock".to_string(), Value::Integer(0));
        engine
            .update("Product", &Value::Integer(1), &edited)
            .unwrap();

        let record = engine.read("Product", &Value::Integer(1)).unwrap().unwrap();
        assert_eq!(record["current_stock"], Value::Integer(0));
        assert_eq!(record["name"], Value::from("Widget"));
    }

    #[test]
    fn test_delete_then_read_empty() {
        let engine = engine();
        engine.create("Product", &widget()).unwrap();
        engine.delete("Product", &Value::Integer(1)).unwrap();
        assert!(engine.read("Product", &Value::Integer(1)).unwrap().is_none());
    }

    #[test]
    fn test_identifier_values_choice_set() {
        let engine = engine();
        engine.create("Product", &widget()).unwrap();
        engine.create("Product", &widget()).unwrap();
        assert_eq!(
            engine.identifier_values("Product").unwrap(),
            vec![Value::Integer(1), Value::Integer(2)]
        );
    }

    #[test]
    fn test_unknown_table_rejected() {
        assert!(engine().read_all("NotATable").is_err());
    }
}
