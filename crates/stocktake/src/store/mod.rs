//! Store interface: the relational backend as an external collaborator.
//!
//! The core never talks to a database driver directly; everything goes
//! through [`Store`], which a SQL-backed implementation satisfies by
//! forwarding statement text and positional parameters to its driver.
//! [`MemoryStore`] is the in-crate implementation used by tests and the
//! CLI's local mode.

mod memory;

pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::{Record, Row, Value};

/// Connection parameters, fixed at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: String::new(),
            database: "retail_store_db".to_string(),
        }
    }
}

/// Query/execute interface over the relational store.
///
/// One long-lived handle is shared across all interactions; the store
/// is assumed to serialize statement execution on it. Each statement
/// commits independently — the core introduces no transaction
/// boundaries of its own.
pub trait Store: Send + Sync {
    /// Run a write statement; returns the affected row count.
    fn execute(&self, sql: &str, params: &[Value]) -> Result<u64>;

    /// Run a read statement; returns rows in store order.
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>>;

    /// Ordered `(column name, declared type)` pairs for a table.
    fn describe(&self, table: &str) -> Result<Vec<(String, String)>>;

    /// Append many records in one operation, without per-row
    /// validation. Returns the number of rows written; on failure the
    /// table may hold a partial prefix of the input.
    fn bulk_append(&self, table: &str, records: &[Record]) -> Result<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.database, "retail_store_db");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{"host":"db.internal","user":"admin","password":"s3cret","database":"retail"}"#;
        let config: StoreConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.database, "retail");
    }
}
