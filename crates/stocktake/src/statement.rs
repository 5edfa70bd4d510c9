//! Dynamic statement construction from table descriptors.
//!
//! Builders are pure: `(descriptor, record) -> Statement`, no store
//! involved. Values are always bound as positional `?` parameters;
//! table and column names are interpolated into the text, which is why
//! callers must validate the table against the catalog first and why
//! column names only ever come from `Store::describe`.

use crate::catalog::TableDescriptor;
use crate::value::{Record, Value};

/// A statement ready for the store: text plus positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

/// `INSERT` over every non-identifier column, in descriptor order.
///
/// Columns missing from the record are bound as null; the store is
/// expected to assign the identifier itself.
pub fn insert(descriptor: &TableDescriptor, record: &Record) -> Statement {
    let columns: Vec<&str> = descriptor
        .editable_columns()
        .map(|c| c.name.as_str())
        .collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        descriptor.name,
        columns.join(", "),
        placeholders
    );
    let params = columns
        .iter()
        .map(|c| record.get(*c).cloned().unwrap_or(Value::Null))
        .collect();
    Statement { sql, params }
}

/// Full-row `UPDATE`: every non-identifier column is rewritten, even
/// ones the caller left untouched. The identifier value binds last.
pub fn update(descriptor: &TableDescriptor, identifier: &Value, record: &Record) -> Statement {
    let columns: Vec<&str> = descriptor
        .editable_columns()
        .map(|c| c.name.as_str())
        .collect();
    let assignments = columns
        .iter()
        .map(|c| format!("{c} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ?",
        descriptor.name,
        assignments,
        descriptor.identifier_column().name
    );
    let mut params: Vec<Value> = columns
        .iter()
        .map(|c| record.get(*c).cloned().unwrap_or(Value::Null))
        .collect();
    params.push(identifier.clone());
    Statement { sql, params }
}

/// `DELETE` by identifier. Referential violations are the store's to
/// report; nothing cascades here.
pub fn delete(descriptor: &TableDescriptor, identifier: &Value) -> Statement {
    Statement {
        sql: format!(
            "DELETE FROM {} WHERE {} = ?",
            descriptor.name,
            descriptor.identifier_column().name
        ),
        params: vec![identifier.clone()],
    }
}

/// `SELECT *` over the whole table.
pub fn select_all(table: &str) -> Statement {
    Statement {
        sql: format!("SELECT * FROM {table}"),
        params: Vec::new(),
    }
}

/// `SELECT *` for one row by identifier.
pub fn select_by_id(descriptor: &TableDescriptor, identifier: &Value) -> Statement {
    Statement {
        sql: format!(
            "SELECT * FROM {} WHERE {} = ?",
            descriptor.name,
            descriptor.identifier_column().name
        ),
        params: vec![identifier.clone()],
    }
}
