//! In-memory store implementation.
//!
//! Understands exactly the statement family the statement builders
//! emit (single-table INSERT/UPDATE/DELETE plus `SELECT *`); anything
//! richer — joins, aggregates — is refused and needs a SQL-backed
//! store. Backs the test suite and the CLI's CSV-directory mode.

use std::sync::Mutex;

use indexmap::IndexMap;

use crate::catalog::{Catalog, retail_columns};
use crate::error::{Result, StocktakeError};
use crate::value::{Record, Row, Value};

use super::Store;

#[derive(Debug, Default)]
struct MemTable {
    /// `(name, declared type)` in declared order.
    columns: Vec<(String, String)>,
    rows: Vec<Row>,
}

impl MemTable {
    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|(n, _)| n == name)
    }

    /// Next value for an auto-assigned integer identifier.
    fn next_identifier(&self) -> i64 {
        self.rows
            .iter()
            .filter_map(|row| match row.first() {
                Some(Value::Integer(i)) => Some(*i),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Whether a value is storable under a declared column type.
fn column_accepts(declared: &str, value: &Value) -> bool {
    if value.is_null() {
        return true;
    }
    let declared = declared.to_uppercase();
    if declared.starts_with("INT") {
        matches!(value, Value::Integer(_))
    } else if declared.starts_with("DECIMAL") {
        value.is_numeric()
    } else if declared.starts_with("DATE") {
        matches!(value, Value::Date(_) | Value::Text(_))
    } else {
        true
    }
}

/// In-memory relational store.
pub struct MemoryStore {
    tables: Mutex<IndexMap<String, MemTable>>,
}

impl MemoryStore {
    /// Create an empty store with no tables.
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(IndexMap::new()),
        }
    }

    /// Create a store seeded with the empty retail schema.
    pub fn with_retail_schema() -> Self {
        let store = Self::new();
        for table in Catalog::table_names() {
            // retail_columns covers every catalog table
            let columns = retail_columns(table).unwrap_or(&[]);
            store.create_table(
                table,
                columns
                    .iter()
                    .map(|(n, t)| (n.to_string(), t.to_string()))
                    .collect(),
            );
        }
        store
    }

    /// Register a table with the given column layout.
    pub fn create_table(&self, name: &str, columns: Vec<(String, String)>) {
        let mut tables = self.lock();
        tables.insert(name.to_string(), MemTable {
            columns,
            rows: Vec::new(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, IndexMap<String, MemTable>> {
        // A poisoned lock only means a panicking test left the map in
        // a consistent-enough state to keep reading.
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn insert(&self, table: &str, columns: &[String], params: &[Value]) -> Result<u64> {
        if columns.len() != params.len() {
            return Err(StocktakeError::Write(format!(
                "expected {} parameters, got {}",
                columns.len(),
                params.len()
            )));
        }
        let mut tables = self.lock();
        let mem = tables
            .get_mut(table)
            .ok_or_else(|| StocktakeError::unknown_table(table))?;

        let mut row: Row = vec![Value::Null; mem.columns.len()];
        for (name, value) in columns.iter().zip(params) {
            let idx = mem.column_index(name).ok_or_else(|| {
                StocktakeError::Write(format!("unknown column '{name}' in '{table}'"))
            })?;
            let declared = &mem.columns[idx].1;
            if !column_accepts(declared, value) {
                return Err(StocktakeError::Write(format!(
                    "type mismatch for '{name}' ({declared}): {value}"
                )));
            }
            row[idx] = value.clone();
        }
        // Identifier omitted from the column list: assign the next one
        if !columns.iter().any(|c| c == &mem.columns[0].0) {
            row[0] = Value::Integer(mem.next_identifier());
        }
        mem.rows.push(row);
        Ok(1)
    }

    fn update(
        &self,
        table: &str,
        assignments: &[String],
        key_column: &str,
        params: &[Value],
    ) -> Result<u64> {
        if params.len() != assignments.len() + 1 {
            return Err(StocktakeError::Write(format!(
                "expected {} parameters, got {}",
                assignments.len() + 1,
                params.len()
            )));
        }
        let mut tables = self.lock();
        let mem = tables
            .get_mut(table)
            .ok_or_else(|| StocktakeError::unknown_table(table))?;
        let key_idx = mem.column_index(key_column).ok_or_else(|| {
            StocktakeError::Write(format!("unknown column '{key_column}' in '{table}'"))
        })?;
        let mut indices = Vec::with_capacity(assignments.len());
        for name in assignments {
            let idx = mem.column_index(name).ok_or_else(|| {
                StocktakeError::Write(format!("unknown column '{name}' in '{table}'"))
            })?;
            let declared = &mem.columns[idx].1;
            let value = &params[indices.len()];
            if !column_accepts(declared, value) {
                return Err(StocktakeError::Write(format!(
                    "type mismatch for '{name}' ({declared}): {value}"
                )));
            }
            indices.push(idx);
        }
        let key = &params[assignments.len()];
        let mut affected = 0;
        for row in mem.rows.iter_mut().filter(|row| &row[key_idx] == key) {
            for (idx, value) in indices.iter().zip(params) {
                row[*idx] = value.clone();
            }
            affected += 1;
        }
        Ok(affected)
    }

    fn delete(&self, table: &str, key_column: &str, params: &[Value]) -> Result<u64> {
        let key = params
            .first()
            .ok_or_else(|| StocktakeError::Write("missing key parameter".to_string()))?;
        let mut tables = self.lock();
        let mem = tables
            .get_mut(table)
            .ok_or_else(|| StocktakeError::unknown_table(table))?;
        let key_idx = mem.column_index(key_column).ok_or_else(|| {
            StocktakeError::Write(format!("unknown column '{key_column}' in '{table}'"))
        })?;
        let before = mem.rows.len();
        mem.rows.retain(|row| &row[key_idx] != key);
        Ok((before - mem.rows.len()) as u64)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn execute(&self, sql: &str, params: &[Value]) -> Result<u64> {
        if let Some((table, columns)) = parse_insert(sql) {
            self.insert(&table, &columns, params)
        } else if let Some((table, assignments, key_column)) = parse_update(sql) {
            self.update(&table, &assignments, &key_column, params)
        } else if let Some((table, key_column)) = parse_delete(sql) {
            self.delete(&table, &key_column, params)
        } else {
            Err(StocktakeError::Write(format!(
                "unsupported statement: {sql}"
            )))
        }
    }

    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        let (table, key_column) = parse_select(sql).ok_or_else(|| {
            StocktakeError::Read(format!(
                "unsupported query (aggregates need a SQL backend): {sql}"
            ))
        })?;
        let tables = self.lock();
        let mem = tables
            .get(&table)
            .ok_or_else(|| StocktakeError::unknown_table(&table))?;
        match key_column {
            None => Ok(mem.rows.clone()),
            Some(column) => {
                let key = params
                    .first()
                    .ok_or_else(|| StocktakeError::Read("missing key parameter".to_string()))?;
                let key_idx = mem.column_index(&column).ok_or_else(|| {
                    StocktakeError::Read(format!("unknown column '{column}' in '{table}'"))
                })?;
                Ok(mem
                    .rows
                    .iter()
                    .filter(|row| &row[key_idx] == key)
                    .cloned()
                    .collect())
            }
        }
    }

    fn describe(&self, table: &str) -> Result<Vec<(String, String)>> {
        let tables = self.lock();
        let mem = tables
            .get(table)
            .ok_or_else(|| StocktakeError::unknown_table(table))?;
        Ok(mem.columns.clone())
    }

    fn bulk_append(&self, table: &str, records: &[Record]) -> Result<u64> {
        let mut tables = self.lock();
        let mem = tables
            .get_mut(table)
            .ok_or_else(|| StocktakeError::unknown_table(table))?;

        // Reject unknown header columns before writing anything
        for record in records {
            for name in record.keys() {
                if mem.column_index(name).is_none() {
                    return Err(StocktakeError::Write(format!(
                        "unknown column '{name}' in '{table}'"
                    )));
                }
            }
        }

        for record in records {
            let mut row: Row = vec![Value::Null; mem.columns.len()];
            for (name, value) in record {
                // Checked above
                if let Some(idx) = mem.column_index(name) {
                    row[idx] = value.clone();
                }
            }
            mem.rows.push(row);
        }
        Ok(records.len() as u64)
    }
}

// --- Statement parsing -------------------------------------------------
//
// The builders emit a fixed grammar, so parsing is string surgery, not
// a SQL parser.

fn split_list(list: &str) -> Vec<String> {
    list.split(',').map(|s| s.trim().to_string()).collect()
}

/// `INSERT INTO <t> (<cols>) VALUES (<placeholders>)`
fn parse_insert(sql: &str) -> Option<(String, Vec<String>)> {
    let rest = sql.strip_prefix("INSERT INTO ")?;
    let (table, rest) = rest.split_once(" (")?;
    let (columns, _) = rest.split_once(") VALUES (")?;
    Some((table.to_string(), split_list(columns)))
}

/// `UPDATE <t> SET <col> = ?, ... WHERE <key> = ?`
fn parse_update(sql: &str) -> Option<(String, Vec<String>, String)> {
    let rest = sql.strip_prefix("UPDATE ")?;
    let (table, rest) = rest.split_once(" SET ")?;
    let (assignments, where_clause) = rest.split_once(" WHERE ")?;
    let columns = assignments
        .split(',')
        .map(|a| a.trim().strip_suffix(" = ?").map(str::to_string))
        .collect::<Option<Vec<_>>>()?;
    let key_column = where_clause.strip_suffix(" = ?")?;
    Some((table.to_string(), columns, key_column.to_string()))
}

/// `DELETE FROM <t> WHERE <key> = ?`
fn parse_delete(sql: &str) -> Option<(String, String)> {
    let rest = sql.strip_prefix("DELETE FROM ")?;
    let (table, where_clause) = rest.split_once(" WHERE ")?;
    let key_column = where_clause.strip_suffix(" = ?")?;
    Some((table.to_string(), key_column.to_string()))
}

/// `SELECT * FROM <t>` with an optional `WHERE <key> = ?`
fn parse_select(sql: &str) -> Option<(String, Option<String>)> {
    let rest = sql.strip_prefix("SELECT * FROM ")?;
    match rest.split_once(" WHERE ") {
        None => Some((rest.trim().to_string(), None)),
        Some((table, where_clause)) => {
            let key_column = where_clause.strip_suffix(" = ?")?;
            Some((table.to_string(), Some(key_column.to_string())))
        }
    }
}
