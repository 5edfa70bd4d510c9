//! Dashboard facade: one struct the presentation shell talks to.
//!
//! Owns the shared store handle for the life of the process
//! (constructed at startup, dropped on shutdown) and exposes one
//! method per user interaction. Each call performs at most one store
//! operation or query and returns a result for the shell to render;
//! errors come back as values, never as panics.

use std::sync::Arc;

use serde::Serialize;

use crate::analysis::{Analysis, AnalysisReport};
use crate::catalog::{Catalog, TableDescriptor};
use crate::crud::CrudEngine;
use crate::error::Result;
use crate::forms::{self, FormSpec};
use crate::store::Store;
use crate::transfer::{self, CsvExport, ImportReport};
use crate::value::{Record, Value};

/// Headline counts shown on the dashboard landing view.
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub total_products: usize,
    pub total_sales: usize,
    pub out_of_stock_items: usize,
    pub total_customers: usize,
}

/// The admin core behind the navigation menu.
pub struct Dashboard {
    store: Arc<dyn Store>,
    engine: CrudEngine,
}

impl Dashboard {
    /// Wire the facade to a store handle. The handle is shared and
    /// long-lived; the store serializes statements on it.
    pub fn new(store: Arc<dyn Store>) -> Self {
        let engine = CrudEngine::new(Arc::clone(&store));
        Self { store, engine }
    }

    /// Tables offered in navigation, in menu order.
    pub fn tables(&self) -> &'static [&'static str] {
        Catalog::table_names()
    }

    /// Fresh descriptor for a table.
    pub fn describe(&self, table: &str) -> Result<TableDescriptor> {
        Catalog::describe(self.store.as_ref(), table)
    }

    /// All rows of a table, for the browse view.
    pub fn browse(&self, table: &str) -> Result<Vec<Record>> {
        self.engine.read_all(table)
    }

    /// One record by identifier, for the detail view.
    pub fn record(&self, table: &str, identifier: &Value) -> Result<Option<Record>> {
        self.engine.read(table, identifier)
    }

    /// Identifier values currently in the table: the closed choice set
    /// for edit/delete/view selectors.
    pub fn record_ids(&self, table: &str) -> Result<Vec<Value>> {
        self.engine.identifier_values(table)
    }

    /// Controls for the create flow.
    pub fn add_form(&self, table: &str) -> Result<FormSpec> {
        Ok(forms::add_form(&self.describe(table)?))
    }

    /// Controls for the edit flow, pre-filled from the stored record.
    /// `None` if the identifier no longer matches a row.
    pub fn edit_form(&self, table: &str, identifier: &Value) -> Result<Option<FormSpec>> {
        let descriptor = self.describe(table)?;
        Ok(self
            .engine
            .read(table, identifier)?
            .map(|record| forms::edit_form(&descriptor, &record)))
    }

    /// Submit a create form.
    pub fn add(&self, table: &str, values: &Record) -> Result<u64> {
        self.engine.create(table, values)
    }

    /// Submit an edit form (full-row overwrite).
    pub fn update(&self, table: &str, identifier: &Value, values: &Record) -> Result<u64> {
        self.engine.update(table, identifier, values)
    }

    /// Delete one record.
    pub fn delete(&self, table: &str, identifier: &Value) -> Result<u64> {
        self.engine.delete(table, identifier)
    }

    /// Export a table as downloadable CSV.
    pub fn export(&self, table: &str) -> Result<CsvExport> {
        transfer::export(self.store.as_ref(), table)
    }

    /// Bulk-append an uploaded CSV stream into a table.
    pub fn import(&self, table: &str, reader: impl std::io::Read) -> Result<ImportReport> {
        transfer::import(self.store.as_ref(), table, reader)
    }

    /// Run one of the canned analyses.
    pub fn analyze(&self, analysis: Analysis) -> Result<AnalysisReport> {
        analysis.run(self.store.as_ref())
    }

    /// Headline counts for the landing view.
    pub fn metrics(&self) -> Result<Metrics> {
        let products = self.engine.read_all("Product")?;
        let out_of_stock_items = products
            .iter()
            .filter(|p| p.get("current_stock").and_then(Value::as_f64) == Some(0.0))
            .count();
        Ok(Metrics {
            total_products: products.len(),
            total_sales: self.engine.read_all("Sales")?.len(),
            out_of_stock_items,
            total_customers: self.engine.read_all("Customer")?.len(),
        })
    }
}
