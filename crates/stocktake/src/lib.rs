//! Stocktake: schema-driven admin core for a retail database.
//!
//! Everything a generic admin dashboard needs, minus the rendering:
//! reflective CRUD forms driven off schema introspection, whole-table
//! CSV export/import, and six canned analytical aggregations with
//! fixed chart bindings.
//!
//! # Core Principles
//!
//! - **Schema-driven**: forms and statements are derived from table
//!   descriptors, never hand-written per table
//! - **Store-agnostic**: statement building is pure; any backend that
//!   speaks query/execute/describe/bulk-append plugs in
//! - **One interaction, one statement**: no caching, no transactions,
//!   no retries — failures surface once as a user-visible message
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use stocktake::{Dashboard, MemoryStore, Record, Value};
//!
//! let dashboard = Dashboard::new(Arc::new(MemoryStore::with_retail_schema()));
//!
//! let mut widget = Record::new();
//! widget.insert("name".to_string(), Value::from("Widget"));
//! widget.insert("category".to_string(), Value::from("Tools"));
//! widget.insert("cost_price".to_string(), Value::Float(9.99));
//! widget.insert("current_stock".to_string(), Value::Integer(100));
//! dashboard.add("Product", &widget).unwrap();
//!
//! assert_eq!(dashboard.metrics().unwrap().total_products, 1);
//! ```

pub mod analysis;
pub mod catalog;
pub mod crud;
pub mod error;
pub mod forms;
pub mod inference;
pub mod statement;
pub mod store;
pub mod transfer;
pub mod value;

mod dashboard;

pub use crate::dashboard::{Dashboard, Metrics};
pub use analysis::{Analysis, AnalysisReport, ChartBinding, ChartData, ChartKind};
pub use catalog::{Catalog, ColumnDescriptor, TableDescriptor};
pub use crud::CrudEngine;
pub use error::{Result, StocktakeError};
pub use forms::{Action, FieldControl, FieldSpec, FormSpec};
pub use inference::{FieldKind, infer_kind, infer_kind_for_edit};
pub use statement::Statement;
pub use store::{MemoryStore, Store, StoreConfig};
pub use transfer::{CsvExport, ImportReport};
pub use value::{Record, Row, Value};
