//! Schema catalog: the fixed table list and per-table descriptors.

mod descriptor;
mod retail;

pub use descriptor::{ColumnDescriptor, TableDescriptor};
pub use retail::retail_columns;

use crate::error::{Result, StocktakeError};
use crate::inference::infer_kind;
use crate::store::Store;

/// The tables this deployment administers, in menu order.
///
/// A fixed list rather than live introspection: the set is part of the
/// deployment's configuration, and validating caller-supplied table
/// names against it is what makes interpolating a table name into
/// statement text safe.
pub const TABLES: &[&str] = &[
    "Product",
    "Inventory",
    "Customer",
    "Employee",
    "Store",
    "Sales",
    "OutOfStockLog",
    "Returns",
    "DeadStock",
    "SalesTrend",
];

/// Entry point for schema lookups.
pub struct Catalog;

impl Catalog {
    /// Ordered table names known to the core.
    pub fn table_names() -> &'static [&'static str] {
        TABLES
    }

    /// Whether a table is in the catalog.
    pub fn contains(table: &str) -> bool {
        TABLES.contains(&table)
    }

    /// Validate a caller-supplied table name before it is interpolated
    /// anywhere.
    pub fn ensure_known(table: &str) -> Result<()> {
        if Self::contains(table) {
            Ok(())
        } else {
            Err(StocktakeError::unknown_table(table))
        }
    }

    /// Fetch the descriptor for a table, fresh from the store.
    ///
    /// The first column of every table is its identifier column by
    /// convention; each column carries the field kind inferred from
    /// its name.
    pub fn describe(store: &dyn Store, table: &str) -> Result<TableDescriptor> {
        Self::ensure_known(table)?;
        let columns = store.describe(table)?;
        if columns.is_empty() {
            return Err(StocktakeError::Schema {
                table: table.to_string(),
                message: "table has no columns".to_string(),
            });
        }
        let columns = columns
            .into_iter()
            .map(|(name, declared_type)| {
                let kind = infer_kind(&name);
                ColumnDescriptor {
                    name,
                    declared_type,
                    kind,
                }
            })
            .collect();
        Ok(TableDescriptor {
            name: table.to_string(),
            columns,
        })
    }
}
