//! Table and column descriptors.

use serde::{Deserialize, Serialize};

use crate::inference::FieldKind;

/// Descriptor for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Raw declared type as reported by the store (e.g. "DECIMAL(10,2)").
    pub declared_type: String,
    /// Field kind inferred from the column name.
    pub kind: FieldKind,
}

/// Descriptor for a table: its name plus ordered columns.
///
/// Fetched fresh per operation and discarded afterwards; the store is
/// the durable owner of the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    /// The identifier column: always the first column, by convention.
    ///
    /// `Catalog::describe` never yields an empty column list.
    pub fn identifier_column(&self) -> &ColumnDescriptor {
        &self.columns[0]
    }

    /// Every column except the identifier, in declared order. These
    /// are the columns offered in forms and written by insert/update.
    pub fn editable_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().skip(1)
    }

    /// All column names, in declared order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::infer_kind;

    fn product() -> TableDescriptor {
        let cols = ["product_id", "name", "category", "cost_price"]
            .iter()
            .map(|n| ColumnDescriptor {
                name: n.to_string(),
                declared_type: "VARCHAR(50)".to_string(),
                kind: infer_kind(n),
            })
            .collect();
        TableDescriptor {
            name: "Product".to_string(),
            columns: cols,
        }
    }

    #[test]
    fn test_identifier_is_first_column() {
        assert_eq!(product().identifier_column().name, "product_id");
    }

    #[test]
    fn test_editable_skips_identifier() {
        let desc = product();
        let editable: Vec<_> = desc.editable_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(editable, vec!["name", "category", "cost_price"]);
    }

    #[test]
    fn test_column_lookup() {
        let desc = product();
        assert!(desc.column("category").is_some());
        assert!(desc.column("missing").is_none());
    }
}
