//! Canonical column layout of the retail schema.
//!
//! Mirrors the deployed MySQL schema. Used to seed [`MemoryStore`]
//! instances and by tests; a SQL-backed store reports the same layout
//! through its own `describe`.
//!
//! [`MemoryStore`]: crate::store::MemoryStore

/// Columns of each catalog table as `(name, declared type)`, first
/// column the identifier.
pub fn retail_columns(table: &str) -> Option<&'static [(&'static str, &'static str)]> {
    let columns: &[(&str, &str)] = match table {
        "Product" => &[
            ("product_id", "INT"),
            ("name", "VARCHAR(100)"),
            ("category", "VARCHAR(50)"),
            ("cost_price", "DECIMAL(10,2)"),
            ("current_stock", "INT"),
        ],
        "Inventory" => &[
            ("inventory_id", "INT"),
            ("product_id", "INT"),
            ("store_id", "INT"),
            ("stock_quantity", "INT"),
            ("last_restock_date", "DATE"),
        ],
        "Customer" => &[
            ("customer_id", "INT"),
            ("name", "VARCHAR(100)"),
            ("email", "VARCHAR(100)"),
            ("phone", "VARCHAR(20)"),
            ("loyalty_points", "INT"),
        ],
        "Employee" => &[
            ("employee_id", "INT"),
            ("name", "VARCHAR(100)"),
            ("role", "VARCHAR(50)"),
            ("store_id", "INT"),
            ("hire_date", "DATE"),
        ],
        "Store" => &[
            ("store_id", "INT"),
            ("location", "VARCHAR(100)"),
            ("opened_date", "DATE"),
        ],
        "Sales" => &[
            ("sale_id", "INT"),
            ("product_id", "INT"),
            ("customer_id", "INT"),
            ("employee_id", "INT"),
            ("sale_date", "DATE"),
            ("quantity", "INT"),
            ("total_amount", "DECIMAL(10,2)"),
        ],
        "OutOfStockLog" => &[
            ("log_id", "INT"),
            ("product_id", "INT"),
            ("demand_date", "DATE"),
            ("missed_quantity", "INT"),
        ],
        "Returns" => &[
            ("return_id", "INT"),
            ("sale_id", "INT"),
            ("product_id", "INT"),
            ("return_date", "DATE"),
            ("reason", "VARCHAR(100)"),
            ("refund_amount", "DECIMAL(10,2)"),
        ],
        "DeadStock" => &[
            ("deadstock_id", "INT"),
            ("product_id", "INT"),
            ("days_unsold", "INT"),
            ("last_sale_date", "DATE"),
        ],
        "SalesTrend" => &[
            ("trend_id", "INT"),
            ("trend_date", "DATE"),
            ("total_sales", "INT"),
            ("total_revenue", "DECIMAL(12,2)"),
        ],
        _ => return None,
    };
    Some(columns)
}
