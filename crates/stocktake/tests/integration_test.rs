//! Integration tests for the Stocktake core.

use std::sync::Arc;

use stocktake::{
    Analysis, Catalog, Dashboard, FieldKind, MemoryStore, Record, Value, infer_kind,
    infer_kind_for_edit,
};

fn dashboard() -> Dashboard {
    Dashboard::new(Arc::new(MemoryStore::with_retail_schema()))
}

fn widget(stock: i64) -> Record {
    let mut record = Record::new();
    record.insert("name".to_string(), Value::from("Widget"));
    record.insert("category".to_string(), Value::from("Tools"));
    record.insert("cost_price".to_string(), Value::Float(9.99));
    record.insert("current_stock".to_string(), Value::Integer(stock));
    record
}

// =============================================================================
// Schema Catalog
// =============================================================================

#[test]
fn test_every_table_has_columns_and_hidden_identifier() {
    let dash = dashboard();
    for table in dash.tables() {
        let descriptor = dash.describe(table).expect("describe");
        assert!(descriptor.column_count() > 0);

        let identifier = descriptor.identifier_column().name.clone();
        let form = dash.add_form(table).expect("add form");
        assert!(
            form.fields.iter().all(|f| f.column != identifier),
            "{table}: identifier column must not be editable"
        );
    }
}

#[test]
fn test_unknown_table_is_schema_error() {
    let dash = dashboard();
    assert!(dash.browse("NoSuchTable").is_err());
    assert!(Catalog::ensure_known("Product'; --").is_err());
}

// =============================================================================
// CRUD properties
// =============================================================================

#[test]
fn test_create_then_read_returns_supplied_fields() {
    let dash = dashboard();
    dash.add("Product", &widget(100)).unwrap();

    let id = dash.record_ids("Product").unwrap().remove(0);
    let record = dash.record("Product", &id).unwrap().unwrap();
    for (column, value) in widget(100) {
        assert_eq!(record[&column], value, "{column}");
    }
}

#[test]
fn test_update_is_full_overwrite_not_merge() {
    let dash = dashboard();
    dash.add("Product", &widget(100)).unwrap();
    let id = dash.record_ids("Product").unwrap().remove(0);

    let mut edited = widget(100);
    edited.insert("category".to_string(), Value::Null);
    edited.insert("current_stock".to_string(), Value::Integer(7));
    dash.update("Product", &id, &edited).unwrap();

    let record = dash.record("Product", &id).unwrap().unwrap();
    // The nulled field was rewritten too, not merged around
    assert_eq!(record["category"], Value::Null);
    assert_eq!(record["current_stock"], Value::Integer(7));
}

#[test]
fn test_delete_then_read_is_empty() {
    let dash = dashboard();
    dash.add("Product", &widget(100)).unwrap();
    let id = dash.record_ids("Product").unwrap().remove(0);

    dash.delete("Product", &id).unwrap();
    assert!(dash.record("Product", &id).unwrap().is_none());
    assert!(dash.browse("Product").unwrap().is_empty());
}

// =============================================================================
// Bulk transfer
// =============================================================================

#[test]
fn test_export_import_round_trip_set_equal() {
    let dash = dashboard();
    dash.add("Product", &widget(100)).unwrap();
    dash.add("Product", &widget(0)).unwrap();

    let exported = dash.export("Product").unwrap();

    let fresh = dashboard();
    fresh.import("Product", exported.bytes.as_slice()).unwrap();

    assert_eq!(
        fresh.browse("Product").unwrap(),
        dash.browse("Product").unwrap()
    );
}

// =============================================================================
// Field inference
// =============================================================================

#[test]
fn test_inference_reference_cases() {
    assert_eq!(infer_kind("sale_date"), FieldKind::Date);
    assert_eq!(infer_kind("employee_id"), FieldKind::Identifier);
    assert_eq!(infer_kind("unit_price"), FieldKind::Numeric);
    assert_eq!(infer_kind("notes"), FieldKind::Text);

    // Edit-path override by observed runtime type
    assert_eq!(
        infer_kind_for_edit("notes", &Value::Integer(42)),
        FieldKind::Numeric
    );
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_product_out_of_stock_scenario() {
    let dash = dashboard();
    dash.add("Product", &widget(100)).unwrap();

    // In stock: the out-of-stock count excludes it
    assert_eq!(dash.metrics().unwrap().out_of_stock_items, 0);

    let id = dash.record_ids("Product").unwrap().remove(0);
    let form = dash.edit_form("Product", &id).unwrap().unwrap();
    let mut submitted = Record::new();
    submitted.insert("current_stock".to_string(), Value::Integer(0));
    dash.update("Product", &id, &form.merge_submission(&submitted))
        .unwrap();

    assert_eq!(dash.metrics().unwrap().out_of_stock_items, 1);
}

// =============================================================================
// Analyses
// =============================================================================

#[test]
fn test_analyses_are_fixed_and_named() {
    let dash = dashboard();
    assert_eq!(Analysis::ALL.len(), 6);
    for analysis in Analysis::ALL {
        assert!(!analysis.label().is_empty());
        // The in-memory store cannot aggregate; the failure is a
        // reportable error, not a panic
        assert!(dash.analyze(analysis).is_err());
    }
}
