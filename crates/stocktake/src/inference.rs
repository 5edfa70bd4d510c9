//! Field-kind inference from column names.
//!
//! Forms are generated reflectively, so the only signal for choosing an
//! input control is the column name (and, on the edit path, the runtime
//! type of the value already stored). The rules are ordered and
//! first-match; for a given name the result never varies within a run.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Tokens that mark a column as holding a decimal quantity.
const NUMERIC_TOKENS: &[&str] = &["price", "amount", "points", "quantity"];

/// Inferred semantic kind of a column, used to pick an input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Foreign-key style reference; positive integer input, minimum 1.
    Identifier,
    /// Calendar date input.
    Date,
    /// Decimal input, minimum 0, step 0.01.
    Numeric,
    /// Free text input.
    Text,
}

/// Infer the kind of a column from its name alone.
///
/// Ordered, first-match: "date" anywhere in the lowercased name wins,
/// then "id", then the quantity tokens, then free text. Used as-is for
/// add forms; edit forms layer [`infer_kind_for_edit`] on top.
pub fn infer_kind(column_name: &str) -> FieldKind {
    let lower = column_name.to_lowercase();
    if lower.contains("date") {
        FieldKind::Date
    } else if lower.contains("id") {
        FieldKind::Identifier
    } else if NUMERIC_TOKENS.iter().any(|t| lower.contains(t)) {
        FieldKind::Numeric
    } else {
        FieldKind::Text
    }
}

/// Infer the kind for an edit form, where the current value is known.
///
/// The name pass runs first; a numerically-typed current value then
/// forces `Numeric` for any non-date column, even where the name said
/// text or identifier. Add forms deliberately skip this second pass,
/// so the same column can render differently between the two flows.
pub fn infer_kind_for_edit(column_name: &str, current: &Value) -> FieldKind {
    let kind = infer_kind(column_name);
    if kind != FieldKind::Date && current.is_numeric() {
        FieldKind::Numeric
    } else {
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_rule_first() {
        assert_eq!(infer_kind("sale_date"), FieldKind::Date);
        assert_eq!(infer_kind("demand_date"), FieldKind::Date);
        // "date" outranks "id" even when both match
        assert_eq!(infer_kind("date_id"), FieldKind::Date);
    }

    #[test]
    fn test_identifier_rule() {
        assert_eq!(infer_kind("employee_id"), FieldKind::Identifier);
        assert_eq!(infer_kind("product_id"), FieldKind::Identifier);
    }

    #[test]
    fn test_numeric_tokens() {
        assert_eq!(infer_kind("unit_price"), FieldKind::Numeric);
        assert_eq!(infer_kind("total_amount"), FieldKind::Numeric);
        assert_eq!(infer_kind("loyalty_points"), FieldKind::Numeric);
        assert_eq!(infer_kind("missed_quantity"), FieldKind::Numeric);
    }

    #[test]
    fn test_text_fallback() {
        assert_eq!(infer_kind("notes"), FieldKind::Text);
        assert_eq!(infer_kind("name"), FieldKind::Text);
        assert_eq!(infer_kind("category"), FieldKind::Text);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(infer_kind("SALE_DATE"), FieldKind::Date);
        assert_eq!(infer_kind("Unit_Price"), FieldKind::Numeric);
    }

    #[test]
    fn test_edit_override_numeric_value() {
        // A text-named column holding a number renders numeric on edit
        assert_eq!(
            infer_kind_for_edit("notes", &Value::Integer(42)),
            FieldKind::Numeric
        );
        assert_eq!(
            infer_kind_for_edit("employee_id", &Value::Integer(7)),
            FieldKind::Numeric
        );
    }

    #[test]
    fn test_edit_override_spares_dates() {
        assert_eq!(
            infer_kind_for_edit("sale_date", &Value::Integer(20240315)),
            FieldKind::Date
        );
    }

    #[test]
    fn test_edit_no_override_for_non_numeric() {
        assert_eq!(
            infer_kind_for_edit("notes", &Value::Text("fragile".into())),
            FieldKind::Text
        );
        assert_eq!(infer_kind_for_edit("notes", &Value::Null), FieldKind::Text);
    }
}
