//! Declarative form descriptions for the presentation layer.
//!
//! The shell renders whatever these say: one control per editable
//! column, chosen by field kind. The identifier column is never
//! offered. Add forms infer kinds from names alone; edit forms
//! pre-fill every field from the current record and let an observed
//! numeric value override the name-based kind. The two flows are
//! intentionally not symmetric.

use serde::Serialize;

use crate::catalog::TableDescriptor;
use crate::inference::{FieldKind, infer_kind_for_edit};
use crate::value::{Record, Value};

/// Discrete intent tokens a submitted form carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Submit,
    Delete,
    Generate,
    Import,
}

/// Validation bounds for a numeric control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldControl {
    pub min: Option<f64>,
    pub step: Option<f64>,
}

impl FieldControl {
    /// The control parameters each kind renders with: identifiers are
    /// positive integers, numerics are non-negative decimals in cent
    /// steps, dates and text carry no bounds.
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Identifier => Self {
                min: Some(1.0),
                step: Some(1.0),
            },
            FieldKind::Numeric => Self {
                min: Some(0.0),
                step: Some(0.01),
            },
            FieldKind::Date | FieldKind::Text => Self {
                min: None,
                step: None,
            },
        }
    }
}

/// One control to render.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    /// Column the submitted value maps back to.
    pub column: String,
    /// Display label: underscores spaced, words title-cased.
    pub label: String,
    pub kind: FieldKind,
    pub control: FieldControl,
    /// Pre-filled value (null on add forms).
    pub default: Value,
}

/// A full form for one table.
#[derive(Debug, Clone, Serialize)]
pub struct FormSpec {
    pub table: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    /// The submitted mapping for this form, taking the pre-filled
    /// default wherever the user supplied nothing. This is what makes
    /// every update a full-row overwrite.
    pub fn merge_submission(&self, submitted: &Record) -> Record {
        self.fields
            .iter()
            .map(|field| {
                let value = submitted
                    .get(&field.column)
                    .cloned()
                    .unwrap_or_else(|| field.default.clone());
                (field.column.clone(), value)
            })
            .collect()
    }
}

/// "unit_price" -> "Unit Price"
fn display_label(column: &str) -> String {
    column
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Form for creating a record: name-based inference only, no defaults.
pub fn add_form(descriptor: &TableDescriptor) -> FormSpec {
    let fields = descriptor
        .editable_columns()
        .map(|column| FieldSpec {
            column: column.name.clone(),
            label: display_label(&column.name),
            kind: column.kind,
            control: FieldControl::for_kind(column.kind),
            default: Value::Null,
        })
        .collect();
    FormSpec {
        table: descriptor.name.clone(),
        fields,
    }
}

/// Form for editing a record: every field pre-filled with the current
/// value, kind refined by the value's runtime type.
pub fn edit_form(descriptor: &TableDescriptor, current: &Record) -> FormSpec {
    let fields = descriptor
        .editable_columns()
        .map(|column| {
            let value = current.get(&column.name).cloned().unwrap_or(Value::Null);
            let kind = infer_kind_for_edit(&column.name, &value);
            FieldSpec {
                column: column.name.clone(),
                label: display_label(&column.name),
                kind,
                control: FieldControl::for_kind(kind),
                default: value,
            }
        })
        .collect();
    FormSpec {
        table: descriptor.name.clone(),
        fields,
    }
}
