//! Typed filter values keyed by column name
//!
//! Flat `min_`/`max_`/`start_`/`end_` keys exist only on the wire and are
//! produced by [`FilterState::flatten`].

use std::collections::{BTreeMap, HashSet};

use contracts::dashboards::d100_report_generator::{ColumnKind, FieldSlot};
use serde_json::{Map, Value};

use super::schema::ReportSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text { value: String },
    Enum { selected: Vec<String> },
    NumberRange { min: String, max: String },
    DateRange { start: String, end: String },
}

impl FilterValue {
    pub fn default_for(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Text => Self::Text {
                value: String::new(),
            },
            ColumnKind::Enum => Self::Enum {
                selected: Vec::new(),
            },
            ColumnKind::NumberRange => Self::NumberRange {
                min: String::new(),
                max: String::new(),
            },
            ColumnKind::DateRange => Self::DateRange {
                start: String::new(),
                end: String::new(),
            },
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Text { .. } => ColumnKind::Text,
            Self::Enum { .. } => ColumnKind::Enum,
            Self::NumberRange { .. } => ColumnKind::NumberRange,
            Self::DateRange { .. } => ColumnKind::DateRange,
        }
    }

    pub fn is_default(&self) -> bool {
        match self {
            Self::Text { value } => value.is_empty(),
            Self::Enum { selected } => selected.is_empty(),
            Self::NumberRange { min, max } => min.is_empty() && max.is_empty(),
            Self::DateRange { start, end } => start.is_empty() && end.is_empty(),
        }
    }

    /// Scalar stored in a slot; `None` for the enum slot or a slot of another kind
    pub fn scalar(&self, slot: FieldSlot) -> Option<&str> {
        match (self, slot) {
            (Self::Text { value }, FieldSlot::Value) => Some(value.as_str()),
            (Self::NumberRange { min, .. }, FieldSlot::Min) => Some(min.as_str()),
            (Self::NumberRange { max, .. }, FieldSlot::Max) => Some(max.as_str()),
            (Self::DateRange { start, .. }, FieldSlot::Start) => Some(start.as_str()),
            (Self::DateRange { end, .. }, FieldSlot::End) => Some(end.as_str()),
            _ => None,
        }
    }

    pub(crate) fn scalar_mut(&mut self, slot: FieldSlot) -> Option<&mut String> {
        match (self, slot) {
            (Self::Text { value }, FieldSlot::Value) => Some(value),
            (Self::NumberRange { min, .. }, FieldSlot::Min) => Some(min),
            (Self::NumberRange { max, .. }, FieldSlot::Max) => Some(max),
            (Self::DateRange { start, .. }, FieldSlot::Start) => Some(start),
            (Self::DateRange { end, .. }, FieldSlot::End) => Some(end),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&[String]> {
        match self {
            Self::Enum { selected } => Some(selected.as_slice()),
            _ => None,
        }
    }

    fn wire_value(&self, slot: FieldSlot) -> Value {
        match self {
            Self::Enum { selected } => {
                Value::Array(selected.iter().cloned().map(Value::String).collect())
            }
            other => Value::String(other.scalar(slot).unwrap_or_default().to_string()),
        }
    }
}

/// Value written through a flat key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Scalar(String),
    Selection(Vec<String>),
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for FieldInput {
    fn from(value: Vec<String>) -> Self {
        Self::Selection(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    values: BTreeMap<String, FilterValue>,
}

impl FilterState {
    /// All-defaults state for every column of the schema
    pub fn defaults(schema: &ReportSchema) -> Self {
        let values = schema
            .columns()
            .iter()
            .map(|c| (c.name.clone(), FilterValue::default_for(c.kind())))
            .collect();
        Self { values }
    }

    pub fn get(&self, column: &str) -> Option<&FilterValue> {
        self.values.get(column)
    }

    pub(crate) fn get_mut(&mut self, column: &str) -> Option<&mut FilterValue> {
        self.values.get_mut(column)
    }

    pub fn is_default(&self) -> bool {
        self.values.values().all(FilterValue::is_default)
    }

    /// Number of columns carrying a non-default value
    pub fn active_count(&self) -> usize {
        self.values.values().filter(|v| !v.is_default()).count()
    }

    /// Flat wire object with every derived key of the schema
    pub fn flatten(&self, schema: &ReportSchema) -> Map<String, Value> {
        let mut object = Map::new();
        for column in schema.columns() {
            let kind = column.kind();
            let fallback = FilterValue::default_for(kind);
            let value = self.values.get(&column.name).unwrap_or(&fallback);
            for (slot, key) in column.derived_keys() {
                object.insert(key, value.wire_value(slot));
            }
        }
        object
    }
}

/// Projection requested from the backend; always a subset of the schema names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedColumns {
    names: HashSet<String>,
}

impl SelectedColumns {
    pub fn all(schema: &ReportSchema) -> Self {
        Self {
            names: schema.names().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Flip membership; returns whether the column is selected afterwards
    pub(crate) fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Selected names in schema order
    pub fn ordered(&self, schema: &ReportSchema) -> Vec<String> {
        schema
            .names()
            .filter(|name| self.names.contains(*name))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_report_generator::ColumnDescriptor;
    use serde_json::json;

    fn schema() -> ReportSchema {
        ReportSchema::new(vec![
            ColumnDescriptor::enumeration("department", ["HR", "Sales"]),
            ColumnDescriptor::number("hours"),
            ColumnDescriptor::date("report_date"),
            ColumnDescriptor::text("employee_name"),
        ])
        .unwrap()
    }

    #[test]
    fn test_defaults_flatten_to_exact_key_set() {
        let schema = schema();
        let flat = FilterState::defaults(&schema).flatten(&schema);
        assert_eq!(
            Value::Object(flat),
            json!({
                "department": [],
                "min_hours": "",
                "max_hours": "",
                "start_report_date": "",
                "end_report_date": "",
                "employee_name": ""
            })
        );
    }

    #[test]
    fn test_default_values_per_kind() {
        for kind in [
            ColumnKind::Text,
            ColumnKind::Enum,
            ColumnKind::NumberRange,
            ColumnKind::DateRange,
        ] {
            let value = FilterValue::default_for(kind);
            assert_eq!(value.kind(), kind);
            assert!(value.is_default());
        }
    }

    #[test]
    fn test_active_count() {
        let schema = schema();
        let mut state = FilterState::defaults(&schema);
        assert!(state.is_default());

        *state
            .get_mut("hours")
            .and_then(|v| v.scalar_mut(FieldSlot::Max))
            .unwrap() = "40".into();
        assert_eq!(state.active_count(), 1);
        assert!(!state.is_default());
    }

    #[test]
    fn test_scalar_slots_do_not_cross_kinds() {
        let value = FilterValue::default_for(ColumnKind::NumberRange);
        assert!(value.scalar(FieldSlot::Min).is_some());
        assert!(value.scalar(FieldSlot::Start).is_none());
        assert!(value.scalar(FieldSlot::Value).is_none());
        assert!(FilterValue::default_for(ColumnKind::Enum)
            .scalar(FieldSlot::Value)
            .is_none());
    }

    #[test]
    fn test_selected_columns_follow_schema_order() {
        let schema = schema();
        let mut selected = SelectedColumns::all(&schema);
        assert_eq!(
            selected.ordered(&schema),
            ["department", "hours", "report_date", "employee_name"]
        );

        assert!(!selected.toggle("hours"));
        assert_eq!(selected.ordered(&schema), ["department", "report_date", "employee_name"]);
        assert!(selected.toggle("hours"));
        assert_eq!(selected.len(), 4);
    }
}
