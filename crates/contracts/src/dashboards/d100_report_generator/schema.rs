use serde::{Deserialize, Deserializer, Serialize};

/// Declared value type of a report column
///
/// Anything the server sends besides `number` and `date` is treated as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Number,
    Date,
    #[default]
    #[serde(other)]
    Text,
}

/// Explicit `null` decodes like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Filter widget family derived from a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Enum,
    NumberRange,
    DateRange,
}

impl ColumnKind {
    /// Slots of the flat filter object owned by a column of this kind, in payload order
    pub fn slots(&self) -> &'static [FieldSlot] {
        match self {
            Self::Text | Self::Enum => &[FieldSlot::Value],
            Self::NumberRange => &[FieldSlot::Min, FieldSlot::Max],
            Self::DateRange => &[FieldSlot::Start, FieldSlot::End],
        }
    }
}

/// One position of a column inside the flat filter object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSlot {
    /// `{name}` (text or enum)
    Value,
    /// `min_{name}`
    Min,
    /// `max_{name}`
    Max,
    /// `start_{name}`
    Start,
    /// `end_{name}`
    End,
}

impl FieldSlot {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Value => "",
            Self::Min => "min_",
            Self::Max => "max_",
            Self::Start => "start_",
            Self::End => "end_",
        }
    }

    /// Flat key of this slot for the given column name
    pub fn key_for(&self, column: &str) -> String {
        format!("{}{}", self.prefix(), column)
    }
}

/// Column declared by the report backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Unique column identifier
    pub name: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub column_type: ColumnType,

    /// Multi-select column with a fixed list of options
    #[serde(rename = "enum", default, deserialize_with = "null_as_default")]
    pub is_enum: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl ColumnDescriptor {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::Text,
            is_enum: false,
            options: None,
        }
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self {
            column_type: ColumnType::Number,
            ..Self::text(name)
        }
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self {
            column_type: ColumnType::Date,
            ..Self::text(name)
        }
    }

    pub fn enumeration<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_enum: true,
            options: Some(options.into_iter().map(Into::into).collect()),
            ..Self::text(name)
        }
    }

    /// The enum flag takes precedence over the declared type.
    pub fn kind(&self) -> ColumnKind {
        if self.is_enum {
            return ColumnKind::Enum;
        }
        match self.column_type {
            ColumnType::Number => ColumnKind::NumberRange,
            ColumnType::Date => ColumnKind::DateRange,
            ColumnType::Text => ColumnKind::Text,
        }
    }

    /// Declared options; empty for non-enum columns
    pub fn options(&self) -> &[String] {
        match (&self.options, self.is_enum) {
            (Some(options), true) => options,
            _ => &[],
        }
    }

    /// Flat filter keys owned by this column
    pub fn derived_keys(&self) -> Vec<(FieldSlot, String)> {
        self.kind()
            .slots()
            .iter()
            .map(|slot| (*slot, slot.key_for(&self.name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_defaults() {
        let column: ColumnDescriptor = serde_json::from_value(json!({ "name": "employee_name" })).unwrap();
        assert_eq!(column.column_type, ColumnType::Text);
        assert!(!column.is_enum);
        assert_eq!(column.kind(), ColumnKind::Text);
        assert!(column.options().is_empty());
    }

    #[test]
    fn test_unknown_type_falls_back_to_text() {
        let column: ColumnDescriptor =
            serde_json::from_value(json!({ "name": "notes", "type": "blob" })).unwrap();
        assert_eq!(column.column_type, ColumnType::Text);
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let columns: Vec<ColumnDescriptor> = serde_json::from_value(json!([
            { "name": "a", "type": null },
            { "name": "b", "enum": null },
            { "name": "c", "type": null, "enum": true, "options": ["X"] }
        ]))
        .unwrap();
        assert_eq!(columns[0].column_type, ColumnType::Text);
        assert_eq!(columns[0].kind(), ColumnKind::Text);
        assert!(!columns[1].is_enum);
        assert_eq!(columns[1].kind(), ColumnKind::Text);
        assert_eq!(columns[2].kind(), ColumnKind::Enum);
    }

    #[test]
    fn test_known_types_decode_lowercase() {
        let column: ColumnDescriptor =
            serde_json::from_value(json!({ "name": "hours", "type": "number" })).unwrap();
        assert_eq!(column.kind(), ColumnKind::NumberRange);
        assert_eq!(serde_json::to_value(ColumnType::Date).unwrap(), json!("date"));
    }

    #[test]
    fn test_enum_flag_wins_over_type() {
        let column: ColumnDescriptor = serde_json::from_value(json!({
            "name": "status",
            "type": "number",
            "enum": true,
            "options": ["Active", "Inactive"]
        }))
        .unwrap();
        assert_eq!(column.kind(), ColumnKind::Enum);
        assert_eq!(column.options(), ["Active", "Inactive"]);
    }

    #[test]
    fn test_options_ignored_without_enum_flag() {
        let column: ColumnDescriptor =
            serde_json::from_value(json!({ "name": "team", "options": ["A"] })).unwrap();
        assert!(column.options().is_empty());
    }

    #[test]
    fn test_derived_keys() {
        let keys = |c: ColumnDescriptor| -> Vec<String> {
            c.derived_keys().into_iter().map(|(_, k)| k).collect()
        };
        assert_eq!(keys(ColumnDescriptor::number("hours")), ["min_hours", "max_hours"]);
        assert_eq!(keys(ColumnDescriptor::date("date")), ["start_date", "end_date"]);
        assert_eq!(keys(ColumnDescriptor::text("employee_name")), ["employee_name"]);
        assert_eq!(
            keys(ColumnDescriptor::enumeration("department", ["HR"])),
            ["department"]
        );
    }
}
