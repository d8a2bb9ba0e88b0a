use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Reserved key of the flat payload that carries the projection
pub const COLUMNS_KEY: &str = "columns";

/// Body of every query and export request
///
/// Serialized as one flat object: every filter key next to `columns`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPayload {
    #[serde(flatten)]
    pub filters: Map<String, Value>,

    /// Selected columns in schema order
    pub columns: Vec<String>,
}

impl QueryPayload {
    pub fn new(filters: Map<String, Value>, columns: Vec<String>) -> Self {
        Self { filters, columns }
    }

    pub fn filter(&self, key: &str) -> Option<&Value> {
        self.filters.get(key)
    }

    pub fn has_columns(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let mut object = self.filters.clone();
        object.insert(
            COLUMNS_KEY.to_string(),
            Value::Array(self.columns.iter().cloned().map(Value::String).collect()),
        );
        Value::Object(object)
    }
}

/// One result row: column name -> scalar value
pub type Row = BTreeMap<String, Value>;

/// Response of `POST /api/reports`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportResponse {
    pub records: Vec<Row>,
    pub count: u64,
}

impl ReportResponse {
    pub fn new(records: Vec<Row>) -> Self {
        let count = records.len() as u64;
        Self { records, count }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Accepts the `{records, count}` envelope as well as a bare array of rows,
/// which older backends return.
impl<'de> Deserialize<'de> for ReportResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Envelope {
                records: Vec<Row>,
                #[serde(default)]
                count: Option<u64>,
            },
            Bare(Vec<Row>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Envelope { records, count } => {
                let count = count.unwrap_or(records.len() as u64);
                Self { records, count }
            }
            Wire::Bare(records) => Self::new(records),
        })
    }
}

/// Display text of a cell value
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
