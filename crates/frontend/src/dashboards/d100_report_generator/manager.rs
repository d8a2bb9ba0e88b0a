//! Filter State Manager
//!
//! Owns the filter values and the column projection for one session. All
//! mutations go through the operations below and are checked against the
//! current schema snapshot; a rejected mutation leaves the state untouched.

use contracts::dashboards::d100_report_generator::{ColumnKind, QueryPayload};

use super::error::FilterError;
use super::filter_state::{FieldInput, FilterState, FilterValue, SelectedColumns};
use super::schema::ReportSchema;
use super::schema_loader::LoadedSchema;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterStateManager {
    schema: ReportSchema,
    filters: FilterState,
    selected: SelectedColumns,
}

impl FilterStateManager {
    pub fn new(schema: ReportSchema) -> Self {
        let filters = FilterState::defaults(&schema);
        let selected = SelectedColumns::all(&schema);
        Self {
            schema,
            filters,
            selected,
        }
    }

    pub fn schema(&self) -> &ReportSchema {
        &self.schema
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn selected_columns(&self) -> &SelectedColumns {
        &self.selected
    }

    pub fn value(&self, column: &str) -> Option<&FilterValue> {
        self.filters.get(column)
    }

    /// Current scalar behind a flat key; empty for unknown keys
    pub fn field_text(&self, key: &str) -> String {
        self.schema
            .resolve_key(key)
            .and_then(|k| self.filters.get(&k.column)?.scalar(k.slot))
            .unwrap_or_default()
            .to_string()
    }

    pub fn is_option_selected(&self, column: &str, option: &str) -> bool {
        self.filters
            .get(column)
            .and_then(FilterValue::selected)
            .is_some_and(|selected| selected.iter().any(|o| o == option))
    }

    pub fn is_column_selected(&self, column: &str) -> bool {
        self.selected.contains(column)
    }

    /// Replace the value behind a flat key such as `min_hours` or `department`
    pub fn set_field(&mut self, key: &str, input: impl Into<FieldInput>) -> Result<(), FilterError> {
        let target = self
            .schema
            .resolve_key(key)
            .ok_or_else(|| FilterError::UnknownField(key.to_string()))?;
        let value = self
            .filters
            .get_mut(&target.column)
            .ok_or_else(|| FilterError::UnknownField(key.to_string()))?;

        match (value, input.into()) {
            // option content is passed through, like scalar text
            (FilterValue::Enum { selected }, FieldInput::Selection(options)) => {
                let mut unique: Vec<String> = Vec::with_capacity(options.len());
                for option in options {
                    if !unique.contains(&option) {
                        unique.push(option);
                    }
                }
                *selected = unique;
            }
            (value, FieldInput::Scalar(text)) => {
                let slot = value
                    .scalar_mut(target.slot)
                    .ok_or_else(|| FilterError::ShapeMismatch(key.to_string()))?;
                *slot = text;
            }
            _ => return Err(FilterError::ShapeMismatch(key.to_string())),
        }

        log::debug!("filter field '{}' updated", key);
        Ok(())
    }

    /// Flip one option of an enum column; returns whether it is selected afterwards
    pub fn toggle_enum_option(&mut self, column: &str, option: &str) -> Result<bool, FilterError> {
        let descriptor = self
            .schema
            .column(column)
            .ok_or_else(|| FilterError::UnknownColumn(column.to_string()))?;
        if descriptor.kind() != ColumnKind::Enum {
            return Err(FilterError::NotEnum(column.to_string()));
        }
        if !descriptor.options().iter().any(|o| o == option) {
            return Err(FilterError::UnknownOption {
                column: column.to_string(),
                option: option.to_string(),
            });
        }

        let Some(FilterValue::Enum { selected }) = self.filters.get_mut(column) else {
            return Err(FilterError::NotEnum(column.to_string()));
        };

        let now_selected = match selected.iter().position(|o| o == option) {
            Some(index) => {
                selected.remove(index);
                false
            }
            None => {
                selected.push(option.to_string());
                true
            }
        };

        log::debug!("option '{}' of '{}' selected: {}", option, column, now_selected);
        Ok(now_selected)
    }

    /// Flip a column in the projection; the projection may become empty
    pub fn toggle_selected_column(&mut self, column: &str) -> Result<bool, FilterError> {
        if !self.schema.contains(column) {
            return Err(FilterError::UnknownColumn(column.to_string()));
        }
        let now_selected = self.selected.toggle(column);
        log::debug!("column '{}' selected: {}", column, now_selected);
        Ok(now_selected)
    }

    pub fn select_all_columns(&mut self) {
        self.selected = SelectedColumns::all(&self.schema);
    }

    /// Reset to schema defaults and return the payload of the cleared state,
    /// so a follow-up query never reads anything older.
    pub fn clear(&mut self) -> QueryPayload {
        self.filters = FilterState::defaults(&self.schema);
        self.selected = SelectedColumns::all(&self.schema);
        log::debug!("filters cleared");
        self.build_query_payload()
    }

    /// Adopt a new schema snapshot; nothing from the previous one survives
    pub fn replace_schema(&mut self, schema: ReportSchema) {
        *self = Self::new(schema);
        log::debug!("schema replaced: {} columns", self.schema.columns().len());
    }

    pub fn build_query_payload(&self) -> QueryPayload {
        QueryPayload::new(
            self.filters.flatten(&self.schema),
            self.selected.ordered(&self.schema),
        )
    }
}

impl From<LoadedSchema> for FilterStateManager {
    fn from(loaded: LoadedSchema) -> Self {
        Self {
            schema: loaded.schema,
            filters: loaded.filters,
            selected: loaded.selected,
        }
    }
}
