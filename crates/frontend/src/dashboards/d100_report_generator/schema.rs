//! Validated column schema snapshot
//!
//! A snapshot is immutable; fetching again replaces it wholesale.

use std::collections::{HashMap, HashSet};

use contracts::dashboards::d100_report_generator::{
    ColumnDescriptor, ColumnKind, FieldSlot, COLUMNS_KEY,
};

use super::error::SchemaError;

/// Typed address of one flat filter key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterKey {
    pub column: String,
    pub slot: FieldSlot,
}

impl FilterKey {
    pub fn render(&self) -> String {
        self.slot.key_for(&self.column)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSchema {
    columns: Vec<ColumnDescriptor>,
    keys: HashMap<String, FilterKey>,
}

impl ReportSchema {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Result<Self, SchemaError> {
        let mut names = HashSet::new();
        let mut keys: HashMap<String, FilterKey> = HashMap::new();

        for (position, column) in columns.iter().enumerate() {
            if column.name.trim().is_empty() {
                return Err(SchemaError::EmptyName(position));
            }
            if !names.insert(column.name.as_str()) {
                return Err(SchemaError::DuplicateColumn(column.name.clone()));
            }
            if column.kind() == ColumnKind::Enum {
                validate_options(column)?;
            }

            for (slot, key) in column.derived_keys() {
                if key == COLUMNS_KEY {
                    return Err(SchemaError::ReservedKey(column.name.clone()));
                }
                if let Some(existing) = keys.get(&key) {
                    return Err(SchemaError::KeyCollision {
                        key,
                        first: existing.column.clone(),
                        second: column.name.clone(),
                    });
                }
                keys.insert(
                    key,
                    FilterKey {
                        column: column.name.clone(),
                        slot,
                    },
                );
            }
        }

        Ok(Self { columns, keys })
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Resolve a flat key like `min_hours` to its column and slot
    pub fn resolve_key(&self, key: &str) -> Option<&FilterKey> {
        self.keys.get(key)
    }

    #[cfg(test)]
    pub(crate) fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn validate_options(column: &ColumnDescriptor) -> Result<(), SchemaError> {
    let options = column.options();
    if options.is_empty() {
        return Err(SchemaError::MissingOptions(column.name.clone()));
    }
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.as_str()) {
            return Err(SchemaError::DuplicateOption {
                column: column.name.clone(),
                option: option.clone(),
            });
        }
    }
    Ok(())
}
