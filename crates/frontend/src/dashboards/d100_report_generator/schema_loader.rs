//! Schema Loader
//!
//! Fetches the column schema once and derives the initial filter state and
//! projection from it. Failures are reported, never retried.

use super::api::ReportApi;
use super::error::SchemaFetchError;
use super::filter_state::{FilterState, SelectedColumns};
use super::schema::ReportSchema;

/// Validated schema together with the state derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSchema {
    pub schema: ReportSchema,
    pub filters: FilterState,
    pub selected: SelectedColumns,
}

impl LoadedSchema {
    pub fn new(schema: ReportSchema) -> Self {
        let filters = FilterState::defaults(&schema);
        let selected = SelectedColumns::all(&schema);
        Self {
            schema,
            filters,
            selected,
        }
    }
}

pub struct SchemaLoader<A> {
    api: A,
}

impl<A: ReportApi> SchemaLoader<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<LoadedSchema, SchemaFetchError> {
        let columns = self.api.fetch_columns().await.map_err(|e| {
            log::error!("Failed to fetch schema: {}", e);
            SchemaFetchError::from(e)
        })?;

        let schema = ReportSchema::new(columns).map_err(|e| {
            log::error!("Rejected column schema: {}", e);
            SchemaFetchError::from(e)
        })?;

        log::info!("Loaded report schema with {} columns", schema.columns().len());
        Ok(LoadedSchema::new(schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_report_generator::error::{SchemaError, TransportError};
    use crate::dashboards::d100_report_generator::manager::FilterStateManager;
    use crate::dashboards::d100_report_generator::test_support::FakeReportApi;
    use contracts::dashboards::d100_report_generator::ColumnDescriptor;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_load_derives_initial_state() {
        let api = FakeReportApi::with_columns(vec![
            ColumnDescriptor::enumeration("department", ["HR", "Sales"]),
            ColumnDescriptor::number("hours"),
        ]);
        let loaded = block_on(SchemaLoader::new(api).load()).unwrap();

        assert_eq!(loaded.schema.columns().len(), 2);
        assert!(loaded.filters.is_default());
        assert_eq!(loaded.selected.len(), 2);

        let manager = FilterStateManager::from(loaded);
        assert_eq!(
            manager.build_query_payload().to_json(),
            json!({
                "department": [],
                "min_hours": "",
                "max_hours": "",
                "columns": ["department", "hours"]
            })
        );
    }

    #[test]
    fn test_transport_failure_is_reported() {
        let api = FakeReportApi::failing_columns(TransportError::Status(502));
        let err = block_on(SchemaLoader::new(api).load()).unwrap_err();
        assert_eq!(err, SchemaFetchError::Transport(TransportError::Status(502)));
    }

    #[test]
    fn test_malformed_schema_is_reported() {
        let api = FakeReportApi::with_columns(vec![
            ColumnDescriptor::text("status"),
            ColumnDescriptor::text("status"),
        ]);
        let err = block_on(SchemaLoader::new(api).load()).unwrap_err();
        assert_eq!(
            err,
            SchemaFetchError::Malformed(SchemaError::DuplicateColumn("status".into()))
        );
    }

    #[test]
    fn test_loader_does_not_retry() {
        let api = FakeReportApi::failing_columns(TransportError::Network("offline".into()));
        let loader = SchemaLoader::new(api);
        assert!(block_on(loader.load()).is_err());
        assert_eq!(loader.api.calls().len(), 1);
    }
}
