//! ViewModel for the report generator page

use contracts::dashboards::d100_report_generator::{
    ColumnDescriptor, ExportFormat, QueryPayload, Row,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::labels::export_failure_message;
use crate::dashboards::d100_report_generator::api::HttpReportApi;
use crate::dashboards::d100_report_generator::config::ReportConfig;
use crate::dashboards::d100_report_generator::controller::{
    ExportFile, QueryOutcome, ReportController,
};
use crate::dashboards::d100_report_generator::error::{ExportError, FilterError, QueryError};
use crate::dashboards::d100_report_generator::manager::FilterStateManager;
use crate::dashboards::d100_report_generator::schema_loader::SchemaLoader;
use crate::dashboards::d100_report_generator::session::{
    ActionPhase, Completion, ReportAction, SessionTracker,
};
use crate::shared::export::trigger_download;
use crate::shared::notice::NoticeService;

#[derive(Clone, Copy)]
pub struct ReportGeneratorVm {
    pub config: StoredValue<ReportConfig>,
    /// `None` until the schema is loaded
    pub manager: RwSignal<Option<FilterStateManager>>,
    pub schema_error: RwSignal<Option<String>>,
    /// Rows of the last applied query
    pub records: RwSignal<Vec<Row>>,
    pub record_count: RwSignal<u64>,
    pub query_session: RwSignal<SessionTracker>,
    pub export_session: RwSignal<SessionTracker>,
    pub notices: NoticeService,
}

impl ReportGeneratorVm {
    pub fn new(config: ReportConfig, notices: NoticeService) -> Self {
        Self {
            config: StoredValue::new(config),
            manager: RwSignal::new(None),
            schema_error: RwSignal::new(None),
            records: RwSignal::new(Vec::new()),
            record_count: RwSignal::new(0),
            query_session: RwSignal::new(SessionTracker::new()),
            export_session: RwSignal::new(SessionTracker::new()),
            notices,
        }
    }

    fn api(&self) -> HttpReportApi {
        HttpReportApi::new(self.config.get_value())
    }

    /// Fetch the column schema once; a failure is shown, not retried
    pub fn load_schema(&self) {
        let vm = *self;
        spawn_local(async move {
            match SchemaLoader::new(vm.api()).load().await {
                Ok(loaded) => {
                    vm.schema_error.set(None);
                    vm.manager.set(Some(FilterStateManager::from(loaded)));
                }
                Err(e) => {
                    vm.schema_error.set(Some(e.to_string()));
                    vm.notices.error("Failed to load report columns");
                }
            }
        });
    }

    // ---- reads (tracked) ----

    pub fn has_schema(&self) -> bool {
        self.manager.with(|m| m.is_some())
    }

    pub fn columns(&self) -> Vec<ColumnDescriptor> {
        self.manager.with(|m| {
            m.as_ref()
                .map(|m| m.schema().columns().to_vec())
                .unwrap_or_default()
        })
    }

    /// Selected columns in schema order
    pub fn visible_columns(&self) -> Vec<String> {
        self.manager.with(|m| {
            m.as_ref()
                .map(|m| m.selected_columns().ordered(m.schema()))
                .unwrap_or_default()
        })
    }

    pub fn field_text(&self, key: &str) -> String {
        self.manager
            .with(|m| m.as_ref().map(|m| m.field_text(key)).unwrap_or_default())
    }

    pub fn is_option_selected(&self, column: &str, option: &str) -> bool {
        self.manager
            .with(|m| m.as_ref().is_some_and(|m| m.is_option_selected(column, option)))
    }

    pub fn is_column_selected(&self, column: &str) -> bool {
        self.manager
            .with(|m| m.as_ref().is_some_and(|m| m.is_column_selected(column)))
    }

    /// Columns whose filter differs from its default
    pub fn active_filter_count(&self) -> usize {
        self.manager
            .with(|m| m.as_ref().map_or(0, |m| m.filters().active_count()))
    }

    pub fn is_querying(&self) -> bool {
        self.query_session.with(|s| s.is_pending())
    }

    pub fn is_exporting(&self, format: ExportFormat) -> bool {
        self.export_session
            .with(|s| s.phase() == ActionPhase::Pending(ReportAction::Export(format)))
    }

    // ---- edits ----

    fn edit<T>(
        &self,
        what: &str,
        f: impl FnOnce(&mut FilterStateManager) -> Result<T, FilterError>,
    ) {
        self.manager.update(|slot| {
            let Some(manager) = slot.as_mut() else {
                log::warn!("{} ignored: schema not loaded", what);
                return;
            };
            if let Err(e) = f(manager) {
                log::warn!("{} ignored: {}", what, e);
            }
        });
    }

    pub fn set_field(&self, key: &str, value: String) {
        self.edit("Filter update", |m| m.set_field(key, value));
    }

    pub fn toggle_option(&self, column: &str, option: &str) {
        self.edit("Option toggle", |m| m.toggle_enum_option(column, option));
    }

    pub fn toggle_column(&self, column: &str) {
        self.edit("Column toggle", |m| m.toggle_selected_column(column));
    }

    fn current_payload(&self) -> Option<QueryPayload> {
        self.manager
            .with_untracked(|m| m.as_ref().map(FilterStateManager::build_query_payload))
    }

    // ---- actions ----

    pub fn run_query(&self) {
        let Some(payload) = self.current_payload() else {
            log::warn!("Report query ignored: schema not loaded");
            return;
        };
        self.execute_query(payload);
    }

    /// Reset every filter and reselect all columns, then query the reset state
    pub fn clear(&self) {
        let Some(payload) = self
            .manager
            .try_update(|slot| slot.as_mut().map(FilterStateManager::clear))
            .flatten()
        else {
            return;
        };
        self.notices.info("Filters cleared");
        self.execute_query(payload);
    }

    fn execute_query(&self, payload: QueryPayload) {
        let Some(ticket) = self
            .query_session
            .try_update(|s| s.begin(ReportAction::Query))
        else {
            return;
        };

        let vm = *self;
        spawn_local(async move {
            let result = ReportController::new(vm.api()).run_query(&payload).await;
            let completion = vm
                .query_session
                .try_update(|s| s.finish(ticket, result.is_ok()))
                .unwrap_or(Completion::Stale);
            if completion == Completion::Stale {
                return;
            }

            match result {
                Ok(QueryOutcome::Records(response)) => {
                    vm.record_count.set(response.count);
                    vm.records.set(response.records);
                }
                Ok(QueryOutcome::NoResults) => {
                    vm.record_count.set(0);
                    vm.records.set(Vec::new());
                    vm.notices.warning("No results found");
                }
                Err(QueryError::NoColumnsSelected) => {
                    vm.notices.warning("Select at least one column");
                }
                // prior rows stay on screen
                Err(QueryError::Transport(_)) => {
                    vm.notices.error("Failed to fetch reports");
                }
            }
        });
    }

    pub fn export(&self, format: ExportFormat) {
        let Some(payload) = self.current_payload() else {
            log::warn!("{} export ignored: schema not loaded", format.label());
            return;
        };
        let Some(ticket) = self
            .export_session
            .try_update(|s| s.begin(ReportAction::Export(format)))
        else {
            return;
        };

        let vm = *self;
        spawn_local(async move {
            let saved = match ReportController::new(vm.api()).export_as(format, &payload).await {
                Ok(file) => vm.save(&file),
                Err(ExportError::NoColumnsSelected) => {
                    vm.notices.warning("Select at least one column");
                    false
                }
                Err(_) => {
                    vm.notices.error(export_failure_message(format));
                    false
                }
            };
            // a superseded export is still delivered; this only settles the phase
            vm.export_session.update(|s| {
                s.finish(ticket, saved);
            });
        });
    }

    fn save(&self, file: &ExportFile) -> bool {
        let file_name = self.config.with_value(|c| file.file_name(&c.file_stem));
        match trigger_download(&file.bytes, file.mime_type(), &file_name) {
            Ok(()) => {
                log::info!("Downloaded {} ({} bytes)", file_name, file.bytes.len());
                true
            }
            Err(e) => {
                log::error!("Failed to save {}: {}", file_name, e);
                self.notices.error(export_failure_message(file.format));
                false
            }
        }
    }
}
