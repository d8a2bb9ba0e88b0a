use std::cell::RefCell;

use contracts::dashboards::d100_report_generator::{
    ColumnDescriptor, ExportFormat, QueryPayload, ReportResponse,
};

use super::api::ReportApi;
use super::error::TransportError;

/// In-memory backend recording every call it receives
pub struct FakeReportApi {
    columns: Result<Vec<ColumnDescriptor>, TransportError>,
    report: Result<ReportResponse, TransportError>,
    export: Result<Vec<u8>, TransportError>,
    calls: RefCell<Vec<String>>,
    payloads: RefCell<Vec<QueryPayload>>,
}

impl Default for FakeReportApi {
    fn default() -> Self {
        Self {
            columns: Ok(Vec::new()),
            report: Ok(ReportResponse::default()),
            export: Ok(Vec::new()),
            calls: RefCell::new(Vec::new()),
            payloads: RefCell::new(Vec::new()),
        }
    }
}

impl FakeReportApi {
    pub fn with_columns(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns: Ok(columns),
            ..Self::default()
        }
    }

    pub fn failing_columns(error: TransportError) -> Self {
        Self {
            columns: Err(error),
            ..Self::default()
        }
    }

    pub fn with_report(mut self, report: Result<ReportResponse, TransportError>) -> Self {
        self.report = report;
        self
    }

    pub fn with_export(mut self, export: Result<Vec<u8>, TransportError>) -> Self {
        self.export = export;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn payloads(&self) -> Vec<QueryPayload> {
        self.payloads.borrow().clone()
    }

    fn record(&self, call: &str, payload: Option<&QueryPayload>) {
        self.calls.borrow_mut().push(call.to_string());
        if let Some(payload) = payload {
            self.payloads.borrow_mut().push(payload.clone());
        }
    }
}

impl ReportApi for FakeReportApi {
    async fn fetch_columns(&self) -> Result<Vec<ColumnDescriptor>, TransportError> {
        self.record("columns", None);
        self.columns.clone()
    }

    async fn fetch_report(&self, payload: &QueryPayload) -> Result<ReportResponse, TransportError> {
        self.record("report", Some(payload));
        self.report.clone()
    }

    async fn fetch_export(
        &self,
        format: ExportFormat,
        payload: &QueryPayload,
    ) -> Result<Vec<u8>, TransportError> {
        self.record(format.path(), Some(payload));
        self.export.clone()
    }
}
