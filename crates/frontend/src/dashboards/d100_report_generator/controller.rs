//! Report Session Controller
//!
//! Sends a payload built by the filter state manager to the backend and
//! hands back rows or an export file. Saving the file is up to the caller.

use contracts::dashboards::d100_report_generator::{ExportFormat, QueryPayload, ReportResponse};

use super::api::ReportApi;
use super::error::{ExportError, QueryError};

/// Successful query; an empty result is not an error
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Records(ReportResponse),
    NoResults,
}

impl QueryOutcome {
    pub fn into_response(self) -> ReportResponse {
        match self {
            Self::Records(response) => response,
            Self::NoResults => ReportResponse::default(),
        }
    }
}

/// Export payload returned by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    pub fn file_name(&self, stem: &str) -> String {
        self.format.file_name(stem)
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

pub struct ReportController<A> {
    api: A,
}

impl<A: ReportApi> ReportController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Empty projections never reach the backend.
    pub async fn run_query(&self, payload: &QueryPayload) -> Result<QueryOutcome, QueryError> {
        if !payload.has_columns() {
            log::warn!("Report query rejected: no columns selected");
            return Err(QueryError::NoColumnsSelected);
        }

        let response = self.api.fetch_report(payload).await.map_err(|e| {
            log::error!("Error fetching reports: {}", e);
            QueryError::from(e)
        })?;

        log::debug!("Report query returned {} records", response.count);
        if response.is_empty() {
            return Ok(QueryOutcome::NoResults);
        }
        Ok(QueryOutcome::Records(response))
    }

    pub async fn export_as(
        &self,
        format: ExportFormat,
        payload: &QueryPayload,
    ) -> Result<ExportFile, ExportError> {
        if !payload.has_columns() {
            log::warn!("{} export rejected: no columns selected", format.label());
            return Err(ExportError::NoColumnsSelected);
        }

        let bytes = self.api.fetch_export(format, payload).await.map_err(|e| {
            log::error!("{} generation failed: {}", format.label(), e);
            ExportError::from(e)
        })?;

        if bytes.is_empty() {
            log::error!("{} generation returned an empty file", format.label());
            return Err(ExportError::EmptyFile);
        }
        Ok(ExportFile { format, bytes })
    }
}
