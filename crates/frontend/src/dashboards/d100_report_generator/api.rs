//! Report backend API
//!
//! `ReportApi` is the seam between the session logic and the network;
//! `HttpReportApi` is the browser implementation.

use contracts::dashboards::d100_report_generator::{
    ColumnDescriptor, ExportFormat, QueryPayload, ReportResponse, COLUMNS_PATH, REPORTS_PATH,
};
use gloo_net::http::{Request, Response};

use super::config::ReportConfig;
use super::error::TransportError;

/// Futures run on the single UI thread, so they are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait ReportApi {
    async fn fetch_columns(&self) -> Result<Vec<ColumnDescriptor>, TransportError>;

    async fn fetch_report(&self, payload: &QueryPayload) -> Result<ReportResponse, TransportError>;

    async fn fetch_export(
        &self,
        format: ExportFormat,
        payload: &QueryPayload,
    ) -> Result<Vec<u8>, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpReportApi {
    config: ReportConfig,
}

impl HttpReportApi {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    async fn post(&self, path: &str, payload: &QueryPayload) -> Result<Response, TransportError> {
        let response = Request::post(&self.config.url(path))
            .json(payload)
            .map_err(|e| TransportError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        ensure_ok(response)
    }
}

fn ensure_ok(response: Response) -> Result<Response, TransportError> {
    if !response.ok() {
        return Err(TransportError::Status(response.status()));
    }
    Ok(response)
}

impl ReportApi for HttpReportApi {
    async fn fetch_columns(&self) -> Result<Vec<ColumnDescriptor>, TransportError> {
        let response = Request::get(&self.config.url(COLUMNS_PATH))
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        ensure_ok(response)?
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn fetch_report(&self, payload: &QueryPayload) -> Result<ReportResponse, TransportError> {
        self.post(REPORTS_PATH, payload)
            .await?
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn fetch_export(
        &self,
        format: ExportFormat,
        payload: &QueryPayload,
    ) -> Result<Vec<u8>, TransportError> {
        self.post(format.path(), payload)
            .await?
            .binary()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
