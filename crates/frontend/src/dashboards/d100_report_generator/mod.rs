//! Report generator: schema-driven filters, queries and exports
//!
//! - `schema_loader` fetches the column schema and derives initial state
//! - `manager` owns the filter state and the selected columns
//! - `controller` runs queries and exports against the backend
//! - `ui` binds everything to the page

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter_state;
pub mod manager;
pub mod schema;
pub mod schema_loader;
pub mod session;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use api::{HttpReportApi, ReportApi};
pub use config::ReportConfig;
pub use controller::{ExportFile, QueryOutcome, ReportController};
pub use error::{ExportError, FilterError, QueryError, SchemaError, SchemaFetchError, TransportError};
pub use filter_state::{FieldInput, FilterState, FilterValue, SelectedColumns};
pub use manager::FilterStateManager;
pub use schema::{FilterKey, ReportSchema};
pub use schema_loader::{LoadedSchema, SchemaLoader};
pub use session::{ActionPhase, ActionResult, Completion, ReportAction, RequestTicket, SessionTracker};
