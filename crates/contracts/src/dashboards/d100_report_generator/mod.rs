//! Wire contracts of the report generator API
//!
//! Shared between the browser client and the report backend:
//! - `GET  /api/reports/columns` -> `Vec<ColumnDescriptor>`
//! - `POST /api/reports`         -> `ReportResponse`
//! - `POST /api/reports/{pdf,csv,excel}` -> binary file

pub mod dto;
pub mod export;
pub mod schema;

pub use dto::{format_cell, QueryPayload, ReportResponse, Row, COLUMNS_KEY};
pub use export::ExportFormat;
pub use schema::{ColumnDescriptor, ColumnKind, ColumnType, FieldSlot};

/// Path of the column schema endpoint
pub const COLUMNS_PATH: &str = "/api/reports/columns";

/// Path of the filtered query endpoint
pub const REPORTS_PATH: &str = "/api/reports";
