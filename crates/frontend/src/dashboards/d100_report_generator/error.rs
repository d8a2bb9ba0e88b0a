//! Error taxonomy of the report generator
//!
//! Every error is terminal for the action that raised it; nothing is retried.

use thiserror::Error;

/// Schema snapshot violates an invariant the filter model relies on
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("column at position {0} has an empty name")]
    EmptyName(usize),

    #[error("column '{0}' is declared more than once")]
    DuplicateColumn(String),

    #[error("enum column '{0}' declares no options")]
    MissingOptions(String),

    #[error("enum column '{column}' declares option '{option}' more than once")]
    DuplicateOption { column: String, option: String },

    #[error("filter key '{key}' is derived by both '{first}' and '{second}'")]
    KeyCollision {
        key: String,
        first: String,
        second: String,
    },

    #[error("column '{0}' derives the reserved key 'columns'")]
    ReservedKey(String),
}

/// Rejected filter state mutation; state is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter field '{0}'")]
    UnknownField(String),

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("column '{0}' is not an enum column")]
    NotEnum(String),

    #[error("option '{option}' is not declared for column '{column}'")]
    UnknownOption { column: String, option: String },

    #[error("value shape does not match filter field '{0}'")]
    ShapeMismatch(String),
}

/// Failure talking to the report backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaFetchError {
    #[error("failed to fetch column schema: {0}")]
    Transport(#[from] TransportError),

    #[error("malformed column schema: {0}")]
    Malformed(#[from] SchemaError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("no columns selected")]
    NoColumnsSelected,

    #[error("report query failed: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("no columns selected")]
    NoColumnsSelected,

    #[error("export failed: {0}")]
    Transport(#[from] TransportError),

    #[error("backend returned an empty file")]
    EmptyFile,
}
