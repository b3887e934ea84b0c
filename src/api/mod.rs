//! HTTP API module for the Compensation Engine.
//!
//! This module provides the REST API endpoints for calculating total
//! compensation for single records, JSON batches and CSV uploads.

mod csv_batch;
mod handlers;
mod request;
mod response;
mod state;

pub use csv_batch::{CsvBatch, ERROR_COLUMN, RESULT_COLUMNS, parse_csv, render_csv};
pub use handlers::create_router;
pub use request::{REQUIRED_FIELDS, parse_json_record, text_decimal};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
