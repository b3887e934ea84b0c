//! CSV batch file support.
//!
//! An uploaded CSV carries one record per row under a header naming at
//! least the four input columns. The returned CSV repeats every input
//! column, then appends the result columns and an `error` column.

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::calculation::{BatchOutcome, CalculationError};
use crate::models::{CompensationInput, CompensationResult};

use super::request::{REQUIRED_FIELDS, text_decimal};
use super::response::ApiErrorResponse;

/// Result columns appended to every output row, in order.
pub const RESULT_COLUMNS: [&str; 7] = [
    "calculated_base_salary",
    "target_bonus_amount",
    "performance_bonus",
    "deferred_cash",
    "equity_award_value",
    "fund_investment_amount",
    "immediate_cash_bonus",
];

/// Column holding a row's error message.
pub const ERROR_COLUMN: &str = "error";

/// A parsed CSV upload: the original rows and their validated inputs.
#[derive(Debug)]
pub struct CsvBatch {
    /// The header row as uploaded.
    pub headers: StringRecord,
    /// The data rows as uploaded.
    pub rows: Vec<StringRecord>,
    /// One validated input (or validation error) per row.
    pub records: Vec<Result<CompensationInput, ApiErrorResponse>>,
}

/// Parses a CSV upload.
///
/// Fails as a whole only when the CSV cannot be read or the header lacks a
/// required column; a bad value fails just its own row.
pub fn parse_csv(body: &str) -> Result<CsvBatch, ApiErrorResponse> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ApiErrorResponse::bad_request(format!("Invalid CSV: {}", e)))?
        .clone();

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !headers.iter().any(|h| h == *field))
        .collect();
    if !missing.is_empty() {
        return Err(ApiErrorResponse::bad_request(format!(
            "Missing required columns: {}",
            missing.join(", ")
        )));
    }

    let positions: Vec<usize> = REQUIRED_FIELDS
        .iter()
        .filter_map(|field| headers.iter().position(|h| h == *field))
        .collect();

    let mut rows = Vec::new();
    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| ApiErrorResponse::bad_request(format!("Invalid CSV: {}", e)))?;
        records.push(parse_row(&row, &positions));
        rows.push(row);
    }

    Ok(CsvBatch {
        headers,
        rows,
        records,
    })
}

fn parse_row(
    row: &StringRecord,
    positions: &[usize],
) -> Result<CompensationInput, ApiErrorResponse> {
    let cell = |i: usize| row.get(positions[i]).unwrap_or("");

    let input = CompensationInput {
        role_level: cell(0).to_string(),
        team_revenue: text_decimal(REQUIRED_FIELDS[1], cell(1))?,
        last_years_salary: text_decimal(REQUIRED_FIELDS[2], cell(2))?,
        performance_multiplier: text_decimal(REQUIRED_FIELDS[3], cell(3))?,
    };
    Ok(input)
}

/// Renders the output CSV for a batch and its outcomes.
pub fn render_csv(
    batch: &CsvBatch,
    outcomes: &[BatchOutcome<ApiErrorResponse>],
) -> Result<String, ApiErrorResponse> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    let header = batch
        .headers
        .iter()
        .chain(RESULT_COLUMNS)
        .chain(std::iter::once(ERROR_COLUMN));
    writer.write_record(header).map_err(internal)?;

    for (row, outcome) in batch.rows.iter().zip(outcomes) {
        let (values, error) = match outcome {
            Ok(result) => (result_cells(result), String::new()),
            Err(err) => (vec![String::new(); RESULT_COLUMNS.len()], err.message().to_string()),
        };

        let padded = (0..batch.headers.len()).map(|i| row.get(i).unwrap_or("").to_string());
        let record: Vec<String> = padded.chain(values).chain(std::iter::once(error)).collect();
        writer.write_record(&record).map_err(internal)?;
    }

    let bytes = writer.into_inner().map_err(internal)?;
    String::from_utf8(bytes).map_err(internal)
}

fn result_cells(result: &CompensationResult) -> Vec<String> {
    [
        result.calculated_base_salary,
        result.target_bonus_amount,
        result.performance_bonus,
        result.lti_breakdown.deferred_cash,
        result.lti_breakdown.equity_award_value,
        result.lti_breakdown.fund_investment_amount,
        result.immediate_cash_bonus,
    ]
    .iter()
    .map(|value| value.to_string())
    .collect()
}

fn internal<E>(_: E) -> ApiErrorResponse {
    CalculationError::Internal.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_batch;
    use crate::config::RuleTables;
    use axum::http::StatusCode;

    const UPLOAD: &str = "\
employee_id,role_level,team_revenue,last_years_salary,performance_multiplier
e1,Mid-level,10000000,80000,1.0
e2,Manager,10000000,80000,1.0
e3,Senior,abc,150000,1.0
";

    fn run(body: &str) -> String {
        let batch = parse_csv(body).unwrap();
        let outcomes = calculate_batch(&RuleTables::standard(), batch.records.iter().cloned());
        render_csv(&batch, &outcomes).unwrap()
    }

    #[test]
    fn test_parse_keeps_row_order_and_extra_columns() {
        let batch = parse_csv(UPLOAD).unwrap();
        assert_eq!(batch.rows.len(), 3);
        assert_eq!(batch.headers.get(0), Some("employee_id"));
        assert_eq!(batch.rows[2].get(0), Some("e3"));
        assert!(batch.records[0].is_ok());
        assert!(batch.records[1].is_ok());
        assert_eq!(
            batch.records[2].as_ref().unwrap_err().message(),
            "Invalid input type or value: team_revenue must be a number"
        );
    }

    #[test]
    fn test_missing_columns_reject_whole_upload() {
        let err = parse_csv("role_level,team_revenue\nSenior,1\n").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message(),
            "Missing required columns: last_years_salary, performance_multiplier"
        );
    }

    #[test]
    fn test_render_merges_inputs_results_and_errors() {
        let output = run(UPLOAD);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "employee_id,role_level,team_revenue,last_years_salary,performance_multiplier,\
calculated_base_salary,target_bonus_amount,performance_bonus,deferred_cash,\
equity_award_value,fund_investment_amount,immediate_cash_bonus,error"
        );
        assert_eq!(
            lines[1],
            "e1,Mid-level,10000000,80000,1.0,92000.00,55200.00,55200.00,11040.00,13800.00,5520.00,38640.00,"
        );
        assert_eq!(
            lines[2],
            "e2,Manager,10000000,80000,1.0,,,,,,,,Invalid role level: Manager"
        );
        assert_eq!(
            lines[3],
            "e3,Senior,abc,150000,1.0,,,,,,,,Invalid input type or value: team_revenue must be a number"
        );
    }

    #[test]
    fn test_header_only_upload_renders_header_only() {
        let output = run("role_level,team_revenue,last_years_salary,performance_multiplier\n");
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_short_row_fails_only_that_row() {
        let output = run(
            "role_level,team_revenue,last_years_salary,performance_multiplier\nJunior,0\nJunior,0,50000,1\n",
        );
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].ends_with("Invalid input type or value: last_years_salary must be a number"));
        assert!(lines[2].ends_with(",50000.00,15000.00,15000.00,1500.00,0.00,750.00,12750.00,"));
    }
}
