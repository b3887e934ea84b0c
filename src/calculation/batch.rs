//! Batch compensation calculation.
//!
//! A batch is the single-record calculation applied to each row on its own.
//! Rows that already failed validation keep their error; no row's failure
//! stops the others.

use serde::Serialize;

use crate::config::RuleTables;
use crate::models::{CompensationInput, CompensationResult};

use super::orchestrator::{CalculationError, calculate_total_compensation};

/// The outcome of one batch row.
pub type BatchOutcome<E = CalculationError> = Result<CompensationResult, E>;

/// Calculates every record, preserving order and length.
///
/// Records that already failed upstream validation carry their own error
/// type `E`; calculation failures are converted into it.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::{calculate_batch, CalculationError};
/// use compensation_engine::config::RuleTables;
/// use compensation_engine::models::CompensationInput;
/// use rust_decimal::Decimal;
///
/// let record = |role: &str| Ok::<_, CalculationError>(CompensationInput {
///     role_level: role.to_string(),
///     team_revenue: Decimal::new(1_000_000, 0),
///     last_years_salary: Decimal::new(150_000, 0),
///     performance_multiplier: Decimal::ONE,
/// });
///
/// let outcomes = calculate_batch(&RuleTables::standard(), vec![record("Senior"), record("Manager")]);
/// assert!(outcomes[0].is_ok());
/// assert!(outcomes[1].is_err());
/// ```
pub fn calculate_batch<I, E>(tables: &RuleTables, records: I) -> Vec<BatchOutcome<E>>
where
    I: IntoIterator<Item = Result<CompensationInput, E>>,
    E: From<CalculationError>,
{
    records
        .into_iter()
        .map(|record| {
            record.and_then(|input| calculate_total_compensation(tables, &input).map_err(E::from))
        })
        .collect()
}

/// Counts of succeeded and failed rows in a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Number of rows in the batch.
    pub total: usize,
    /// Rows that produced a result.
    pub succeeded: usize,
    /// Rows that produced an error.
    pub failed: usize,
}

impl BatchSummary {
    /// Tallies a slice of outcomes.
    pub fn from_outcomes<E>(outcomes: &[BatchOutcome<E>]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_ok()).count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(role: &str, revenue: &str, last: &str) -> Result<CompensationInput, CalculationError> {
        Ok(CompensationInput {
            role_level: role.to_string(),
            team_revenue: dec(revenue),
            last_years_salary: dec(last),
            performance_multiplier: dec("1.0"),
        })
    }

    #[test]
    fn test_failed_row_does_not_abort_batch() {
        let tables = RuleTables::standard();
        let outcomes = calculate_batch(
            &tables,
            vec![
                record("Mid-level", "10000000", "80000"),
                record("Manager", "10000000", "80000"),
                record("Senior", "1000000", "150000"),
            ],
        );

        assert_eq!(outcomes.len(), 3);
        assert_eq!(
            outcomes[0].as_ref().unwrap().calculated_base_salary,
            dec("92000.00")
        );
        assert_eq!(
            outcomes[1],
            Err(CalculationError::InvalidRoleLevel("Manager".to_string()))
        );
        assert_eq!(
            outcomes[2].as_ref().unwrap().calculated_base_salary,
            dec("127500.00")
        );
    }

    #[test]
    fn test_prevalidated_errors_are_kept_in_place() {
        let tables = RuleTables::standard();
        let invalid = CalculationError::InvalidNumericInput {
            field: "team_revenue".to_string(),
            message: "could not convert 'abc' to a number".to_string(),
        };
        let outcomes = calculate_batch(
            &tables,
            vec![Err(invalid.clone()), record("Junior", "0", "50000")],
        );

        assert_eq!(outcomes[0], Err(invalid));
        assert!(outcomes[1].is_ok());
    }

    #[test]
    fn test_batch_matches_single_record_calculation() {
        let tables = RuleTables::standard();
        let single = record("Executive", "20000000", "250000").unwrap();
        let expected = calculate_total_compensation(&tables, &single);

        let outcomes = calculate_batch(&tables, vec![Ok::<_, CalculationError>(single)]);
        assert_eq!(outcomes, vec![expected]);
    }

    #[test]
    fn test_empty_batch() {
        let records: Vec<Result<CompensationInput, CalculationError>> = Vec::new();
        let outcomes = calculate_batch(&RuleTables::standard(), records);
        assert!(outcomes.is_empty());
        assert_eq!(BatchSummary::from_outcomes(&outcomes), BatchSummary::default());
    }

    #[test]
    fn test_summary_counts() {
        let tables = RuleTables::standard();
        let outcomes = calculate_batch(
            &tables,
            vec![
                record("Junior", "0", "50000"),
                record("Intern", "0", "50000"),
                record("Senior", "-1", "50000"),
            ],
        );

        assert_eq!(
            BatchSummary::from_outcomes(&outcomes),
            BatchSummary {
                total: 3,
                succeeded: 1,
                failed: 2
            }
        );
    }
}
