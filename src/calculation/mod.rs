//! Calculation logic for the Compensation Engine.
//!
//! This module contains the three rule stages (capped base salary,
//! performance bonus, LTI split), the orchestrator that chains them, the
//! row-wise batch calculation and the performance multiplier derivation.

mod base_salary;
mod batch;
mod lti;
mod orchestrator;
mod performance_bonus;
mod performance_multiplier;
mod rounding;

pub use base_salary::compute_base_salary;
pub use batch::{BatchOutcome, BatchSummary, calculate_batch};
pub use lti::{LtiAndCash, compute_lti_and_cash};
pub use orchestrator::{CalculationError, calculate_total_compensation};
pub use performance_bonus::{PerformanceBonus, compute_performance_bonus};
pub use performance_multiplier::{
    ABSOLUTE_RETURN_WEIGHT, PerformanceMultiplier, PerformanceScores, RELATIVE_PERFORMANCE_WEIGHT,
    RISK_ADJUSTED_WEIGHT, calculate_performance_multiplier,
};
pub use rounding::{MONEY_DECIMAL_PLACES, round_money};
