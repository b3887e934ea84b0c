//! Performance multiplier derivation from weighted review scores.
//!
//! Scores are combined with fixed weights and the weighted score is mapped
//! onto one of four multiplier tiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::rounding::{checked_add, checked_mul, ensure_non_negative};

/// Weight of the absolute return score.
pub const ABSOLUTE_RETURN_WEIGHT: Decimal = Decimal::from_parts(20, 0, 0, false, 2);
/// Weight of the relative performance score.
pub const RELATIVE_PERFORMANCE_WEIGHT: Decimal = Decimal::from_parts(50, 0, 0, false, 2);
/// Weight of the risk-adjusted score.
pub const RISK_ADJUSTED_WEIGHT: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Review scores feeding the multiplier. A missing score counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceScores {
    /// Score for absolute returns.
    #[serde(default)]
    pub absolute_return_score: Option<Decimal>,
    /// Score for performance relative to peers.
    #[serde(default, rename = "relative_perf_score")]
    pub relative_performance_score: Option<Decimal>,
    /// Score for risk-adjusted returns.
    #[serde(default)]
    pub risk_adjusted_score: Option<Decimal>,
}

/// The weighted score and the multiplier tier it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceMultiplier {
    /// The weighted sum of the scores.
    #[serde(with = "rust_decimal::serde::float")]
    pub weighted_score: Decimal,
    /// The multiplier for the tier.
    #[serde(rename = "performance_multiplier", with = "rust_decimal::serde::float")]
    pub multiplier: Decimal,
}

/// Derives a performance multiplier from review scores.
///
/// | weighted score | multiplier |
/// |----------------|------------|
/// | < 2.5          | 0.8        |
/// | 2.5 – < 3.5    | 1.0        |
/// | 3.5 – < 4.5    | 1.1        |
/// | >= 4.5         | 1.2        |
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::{calculate_performance_multiplier, PerformanceScores};
/// use rust_decimal::Decimal;
///
/// let scores = PerformanceScores {
///     absolute_return_score: Some(Decimal::new(4, 0)),
///     relative_performance_score: Some(Decimal::new(4, 0)),
///     risk_adjusted_score: Some(Decimal::new(4, 0)),
/// };
/// let result = calculate_performance_multiplier(&scores).unwrap();
/// assert_eq!(result.multiplier, Decimal::new(11, 1));
/// ```
pub fn calculate_performance_multiplier(
    scores: &PerformanceScores,
) -> EngineResult<PerformanceMultiplier> {
    let absolute = scores.absolute_return_score.unwrap_or_default();
    let relative = scores.relative_performance_score.unwrap_or_default();
    let risk = scores.risk_adjusted_score.unwrap_or_default();

    ensure_non_negative("absolute_return_score", absolute)?;
    ensure_non_negative("relative_perf_score", relative)?;
    ensure_non_negative("risk_adjusted_score", risk)?;

    let weighted_score = checked_add(
        checked_add(
            checked_mul(absolute, ABSOLUTE_RETURN_WEIGHT, "weighted score")?,
            checked_mul(relative, RELATIVE_PERFORMANCE_WEIGHT, "weighted score")?,
            "weighted score",
        )?,
        checked_mul(risk, RISK_ADJUSTED_WEIGHT, "weighted score")?,
        "weighted score",
    )?;

    Ok(PerformanceMultiplier {
        weighted_score,
        multiplier: multiplier_for_score(weighted_score),
    })
}

fn multiplier_for_score(weighted_score: Decimal) -> Decimal {
    if weighted_score < Decimal::new(25, 1) {
        Decimal::new(8, 1)
    } else if weighted_score < Decimal::new(35, 1) {
        Decimal::ONE
    } else if weighted_score < Decimal::new(45, 1) {
        Decimal::new(11, 1)
    } else {
        Decimal::new(12, 1)
    }
}
