//! Rule file loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading compensation
//! rule tables from a YAML file once at startup.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::RoleLevel;

use super::types::RuleTables;

/// Loads and validates compensation rule tables.
///
/// # File Format
///
/// ```text
/// salary_cap:
///   lower_bound: 0.85
///   upper_bound: 1.15
/// roles:
///   Junior:
///     fixed_floor: 50000
///     revenue_factor: 0.005
///     target_bonus_percent: 0.30
///     deferral_percent: 0.10
///     fund_investment_percent: 0.05
///     equity_eligible: false
///     equity_factor: 0.0
///   Mid-level:
///     ...
/// ```
///
/// # Example
///
/// ```no_run
/// use compensation_engine::config::ConfigLoader;
/// use compensation_engine::models::RoleLevel;
///
/// let loader = ConfigLoader::load("./config/rules.yaml")?;
/// let params = loader.tables().parameters(RoleLevel::Senior)?;
/// println!("Senior floor: {}", params.fixed_floor);
/// # Ok::<(), compensation_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: RuleTables,
}

impl ConfigLoader {
    /// Loads rule tables from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or
    /// describes tables that fail validation (see [`ConfigLoader::validate`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(path = %path_str, roles = loader.tables.roles().len(), "Loaded rule tables");
        Ok(loader)
    }

    /// Parses and validates rule tables from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let tables: RuleTables =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&tables)?;
        Ok(Self { tables })
    }

    /// Wraps the built-in standard tables.
    pub fn standard() -> Self {
        Self {
            tables: RuleTables::standard(),
        }
    }

    /// Checks the constraints every rule table must satisfy.
    ///
    /// - every role level has parameters
    /// - `0 <= lower_bound <= upper_bound`
    /// - floors and ratios are non-negative
    ///
    /// A role whose deferral and fund percentages sum above 1 is accepted
    /// with a warning; its immediate cash bonus will come out negative.
    pub fn validate(tables: &RuleTables) -> EngineResult<()> {
        let cap = tables.salary_cap();
        if cap.lower_bound < Decimal::ZERO || cap.lower_bound > cap.upper_bound {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "salary cap bounds must satisfy 0 <= lower ({}) <= upper ({})",
                    cap.lower_bound, cap.upper_bound
                ),
            });
        }

        for role in RoleLevel::ALL {
            let params = tables
                .roles()
                .get(&role)
                .ok_or_else(|| EngineError::InvalidConfig {
                    message: format!("missing parameters for role level {}", role),
                })?;

            let fields = [
                ("fixed_floor", params.fixed_floor),
                ("revenue_factor", params.revenue_factor),
                ("target_bonus_percent", params.target_bonus_percent),
                ("deferral_percent", params.deferral_percent),
                ("fund_investment_percent", params.fund_investment_percent),
                ("equity_factor", params.equity_factor),
            ];
            if let Some((name, value)) = fields.into_iter().find(|(_, v)| *v < Decimal::ZERO) {
                return Err(EngineError::InvalidConfig {
                    message: format!("{}.{} must be non-negative, got {}", role, name, value),
                });
            }

            if params.deferral_percent + params.fund_investment_percent > Decimal::ONE {
                warn!(
                    role = %role,
                    deferral_percent = %params.deferral_percent,
                    fund_investment_percent = %params.fund_investment_percent,
                    "Deferral and fund percentages exceed 100%; immediate cash will be negative"
                );
            }
        }

        Ok(())
    }

    /// Returns the loaded rule tables.
    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// Consumes the loader, returning the rule tables.
    pub fn into_tables(self) -> RuleTables {
        self.tables
    }
}
