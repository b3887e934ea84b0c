//! Role level model.
//!
//! This module defines the closed set of job grades that drive every
//! rule table lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The job grade of an employee.
///
/// The wire names are exact and case-sensitive: `"Junior"`, `"Mid-level"`,
/// `"Senior"` and `"Executive"`.
///
/// # Examples
///
/// ```
/// use compensation_engine::models::RoleLevel;
///
/// let role: RoleLevel = "Mid-level".parse().unwrap();
/// assert_eq!(role, RoleLevel::MidLevel);
/// assert_eq!(role.to_string(), "Mid-level");
/// assert!("mid-level".parse::<RoleLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleLevel {
    /// Entry-level grade. Not eligible for equity awards.
    Junior,
    /// Intermediate grade.
    #[serde(rename = "Mid-level")]
    MidLevel,
    /// Senior grade.
    Senior,
    /// Executive grade.
    Executive,
}

impl RoleLevel {
    /// All role levels in ascending order of seniority.
    pub const ALL: [RoleLevel; 4] = [
        RoleLevel::Junior,
        RoleLevel::MidLevel,
        RoleLevel::Senior,
        RoleLevel::Executive,
    ];

    /// Returns the wire name of the role level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleLevel::Junior => "Junior",
            RoleLevel::MidLevel => "Mid-level",
            RoleLevel::Senior => "Senior",
            RoleLevel::Executive => "Executive",
        }
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleLevel::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| EngineError::UnknownRoleLevel {
                value: s.to_string(),
            })
    }
}
