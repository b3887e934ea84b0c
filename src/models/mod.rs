//! Core data models for the Compensation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod role_level;

pub use compensation::{CompensationInput, CompensationResult, LtiBreakdown};
pub use role_level::RoleLevel;
