//! Configuration loading and management for the Compensation Engine.
//!
//! This module provides the immutable rule tables that drive every
//! calculation, a loader for reading them from a YAML file, and the
//! environment-driven server settings.
//!
//! # Example
//!
//! ```no_run
//! use compensation_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/rules.yaml").unwrap();
//! println!("Roles configured: {}", loader.tables().roles().len());
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{ADDR_ENV, RULES_PATH_ENV, ServerSettings};
pub use types::{RoleParameters, RuleTables, SalaryCapBounds};
