//! Application state for the Compensation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RuleTables;

/// Shared application state.
///
/// Holds the rule tables, fixed for the lifetime of the process and shared
/// read-only between all request handlers.
#[derive(Clone)]
pub struct AppState {
    tables: Arc<RuleTables>,
}

impl AppState {
    /// Creates a new application state around the given rule tables.
    pub fn new(tables: RuleTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns a reference to the rule tables.
    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RuleTables::standard())
    }
}
