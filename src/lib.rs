//! Compensation Engine
//!
//! This crate calculates total compensation for an employee from their role
//! level, team revenue, last year's salary and a performance multiplier:
//! a revenue-linked base salary capped against last year's salary, a
//! performance bonus, and that bonus split into long-term incentives and
//! immediate cash.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
