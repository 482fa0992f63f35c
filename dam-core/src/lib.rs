#![warn(missing_docs)]
//! Domain models for day-ahead electricity market order strategies.
//!
//! A solved stochastic program hands us raw decision-variable arrays: hourly
//! price-independent volumes, a price-dependent bid ladder per hour, and
//! volumes for multi-hour block bids. This crate validates those arrays and
//! assembles them into an immutable [`models::OrderStrategy`], which the
//! `dam-clearing` crate then evaluates against realized price paths.
//!
//! Model construction, solver invocation, data loading, and all presentation
//! concerns live outside this crate; it only consumes solution arrays and
//! exposes read-only accessors.

/// Core domain models for order strategies.
///
/// The models in this module are immutable value objects with minimal
/// business logic: every entity is constructed once, by validated
/// extraction from raw solution arrays, and never mutated afterwards.
pub mod models;

mod error;
pub use error::{Dimension, StrategyError};
