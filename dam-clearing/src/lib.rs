#![warn(missing_docs)]
//! Market-clearing evaluation of day-ahead order strategies.
//!
//! Given an extracted [`dam_core::models::OrderStrategy`] and a realized (or
//! hypothesized) hourly price path, this crate computes the physical
//! production, revenue, and total revenue the strategy yields under market
//! clearing: piecewise-linear interpolation for the hourly price-dependent
//! orders and a mean-price acceptance test for the block orders.
//!
//! Everything here is a pure function of `(strategy, path)`; results may be
//! memoized or evaluated in parallel across independent inputs.

mod clearing;
pub use clearing::{production, revenue, scenario_revenues, total_production, total_revenue};
