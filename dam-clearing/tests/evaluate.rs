use approx::assert_abs_diff_eq;
use dam_clearing::{production, revenue, scenario_revenues, total_production, total_revenue};
use dam_core::models::{OrderStrategy, RawSolution, TradingRules};
use dam_core::{Dimension, StrategyError};
use rstest::*;

/// Two hours, three price levels, no block bids: the single-order side only.
#[fixture]
fn ladder_strategy() -> OrderStrategy {
    let raw = RawSolution {
        horizon: 2,
        prices: vec![10.0, 50.0, 90.0],
        independent: vec![5.0, 0.0],
        dependent: vec![vec![0.0, 0.0], vec![20.0, 0.0], vec![20.0, 10.0]],
        // One interior level, one span for H=2 and L=2, nothing placed.
        block: vec![vec![0.0]],
    };
    OrderStrategy::extract(raw, &TradingRules::new(2)).unwrap()
}

/// Three hours, one block bid of 15 MW at 40 over the whole horizon.
#[fixture]
fn block_strategy() -> OrderStrategy {
    let raw = RawSolution {
        horizon: 3,
        prices: vec![0.0, 40.0, 100.0],
        independent: vec![0.0; 3],
        dependent: vec![vec![0.0; 3]; 3],
        block: vec![vec![15.0]],
    };
    OrderStrategy::extract(raw, &TradingRules::new(3)).unwrap()
}

#[rstest]
fn ladder_clears_at_the_worked_example(ladder_strategy: OrderStrategy) {
    let path = [50.0, 90.0];
    // Hour 1: 5 independent + 20 at the breakpoint; hour 2: upper bound 10.
    assert_eq!(production(&ladder_strategy, &path).unwrap(), vec![25.0, 10.0]);
    assert_eq!(total_production(&ladder_strategy, &path).unwrap(), 35.0);
    assert_eq!(total_revenue(&ladder_strategy, &path).unwrap(), 2150.0);
}

#[rstest]
fn ladder_interpolates_between_breakpoints(ladder_strategy: OrderStrategy) {
    let path = [30.0, 70.0];
    let hourly = production(&ladder_strategy, &path).unwrap();
    assert_abs_diff_eq!(hourly[0], 15.0, epsilon = 1e-12);
    assert_abs_diff_eq!(hourly[1], 5.0, epsilon = 1e-12);
}

#[rstest]
fn production_is_continuous_at_breakpoints(ladder_strategy: OrderStrategy) {
    let eps = 1e-9;
    let at = production(&ladder_strategy, &[50.0, 90.0]).unwrap();
    let below = production(&ladder_strategy, &[50.0 - eps, 90.0]).unwrap();
    let above = production(&ladder_strategy, &[50.0 + eps, 90.0]).unwrap();
    assert_abs_diff_eq!(at[0], below[0], epsilon = 1e-6);
    assert_abs_diff_eq!(at[0], above[0], epsilon = 1e-6);
}

#[rstest]
fn block_tie_on_the_mean_clears(block_strategy: OrderStrategy) {
    // Mean price is exactly the 40 ask; the tie clears.
    let path = [30.0, 40.0, 50.0];
    assert_eq!(production(&block_strategy, &path).unwrap(), vec![15.0; 3]);
    assert_eq!(total_revenue(&block_strategy, &path).unwrap(), 1800.0);
}

#[rstest]
fn block_below_the_mean_is_rejected(block_strategy: OrderStrategy) {
    let path = [20.0, 30.0, 40.0];
    assert_eq!(production(&block_strategy, &path).unwrap(), vec![0.0; 3]);
}

#[rstest]
fn block_acceptance_is_monotone_in_the_mean(block_strategy: OrderStrategy) {
    // Raising a single hour's price can only flip the block towards
    // acceptance, never away from it.
    let mut path = [20.0, 30.0, 40.0];
    let mut last = total_production(&block_strategy, &path).unwrap();
    for bump in [40.0, 60.0, 80.0] {
        path[0] = bump;
        let now = total_production(&block_strategy, &path).unwrap();
        assert!(now >= last);
        last = now;
    }
    assert_eq!(last, 45.0);
}

#[rstest]
fn total_revenue_is_the_dot_product(
    ladder_strategy: OrderStrategy,
    block_strategy: OrderStrategy,
) {
    for (strategy, path) in [
        (&ladder_strategy, vec![37.5, 81.0]),
        (&block_strategy, vec![55.0, 12.0, 61.0]),
    ] {
        let hourly = production(strategy, &path).unwrap();
        let dot: f64 = hourly.iter().zip(&path).map(|(q, p)| q * p).sum();
        assert_eq!(total_revenue(strategy, &path).unwrap(), dot);
    }
}

#[rstest]
fn revenue_is_production_times_price(ladder_strategy: OrderStrategy) {
    let path = [50.0, 90.0];
    let hourly = revenue(&ladder_strategy, &path).unwrap();
    assert_eq!(hourly, vec![1250.0, 900.0]);
}

#[rstest]
fn short_price_paths_are_rejected(ladder_strategy: OrderStrategy) {
    assert_eq!(
        production(&ladder_strategy, &[50.0]).unwrap_err(),
        StrategyError::ShapeMismatch {
            dimension: Dimension::PricePath,
            expected: 2,
            actual: 1,
        }
    );
}

#[rstest]
fn scenario_revenues_evaluates_each_path(ladder_strategy: OrderStrategy) {
    let paths = vec![vec![50.0, 90.0], vec![30.0, 70.0]];
    let revenues = scenario_revenues(&ladder_strategy, &paths).unwrap();
    assert_eq!(revenues.len(), 2);
    for (total, path) in revenues.iter().zip(&paths) {
        assert_eq!(*total, total_revenue(&ladder_strategy, path).unwrap());
    }
}

#[rstest]
fn scenario_revenues_rejects_an_empty_set(ladder_strategy: OrderStrategy) {
    assert!(matches!(
        scenario_revenues(&ladder_strategy, &[]).unwrap_err(),
        StrategyError::InvalidConfiguration(_)
    ));
}
