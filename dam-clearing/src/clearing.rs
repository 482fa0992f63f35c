use dam_core::models::{BlockOrder, OrderStrategy};
use dam_core::{Dimension, StrategyError};

fn check_path(strategy: &OrderStrategy, path: &[f64]) -> Result<(), StrategyError> {
    if path.len() != strategy.horizon() {
        return Err(StrategyError::ShapeMismatch {
            dimension: Dimension::PricePath,
            expected: strategy.horizon(),
            actual: path.len(),
        });
    }
    Ok(())
}

// One acceptance pass over all blocks; the result is shared by every hour.
fn accepted_blocks<'a>(strategy: &'a OrderStrategy, path: &[f64]) -> Vec<&'a BlockOrder> {
    let accepted: Vec<_> = strategy
        .block_orders()
        .iter()
        .filter(|block| {
            let clears = block.clears_at(path);
            tracing::trace!(
                start = block.interval().start(),
                end = block.interval().end(),
                price = block.price(),
                clears,
                "block acceptance"
            );
            clears
        })
        .collect();
    tracing::debug!(
        accepted = accepted.len(),
        placed = strategy.block_orders().len(),
        "block acceptance pass"
    );
    accepted
}

/// Physical production per hour when `path` clears the market.
///
/// For each hour this is the price-independent volume, plus the
/// interpolated price-dependent ladder at that hour's price, plus the
/// volume of every accepted block covering the hour. Block acceptance is
/// decided once, against the mean price over each block's delivery hours.
///
/// Fails with [`StrategyError::ShapeMismatch`] unless `path` holds exactly
/// one price per hour of the horizon.
pub fn production(strategy: &OrderStrategy, path: &[f64]) -> Result<Vec<f64>, StrategyError> {
    check_path(strategy, path)?;
    let accepted = accepted_blocks(strategy, path);

    let hourly = strategy
        .single_orders()
        .iter()
        .map(|order| {
            let hour = order.hour();
            let blocks: f64 = accepted
                .iter()
                .filter(|block| block.interval().covers(hour))
                .map(|block| block.volume())
                .sum();
            order.cleared_volume(path[hour - 1]) + blocks
        })
        .collect();
    Ok(hourly)
}

/// Total production over the horizon under `path`.
pub fn total_production(strategy: &OrderStrategy, path: &[f64]) -> Result<f64, StrategyError> {
    Ok(production(strategy, path)?.iter().sum())
}

/// Revenue per hour: production times the hour's realized price.
pub fn revenue(strategy: &OrderStrategy, path: &[f64]) -> Result<Vec<f64>, StrategyError> {
    let mut hourly = production(strategy, path)?;
    for (volume, price) in hourly.iter_mut().zip(path) {
        *volume *= price;
    }
    Ok(hourly)
}

/// Total revenue over the horizon: the dot product of production and `path`.
pub fn total_revenue(strategy: &OrderStrategy, path: &[f64]) -> Result<f64, StrategyError> {
    Ok(revenue(strategy, path)?.iter().sum())
}

/// Total revenue under each of several price paths (e.g. price scenarios).
///
/// Fails with [`StrategyError::InvalidConfiguration`] on an empty scenario
/// set, and with [`StrategyError::ShapeMismatch`] on the first path that
/// does not span the horizon.
pub fn scenario_revenues(
    strategy: &OrderStrategy,
    paths: &[Vec<f64>],
) -> Result<Vec<f64>, StrategyError> {
    if paths.is_empty() {
        return Err(StrategyError::InvalidConfiguration(
            "at least one price path is required".into(),
        ));
    }
    paths
        .iter()
        .map(|path| total_revenue(strategy, path))
        .collect()
}
