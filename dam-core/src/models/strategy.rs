use std::sync::Arc;

use super::{BlockOrder, SingleOrder, TradingRules, block_spans};
use crate::{Dimension, StrategyError};

/// Raw decision-variable values lifted from a solved stochastic program.
///
/// This is the boundary contract with the optimization collaborator: it is
/// responsible for producing these arrays hour-major, in price-axis order,
/// with block columns laid out per [`block_spans`]. Extraction validates the
/// shapes but performs no reordering of its own.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSolution {
    /// Number of hours in the trading horizon.
    pub horizon: usize,
    /// Discretized price axis, strictly increasing; the first and last
    /// entries are the technical bounds.
    pub prices: Vec<f64>,
    /// Price-independent volume per hour, length `horizon`.
    pub independent: Vec<f64>,
    /// Price-dependent volumes: one row per price level, one column per hour.
    pub dependent: Vec<Vec<f64>>,
    /// Block volumes: one row per interior price level, one column per span
    /// of `block_spans(horizon, rules.min_block_length)`.
    pub block: Vec<Vec<f64>>,
}

/// A complete day-ahead bidding strategy: one [`SingleOrder`] per hour plus
/// the block orders placed over the horizon.
///
/// Strategies are immutable once extracted; the accessors expose read-only
/// views and the price axis is shared by reference across all hours.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderStrategy {
    horizon: usize,
    prices: Arc<[f64]>,
    single_orders: Vec<SingleOrder>,
    block_orders: Vec<BlockOrder>,
}

impl OrderStrategy {
    /// Validate a raw solution and assemble it into a strategy.
    ///
    /// Each shape check fails with a distinct [`StrategyError::ShapeMismatch`]
    /// naming the dimension; price-axis preconditions (at least two levels,
    /// strictly increasing) fail with
    /// [`StrategyError::InvalidConfiguration`]. Nothing is constructed from
    /// malformed input.
    ///
    /// Extraction is deterministic: block orders are emitted in (price row,
    /// span) lexicographic order, and cells at or below
    /// `rules.volume_floor` never materialize.
    pub fn extract(raw: RawSolution, rules: &TradingRules) -> Result<Self, StrategyError> {
        let RawSolution {
            horizon,
            prices,
            independent,
            dependent,
            block,
        } = raw;

        if horizon == 0 {
            return Err(StrategyError::InvalidConfiguration(
                "horizon must cover at least one hour".into(),
            ));
        }
        let levels = prices.len();
        if levels < 2 {
            return Err(StrategyError::InvalidConfiguration(format!(
                "price axis needs at least two levels (the technical bounds), got {levels}"
            )));
        }
        if let Some(i) = (1..levels).find(|&i| !(prices[i - 1] < prices[i])) {
            return Err(StrategyError::InvalidConfiguration(format!(
                "price axis must be strictly increasing, violated between levels {} and {}",
                i - 1,
                i
            )));
        }

        if independent.len() != horizon {
            return Err(StrategyError::ShapeMismatch {
                dimension: Dimension::IndependentVolumes,
                expected: horizon,
                actual: independent.len(),
            });
        }
        if dependent.len() != levels {
            return Err(StrategyError::ShapeMismatch {
                dimension: Dimension::DependentRows,
                expected: levels,
                actual: dependent.len(),
            });
        }
        for (row, volumes) in dependent.iter().enumerate() {
            if volumes.len() != horizon {
                return Err(StrategyError::ShapeMismatch {
                    dimension: Dimension::DependentColumns(row),
                    expected: horizon,
                    actual: volumes.len(),
                });
            }
        }

        // The span list is built once and indexed directly below; the block
        // columns are defined to follow exactly this enumeration.
        let spans = block_spans(horizon, rules.min_block_length);
        if block.len() != levels - 2 {
            return Err(StrategyError::ShapeMismatch {
                dimension: Dimension::BlockRows,
                expected: levels - 2,
                actual: block.len(),
            });
        }
        for (row, volumes) in block.iter().enumerate() {
            if volumes.len() != spans.len() {
                return Err(StrategyError::ShapeMismatch {
                    dimension: Dimension::BlockColumns(row),
                    expected: spans.len(),
                    actual: volumes.len(),
                });
            }
        }

        let prices: Arc<[f64]> = Arc::from(prices);

        let single_orders = (1..=horizon)
            .map(|hour| {
                let column = dependent.iter().map(|row| row[hour - 1]).collect();
                SingleOrder::new(hour, independent[hour - 1], column, Arc::clone(&prices))
            })
            .collect();

        let mut block_orders = Vec::new();
        for (row, volumes) in block.iter().enumerate() {
            // Interior price levels only; row 0 sits just above the lower
            // technical bound.
            let price = prices[row + 1];
            for (col, &volume) in volumes.iter().enumerate() {
                if volume > rules.volume_floor {
                    block_orders.push(BlockOrder::new(spans[col].into(), volume, price));
                }
            }
        }

        Ok(Self {
            horizon,
            prices,
            single_orders,
            block_orders,
        })
    }

    /// The number of hours in the horizon.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// The shared price axis.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// All hourly orders, index = hour - 1.
    pub fn single_orders(&self) -> &[SingleOrder] {
        &self.single_orders
    }

    /// All block orders, in extraction order.
    pub fn block_orders(&self) -> &[BlockOrder] {
        &self.block_orders
    }

    /// The order for a 1-based `hour`.
    pub fn single_order_at(&self, hour: usize) -> Result<&SingleOrder, StrategyError> {
        if hour < 1 || hour > self.horizon {
            return Err(StrategyError::OutOfRange {
                hour,
                horizon: self.horizon,
            });
        }
        Ok(&self.single_orders[hour - 1])
    }

    /// The maximum physically committable volume per hour: the independent
    /// volume, the ladder's largest volume, and every block covering the
    /// hour, acceptance ignored.
    ///
    /// This is a capacity-style upper bound, not the cleared production.
    pub fn committed_volumes(&self) -> Vec<f64> {
        (1..=self.horizon)
            .map(|hour| {
                let order = &self.single_orders[hour - 1];
                let blocks: f64 = self
                    .block_orders
                    .iter()
                    .filter(|block| block.interval().covers(hour))
                    .map(BlockOrder::volume)
                    .sum();
                order.independent_volume() + order.max_dependent_volume() + blocks
            })
            .collect()
    }
}
