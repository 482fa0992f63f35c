use std::sync::Arc;

/// One hour's bid: a price-independent volume plus a price-dependent ladder.
///
/// The ladder is anchored on the strategy's shared price axis. Its first and
/// last entries are the technical bounds, the volumes at the lowest and
/// highest representable prices; the interior entries are the actual bid
/// ladder. Between neighboring price levels the committed volume is the
/// linear interpolation of the two adjacent ladder entries.
///
/// Invariant, enforced at extraction: `dependent_volumes` and `prices` have
/// equal length P >= 2 and the price axis is strictly increasing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleOrder {
    hour: usize,
    independent_volume: f64,
    dependent_volumes: Vec<f64>,
    prices: Arc<[f64]>,
}

impl SingleOrder {
    pub(crate) fn new(
        hour: usize,
        independent_volume: f64,
        dependent_volumes: Vec<f64>,
        prices: Arc<[f64]>,
    ) -> Self {
        debug_assert_eq!(dependent_volumes.len(), prices.len());
        Self {
            hour,
            independent_volume,
            dependent_volumes,
            prices,
        }
    }

    /// The 1-based hour this order applies to.
    pub fn hour(&self) -> usize {
        self.hour
    }

    /// Volume offered regardless of the clearing price.
    pub fn independent_volume(&self) -> f64 {
        self.independent_volume
    }

    /// The full dependent-volume vector, technical bounds included.
    pub fn dependent_volumes(&self) -> &[f64] {
        &self.dependent_volumes
    }

    /// The interior of the ladder, with the two technical bounds stripped.
    pub fn dependent_ladder(&self) -> &[f64] {
        &self.dependent_volumes[1..self.dependent_volumes.len() - 1]
    }

    /// Volume at the lowest representable price.
    pub fn lower_technical_bound(&self) -> f64 {
        self.dependent_volumes[0]
    }

    /// Volume at the highest representable price.
    pub fn upper_technical_bound(&self) -> f64 {
        self.dependent_volumes[self.dependent_volumes.len() - 1]
    }

    /// The shared price axis the ladder is defined on.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// The largest volume anywhere on the ladder.
    pub fn max_dependent_volume(&self) -> f64 {
        self.dependent_volumes
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// The volume this order clears at `price`: the independent volume plus
    /// the interpolated dependent contribution.
    pub fn cleared_volume(&self, price: f64) -> f64 {
        self.independent_volume + self.dependent_at(price)
    }

    /// Piecewise-linear interpolation of the ladder at `price`.
    ///
    /// Brackets are scanned in increasing price order and the first bracket
    /// containing `price` wins; a price landing exactly on an interior
    /// breakpoint evaluates identically from either side, so there is no
    /// discontinuity. Prices outside the axis clamp to the technical
    /// bounds, which are designed to bracket any realistic price.
    pub fn dependent_at(&self, price: f64) -> f64 {
        let prices = &self.prices;
        let volumes = &self.dependent_volumes;
        let last = prices.len() - 1;

        if price < prices[0] {
            return volumes[0];
        }
        if price > prices[last] {
            return volumes[last];
        }
        for i in 1..=last {
            let (p1, p2) = (prices[i - 1], prices[i]);
            if (p1 <= price && price < p2) || (p1 < price && price <= p2) {
                let t = (price - p1) / (p2 - p1);
                return t * volumes[i] + (1.0 - t) * volumes[i - 1];
            }
        }
        // Unreachable for a strictly increasing axis, but the clamp above
        // makes the fallback consistent anyway.
        volumes[last]
    }
}
