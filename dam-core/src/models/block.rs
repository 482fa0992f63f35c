use super::DeliveryInterval;

/// A multi-hour block bid: one limit price for a contiguous delivery interval,
/// accepted or rejected as a whole.
///
/// Block orders only materialize for solution cells whose volume exceeds the
/// configured noise floor, so `volume` is always strictly positive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockOrder {
    interval: DeliveryInterval,
    volume: f64,
    price: f64,
}

impl BlockOrder {
    pub(crate) fn new(interval: DeliveryInterval, volume: f64, price: f64) -> Self {
        Self {
            interval,
            volume,
            price,
        }
    }

    /// The delivery interval, exclusive-start/inclusive-end.
    pub fn interval(&self) -> DeliveryInterval {
        self.interval
    }

    /// The volume delivered in every covered hour if the block clears.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// The limit price for the whole block.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Whether this block clears against the realized hourly `prices`.
    ///
    /// The block is accepted iff its limit price is at or below the mean
    /// realized price over its delivery hours; a tie clears. Acceptance is
    /// independent per block, with no combinatorial exclusivity.
    ///
    /// `prices` must cover the full horizon (one entry per hour, hour `h`
    /// at index `h - 1`); callers validate the length before dispatching.
    pub fn clears_at(&self, prices: &[f64]) -> bool {
        let mut sum = 0.0;
        let mut count = 0usize;
        for hour in self.interval.hours() {
            sum += prices[hour - 1];
            count += 1;
        }
        count > 0 && self.price <= sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HourSpan;

    fn block(price: f64) -> BlockOrder {
        BlockOrder::new(HourSpan { start: 1, end: 3 }.into(), 15.0, price)
    }

    #[test]
    fn tie_on_the_mean_clears() {
        let prices = [30.0, 40.0, 50.0];
        assert!(block(40.0).clears_at(&prices));
    }

    #[test]
    fn ask_above_the_mean_rejects() {
        let prices = [30.0, 40.0, 50.0];
        assert!(!block(40.0 + 1e-9).clears_at(&prices));
    }

    #[test]
    fn acceptance_is_monotone_in_the_mean() {
        let block = block(40.0);
        let low = [10.0, 10.0, 10.0];
        let high = [90.0, 90.0, 90.0];
        assert!(!block.clears_at(&low));
        assert!(block.clears_at(&high));
    }

    #[test]
    fn only_delivery_hours_enter_the_mean() {
        // Delivery hours 2..=3; hour 1 is priced absurdly and must not count.
        let block = BlockOrder::new(HourSpan { start: 2, end: 3 }.into(), 1.0, 40.0);
        let prices = [1e9, 40.0, 40.0];
        assert!(block.clears_at(&prices));
    }
}
