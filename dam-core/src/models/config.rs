/// Trading-regulation and numeric-tolerance parameters for extraction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradingRules {
    /// Minimum number of hours a block bid must span.
    pub min_block_length: usize,
    /// Solution volumes at or below this floor are treated as solver noise
    /// and dropped. This is a tolerance policy, not a correctness rule; tune
    /// it to the solver producing the arrays.
    pub volume_floor: f64,
}

impl TradingRules {
    /// Rules with the given minimum block length and the default noise floor.
    pub fn new(min_block_length: usize) -> Self {
        Self {
            min_block_length,
            ..Self::default()
        }
    }
}

impl Default for TradingRules {
    fn default() -> Self {
        Self {
            min_block_length: 3,
            volume_floor: 1e-6,
        }
    }
}
