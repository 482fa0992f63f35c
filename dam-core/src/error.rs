use std::fmt;

/// The axis along which a shape mismatch was detected.
///
/// Row indices are zero-based and refer to the raw solution arrays as
/// supplied, so an error message can be matched directly against the
/// offending input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// The vector of hourly price-independent volumes (expected length = horizon).
    IndependentVolumes,
    /// The row count of the price-dependent array (expected = number of price levels).
    DependentRows,
    /// The column count of one price-dependent row (expected = horizon).
    DependentColumns(usize),
    /// The row count of the block array (expected = number of interior price levels).
    BlockRows,
    /// The column count of one block row (expected = number of valid block spans).
    BlockColumns(usize),
    /// A realized hourly price path (expected length = horizon).
    PricePath,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndependentVolumes => write!(f, "independent volume vector"),
            Self::DependentRows => write!(f, "price-dependent row count"),
            Self::DependentColumns(row) => write!(f, "price-dependent row {row}"),
            Self::BlockRows => write!(f, "block row count"),
            Self::BlockColumns(row) => write!(f, "block row {row}"),
            Self::PricePath => write!(f, "price path"),
        }
    }
}

/// Errors raised while extracting or evaluating an order strategy.
///
/// All validation is eager: either the inputs satisfy the contract and a
/// complete value model (or evaluation result) is returned, or the
/// operation fails entirely. There are no partial results.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StrategyError {
    /// An array or vector disagreed with the expected dimensions.
    #[error("shape mismatch in {dimension}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Which axis failed.
        dimension: Dimension,
        /// The length implied by the horizon, price axis, or span enumeration.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },
    /// An hour index outside the strategy's horizon.
    #[error("hour {hour} is out of range; valid hours are 1..={horizon}")]
    OutOfRange {
        /// The offending hour.
        hour: usize,
        /// The horizon length, i.e. the largest valid hour.
        horizon: usize,
    },
    /// An argument that no well-formed strategy or evaluation can be built from.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
