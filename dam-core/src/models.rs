mod block;
mod config;
mod single;
mod span;
mod strategy;

pub use block::BlockOrder;
pub use config::TradingRules;
pub use single::SingleOrder;
pub use span::{DeliveryInterval, HourSpan, block_spans};
pub use strategy::{OrderStrategy, RawSolution};
